//! # Domain Types
//!
//! Core domain types used throughout ShelfLife.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │     Stats       │   │   SortOption    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  total_products │   │  ExpiryAsc      │   │
//! │  │  barcode        │   │  total_quantity │   │  ExpiryDesc     │   │
//! │  │  name           │   │  expired_count  │   │  NameAsc        │   │
//! │  │  category       │   │  critical_count │   │  QuantityDesc   │   │
//! │  │  expiry_date    │   │  warning_count  │   └─────────────────┘   │
//! │  │  quantity       │   └─────────────────┘                         │
//! │  │  image?         │   ┌─────────────────┐   ┌─────────────────┐   │
//! │  └─────────────────┘   │    Category     │   │ CategoryFilter  │   │
//! │                        │  7 fixed labels │   │  All | Only(c)  │   │
//! │                        └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Serde uses camelCase field names and the original Turkish category labels
//! so that backup documents produced by earlier versions of the app
//! round-trip byte-for-byte through import/export.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::expiry::{self, ExpiryStatus};

// =============================================================================
// Category
// =============================================================================

/// A fixed, closed set of product categories.
///
/// Unknown categories cannot be constructed: the enum is the validation.
/// The serde names are the user-facing labels (kept verbatim from the
/// original backup format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    /// Dairy and breakfast goods.
    #[serde(rename = "Süt ve Kahvaltılık")]
    DairyBreakfast,
    /// Meat and poultry.
    #[serde(rename = "Et ve Tavuk")]
    MeatPoultry,
    /// Fruit and vegetables.
    #[serde(rename = "Meyve ve Sebze")]
    Produce,
    /// Beverages.
    #[serde(rename = "İçecekler")]
    Beverages,
    /// Snacks.
    #[serde(rename = "Atıştırmalık")]
    Snacks,
    /// Cleaning supplies.
    #[serde(rename = "Temizlik")]
    Cleaning,
    /// Everything else.
    #[serde(rename = "Diğer")]
    Other,
}

impl Category {
    /// All categories, in the order they appear in pickers.
    pub const ALL: [Category; 7] = [
        Category::DairyBreakfast,
        Category::MeatPoultry,
        Category::Produce,
        Category::Beverages,
        Category::Snacks,
        Category::Cleaning,
        Category::Other,
    ];

    /// User-facing label (identical to the serde wire name).
    pub fn label(&self) -> &'static str {
        match self {
            Category::DairyBreakfast => "Süt ve Kahvaltılık",
            Category::MeatPoultry => "Et ve Tavuk",
            Category::Produce => "Meyve ve Sebze",
            Category::Beverages => "İçecekler",
            Category::Snacks => "Atıştırmalık",
            Category::Cleaning => "Temizlik",
            Category::Other => "Diğer",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

// =============================================================================
// Product
// =============================================================================

/// A perishable product in the inventory.
///
/// Identity lives entirely in `id`; duplicate barcodes are allowed.
/// Records are immutable after construction — the only lifecycle events are
/// creation, wholesale replacement (import) and deletion by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4). Sole key for equality and lookup.
    pub id: String,

    /// Barcode as decoded by the scanner. Free-form, not re-validated.
    pub barcode: String,

    /// Display name. Never empty.
    pub name: String,

    /// Category from the fixed set.
    pub category: Category,

    /// Expiry date (SKT), day granularity.
    #[ts(as = "String")]
    pub expiry_date: NaiveDate,

    /// Units in stock. Always >= 1.
    pub quantity: i64,

    /// Optional embedded photo as a base64 JPEG data URI (already
    /// preprocessed to thumbnail size).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Equal to `created_at` — there is no edit-in-place operation.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructs a new product with a fresh UUID and both timestamps set
    /// to `now`.
    pub fn new(
        barcode: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        expiry_date: NaiveDate,
        quantity: i64,
        image: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Product {
            id: Uuid::new_v4().to_string(),
            barcode: barcode.into(),
            name: name.into(),
            category,
            expiry_date,
            quantity,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Signed whole days until expiry relative to `now`.
    #[inline]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        expiry::days_remaining(self.expiry_date, now)
    }

    /// Expiry status bucket relative to `now`.
    #[inline]
    pub fn status(&self, now: DateTime<Utc>) -> ExpiryStatus {
        expiry::status_of(self.expiry_date, now)
    }
}

// =============================================================================
// Sort Option
// =============================================================================

/// Sort key for inventory views.
///
/// Sorting is always stable: products with equal keys keep their relative
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Soonest expiry first.
    ExpiryAsc,
    /// Latest expiry first.
    ExpiryDesc,
    /// Name A-Z (case-insensitive).
    NameAsc,
    /// Largest quantity first.
    QuantityDesc,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::ExpiryAsc
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category filter for inventory views.
///
/// Replaces the open `"all" | <label>` string of earlier versions with a
/// closed variant type, so filters are exhaustiveness-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every category.
    All,
    /// Match exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Derived inventory summary. Recomputed on demand, never persisted.
///
/// The three expiry counters are disjoint; together with the implicit Ok
/// count they partition the collection exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of product records.
    pub total_products: usize,
    /// Sum of all quantities.
    pub total_quantity: i64,
    /// Products already past their expiry date.
    pub expired_count: usize,
    /// Products expiring within 0-3 days inclusive.
    pub critical_count: usize,
    /// Products expiring within 4-7 days inclusive.
    pub warning_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_category_labels_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_product_new_sets_identity_and_timestamps() {
        let now = sample_now();
        let expiry = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let product = Product::new("869001", "Süt 1L", Category::DairyBreakfast, expiry, 2, None, now);

        assert!(Uuid::parse_str(&product.id).is_ok());
        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, product.created_at);
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let now = sample_now();
        let expiry = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let a = Product::new("1", "A", Category::Other, expiry, 1, None, now);
        let b = Product::new("1", "A", Category::Other, expiry, 1, None, now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let now = sample_now();
        let expiry = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let product = Product::new("869001", "Süt 1L", Category::DairyBreakfast, expiry, 1, None, now);

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("expiryDate").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["category"], "Süt ve Kahvaltılık");
        // Absent image is omitted entirely, matching the original documents.
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_sort_option_wire_values() {
        assert_eq!(
            serde_json::to_string(&SortOption::ExpiryAsc).unwrap(),
            "\"expiry_asc\""
        );
        assert_eq!(
            serde_json::to_string(&SortOption::QuantityDesc).unwrap(),
            "\"quantity_desc\""
        );
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Snacks));
        assert!(CategoryFilter::Only(Category::Snacks).matches(Category::Snacks));
        assert!(!CategoryFilter::Only(Category::Snacks).matches(Category::Other));
    }
}
