//! # Query Engine
//!
//! Filtering and sorting pipeline that feeds every inventory view.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      ProductQuery::run                              │
//! │                                                                     │
//! │  snapshot ──► filter (search text AND category) ──► stable sort     │
//! │                                                                     │
//! │  • search: case-insensitive substring on name,                      │
//! │            raw substring on barcode                                 │
//! │  • the source slice is never mutated; the result is a fresh Vec     │
//! │  • equal sort keys keep their relative insertion order              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{CategoryFilter, Product, SortOption};

// =============================================================================
// Product Query
// =============================================================================

/// A filter + sort specification for one inventory view.
///
/// ## Usage
/// ```rust
/// use shelflife_core::query::ProductQuery;
/// use shelflife_core::types::SortOption;
///
/// let query = ProductQuery::new()
///     .search("süt")
///     .sort(SortOption::ExpiryAsc);
/// let view = query.run(&[]);
/// assert!(view.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Free-text search term. Empty matches everything.
    pub search: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Sort key applied after filtering.
    pub sort: SortOption,
}

impl ProductQuery {
    /// Creates a query that matches everything, sorted by soonest expiry.
    pub fn new() -> Self {
        ProductQuery::default()
    }

    /// Sets the search text.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Sets the category filter.
    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    /// Sets the sort option.
    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a single product passes the filter predicates.
    ///
    /// Name matching is case-insensitive; barcode matching is a raw
    /// substring test (barcodes are digit strings, case does not apply).
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle) || product.barcode.contains(&self.search)
    }

    /// Runs the query against a snapshot, producing a fresh ordered Vec.
    ///
    /// The input is untouched; filtering happens first, then one stable
    /// sort pass.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        let mut view: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        // Vec::sort_by is stable, which the view contract relies on.
        match self.sort {
            SortOption::ExpiryAsc => view.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date)),
            SortOption::ExpiryDesc => view.sort_by(|a, b| b.expiry_date.cmp(&a.expiry_date)),
            SortOption::NameAsc => {
                view.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
            SortOption::QuantityDesc => view.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        }

        view
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn product(name: &str, barcode: &str, category: Category, expiry: (i32, u32, u32), quantity: i64) -> Product {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Product::new(
            barcode,
            name,
            category,
            NaiveDate::from_ymd_opt(expiry.0, expiry.1, expiry.2).unwrap(),
            quantity,
            None,
            now,
        )
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("Süt 1L", "8690000001", Category::DairyBreakfast, (2024, 6, 10), 5),
            product("Ayran", "8690000002", Category::Beverages, (2024, 6, 5), 2),
            product("Peynir", "8690000003", Category::DairyBreakfast, (2024, 6, 10), 9),
            product("Deterjan", "8690111111", Category::Cleaning, (2025, 1, 1), 1),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let products = fixture();
        let view = ProductQuery::new().run(&products);
        assert_eq!(view.len(), products.len());
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let products = fixture();
        let view = ProductQuery::new().search("SÜT").run(&products);
        // Turkish dotted capital İ aside, lowercase folding handles Ü→ü.
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Süt 1L");
    }

    #[test]
    fn test_search_matches_barcode_substring() {
        let products = fixture();
        let view = ProductQuery::new().search("111").run(&products);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Deterjan");
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let products = fixture();
        let view = ProductQuery::new()
            .search("869")
            .category(CategoryFilter::Only(Category::DairyBreakfast))
            .run(&products);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| p.category == Category::DairyBreakfast));
    }

    #[test]
    fn test_result_never_longer_than_input() {
        let products = fixture();
        for search in ["", "a", "süt", "zzz", "869"] {
            let view = ProductQuery::new().search(search).run(&products);
            assert!(view.len() <= products.len());
        }
    }

    #[test]
    fn test_run_does_not_mutate_source() {
        let products = fixture();
        let before: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        let _ = ProductQuery::new().sort(SortOption::NameAsc).run(&products);
        let after: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_expiry_asc() {
        let products = fixture();
        let view = ProductQuery::new().sort(SortOption::ExpiryAsc).run(&products);
        let dates: Vec<_> = view.iter().map(|p| p.expiry_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_sort_expiry_asc_is_stable() {
        // "Süt 1L" and "Peynir" share an expiry date; insertion order wins.
        let products = fixture();
        let view = ProductQuery::new().sort(SortOption::ExpiryAsc).run(&products);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        let sut = names.iter().position(|n| *n == "Süt 1L").unwrap();
        let peynir = names.iter().position(|n| *n == "Peynir").unwrap();
        assert!(sut < peynir);
    }

    #[test]
    fn test_sort_quantity_desc() {
        let products = fixture();
        let view = ProductQuery::new().sort(SortOption::QuantityDesc).run(&products);
        let quantities: Vec<i64> = view.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![9, 5, 2, 1]);
    }

    #[test]
    fn test_sort_name_asc_ignores_case() {
        let mut products = fixture();
        products.push(product("ayran light", "8690000009", Category::Beverages, (2024, 7, 1), 1));
        let view = ProductQuery::new().sort(SortOption::NameAsc).run(&products);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        let first = names.iter().position(|n| *n == "Ayran").unwrap();
        let second = names.iter().position(|n| *n == "ayran light").unwrap();
        assert!(first < second);
    }
}
