//! # Stats Aggregation
//!
//! Derives the dashboard summary from a collection snapshot in one pass.
//!
//! One consistent `now` timestamp is used for the whole pass. Re-sampling
//! the clock per item could flip a product between buckets mid-aggregation
//! near a midnight boundary, breaking the partition property.

use chrono::{DateTime, Utc};

use crate::expiry::{classify, days_remaining, ExpiryStatus};
use crate::types::{Product, Stats};

// =============================================================================
// Aggregation
// =============================================================================

/// Computes summary statistics for a collection snapshot.
///
/// Single pass: every product contributes to `total_products`,
/// `total_quantity` and exactly one expiry bucket (Ok is implicit).
///
/// ## Example
/// ```rust
/// use chrono::{Duration, Utc};
/// use shelflife_core::stats::aggregate;
/// use shelflife_core::types::{Category, Product};
///
/// let now = Utc::now();
/// let soon = (now + Duration::days(2)).date_naive();
/// let products = vec![Product::new("1", "Süt", Category::DairyBreakfast, soon, 5, None, now)];
/// let stats = aggregate(&products, now);
/// assert_eq!(stats.critical_count, 1);
/// assert_eq!(stats.total_quantity, 5);
/// ```
pub fn aggregate(products: &[Product], now: DateTime<Utc>) -> Stats {
    let mut stats = Stats {
        total_products: products.len(),
        ..Stats::default()
    };

    for product in products {
        stats.total_quantity += product.quantity;

        match classify(days_remaining(product.expiry_date, now)) {
            ExpiryStatus::Expired => stats.expired_count += 1,
            ExpiryStatus::Critical => stats.critical_count += 1,
            ExpiryStatus::Warning => stats.warning_count += 1,
            ExpiryStatus::Ok => {}
        }
    }

    stats
}

// =============================================================================
// Unit Tests
// =============================================================================
