//! # Persistence Store
//!
//! Serializes the full product collection to one JSON document under one
//! fixed key, and reads it back at startup.
//!
//! ## Load Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          load()                                     │
//! │                                                                     │
//! │  medium.get(STORAGE_KEY)                                            │
//! │       │                                                             │
//! │       ├── None ───────────────► []                                  │
//! │       ├── read error ─► warn! ─► []                                 │
//! │       └── Some(bytes)                                               │
//! │               │                                                     │
//! │               ├── parse error ─► warn! ─► []                        │
//! │               └── Vec<Product>                                      │
//! │                                                                     │
//! │  Read failures are non-fatal and self-healing: the user sees an     │
//! │  empty inventory, never a crash.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use shelflife_core::Product;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::medium::StorageMedium;

/// The one fixed logical key holding the serialized collection.
///
/// Kept verbatim from the original app so existing stores keep working.
pub const STORAGE_KEY: &str = "market_takip_products";

// =============================================================================
// Persistence Store
// =============================================================================

/// Durable storage of the product collection over a [`StorageMedium`].
#[derive(Debug)]
pub struct PersistenceStore<M: StorageMedium> {
    medium: M,
}

impl<M: StorageMedium> PersistenceStore<M> {
    /// Wraps a storage medium.
    pub fn new(medium: M) -> Self {
        PersistenceStore { medium }
    }

    /// Loads the persisted collection.
    ///
    /// Returns an empty collection when no data exists or the stored
    /// payload fails to read or parse. Never raises.
    pub async fn load(&self) -> Vec<Product> {
        let raw = match self.medium.get(STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "Failed to read persisted inventory, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Product>>(&raw) {
            Ok(products) => {
                debug!(count = products.len(), "Inventory document loaded");
                products
            }
            Err(err) => {
                warn!(error = %err, "Persisted inventory failed to parse, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes and writes the full collection in one `set`.
    ///
    /// On failure the last successfully persisted snapshot remains in the
    /// store; the in-memory collection is the caller's to keep or roll back.
    pub async fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_vec(products).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        self.medium.set(STORAGE_KEY, &raw).await?;
        debug!(count = products.len(), "Inventory document saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use chrono::{NaiveDate, TimeZone, Utc};
    use shelflife_core::Category;

    fn sample_product() -> Product {
        Product::new(
            "8690000001",
            "Süt 1L",
            Category::DairyBreakfast,
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            2,
            None,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let store = PersistenceStore::new(MemoryMedium::new());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = PersistenceStore::new(MemoryMedium::new());
        let products = vec![sample_product(), sample_product()];

        store.save(&products).await.unwrap();
        assert_eq!(store.load().await, products);
    }

    #[tokio::test]
    async fn test_load_swallows_corrupt_payload() {
        let medium = MemoryMedium::new();
        medium.set(STORAGE_KEY, b"{not json!").await.unwrap();

        let store = PersistenceStore::new(medium);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_swallows_wrong_shape() {
        let medium = MemoryMedium::new();
        medium.set(STORAGE_KEY, b"{\"hello\":1}").await.unwrap();

        let store = PersistenceStore::new(medium);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_snapshot() {
        let medium = MemoryMedium::with_quota(4096);
        let store = PersistenceStore::new(medium);

        let small = vec![sample_product()];
        store.save(&small).await.unwrap();

        // A collection with a fat image payload blows the quota.
        let mut big_product = sample_product();
        big_product.image = Some("x".repeat(10_000));
        let err = store.save(&[big_product]).await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));

        assert_eq!(store.load().await, small);
    }
}
