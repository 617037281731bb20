//! # Product Repository
//!
//! Owns the canonical in-memory collection and keeps it synchronized with
//! the persistence store. This is the explicit application-state object:
//! there are no ambient globals anywhere in the engine.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ProductRepository                               │
//! │                                                                     │
//! │  add(product) ──┐                                                   │
//! │  remove(id) ────┼──► validate ──► mutate Vec ──► save (exactly one  │
//! │  replace_all ───┘                                 write) ──► snapshot│
//! │                                                                     │
//! │  • insertion order preserved; mutation never reorders               │
//! │  • remove is idempotent (absent id = no-op, not an error)           │
//! │  • replace_all / import are all-or-nothing                          │
//! │  • on save failure the in-memory change is KEPT and the error       │
//! │    surfaces; rolling back is the caller's decision                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations take `&mut self`: the single-writer model is enforced at
//! compile time, no locking needed.

use std::collections::HashSet;

use shelflife_core::{validation, Product};
use tracing::debug;

use crate::backup;
use crate::error::{RepoResult, RepositoryError};
use crate::medium::StorageMedium;
use crate::store::PersistenceStore;

// =============================================================================
// Repository
// =============================================================================

/// The canonical product collection plus the persistence store it wraps.
#[derive(Debug)]
pub struct ProductRepository<M: StorageMedium> {
    store: PersistenceStore<M>,
    products: Vec<Product>,
}

impl<M: StorageMedium> ProductRepository<M> {
    /// Loads the persisted collection and wraps it.
    ///
    /// This is the only implicit side effect at process start; a corrupt or
    /// missing store yields an empty inventory, never an error.
    pub async fn initialize(store: PersistenceStore<M>) -> Self {
        let products = store.load().await;
        debug!(count = products.len(), "Repository initialized");
        ProductRepository { store, products }
    }

    /// An immutable copy of the current collection, in insertion order.
    ///
    /// Derived views (queries, stats) work on snapshots and can never
    /// observe a half-applied mutation.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Number of product records.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a freshly constructed product and persists.
    ///
    /// ## Errors
    /// * `InvalidRecord` - a field invariant is violated
    /// * `DuplicateId` - the id collides with an existing record
    /// * `Storage` - the write failed; the append is kept in memory
    pub async fn add(&mut self, product: Product) -> RepoResult<Vec<Product>> {
        validation::validate_product(&product).map_err(|e| RepositoryError::InvalidRecord {
            index: self.products.len(),
            reason: e.to_string(),
        })?;

        if self.products.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::DuplicateId(product.id));
        }

        debug!(id = %product.id, name = %product.name, "Adding product");
        self.products.push(product);
        self.persist().await?;
        Ok(self.snapshot())
    }

    /// Removes the product with matching id, if present, and persists.
    ///
    /// Deletion is idempotent: an absent id is a no-op, not an error.
    /// Confirmation prompts belong to the UI layer; this removes
    /// unconditionally.
    pub async fn remove(&mut self, id: &str) -> RepoResult<Vec<Product>> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        debug!(id = %id, removed = before - self.products.len(), "Removing product");

        self.persist().await?;
        Ok(self.snapshot())
    }

    /// Replaces the entire collection (used by import) and persists.
    ///
    /// All-or-nothing: every incoming record is validated first and any
    /// violation leaves the prior state fully intact.
    pub async fn replace_all(&mut self, products: Vec<Product>) -> RepoResult<Vec<Product>> {
        let mut seen = HashSet::new();
        for (index, product) in products.iter().enumerate() {
            validation::validate_product(product).map_err(|e| RepositoryError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;

            if !seen.insert(product.id.as_str()) {
                return Err(RepositoryError::DuplicateId(product.id.clone()));
            }
        }

        debug!(count = products.len(), "Replacing inventory");
        self.products = products;
        self.persist().await?;
        Ok(self.snapshot())
    }

    /// Parses a backup document and replaces the collection with it.
    ///
    /// A malformed document mutates nothing.
    pub async fn import(&mut self, raw: &[u8]) -> RepoResult<Vec<Product>> {
        let products = backup::import(raw)?;
        self.replace_all(products).await
    }

    /// Exactly one persistence write per mutating operation.
    async fn persist(&self) -> RepoResult<()> {
        self.store.save(&self.products).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
