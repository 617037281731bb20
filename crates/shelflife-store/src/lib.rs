//! # shelflife-store: Persistence Layer for ShelfLife
//!
//! This crate persists the inventory and exposes the repository that every
//! mutation flows through.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ShelfLife Data Flow                             │
//! │                                                                     │
//! │  UI shell (add / delete / import / export)                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                shelflife-store (THIS CRATE)                 │    │
//! │  │                                                             │    │
//! │  │  ┌────────────┐   ┌──────────────┐   ┌──────────────────┐   │    │
//! │  │  │ repository │──►│    store     │──►│ medium / sqlite  │   │    │
//! │  │  │ canonical  │   │ one JSON doc │   │ kv_store table   │   │    │
//! │  │  │ Vec<Product│   │ one fixed key│   │ (or in-memory)   │   │    │
//! │  │  └────────────┘   └──────────────┘   └──────────────────┘   │    │
//! │  │        │                                                    │    │
//! │  │        └──► backup (import/export, stok_yedek_*.json)       │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (WAL) — single shared resource, last-writer-wins   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`medium`] - Storage medium trait + in-memory implementation
//! - [`sqlite`] - SQLite medium (pool, WAL, embedded migrations)
//! - [`migrations`] - Embedded database migrations
//! - [`store`] - Load/save of the collection document
//! - [`backup`] - Import/export file boundary
//! - [`repository`] - The canonical in-memory collection
//! - [`error`] - Storage, import and repository error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelflife_store::{PersistenceStore, ProductRepository, SqliteMedium, StoreConfig};
//!
//! let medium = SqliteMedium::new(StoreConfig::new("shelflife.db")).await?;
//! let store = PersistenceStore::new(medium);
//! let mut repo = ProductRepository::initialize(store).await;
//!
//! let snapshot = repo.add(new_product).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backup;
pub mod error;
pub mod medium;
pub mod migrations;
pub mod repository;
pub mod sqlite;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use backup::{backup_file_name, export, import, BackupFile};
pub use error::{ImportError, RepoResult, RepositoryError, StorageError};
pub use medium::{MemoryMedium, StorageMedium};
pub use repository::ProductRepository;
pub use sqlite::{SqliteMedium, StoreConfig};
pub use store::{PersistenceStore, STORAGE_KEY};
