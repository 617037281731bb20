//! # Persistence Error Types
//!
//! Error types for the storage medium, backup boundary and repository.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StorageError ← categorized (quota vs. generic write failure)       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  RepositoryError ← what the UI shell sees                           │
//! │                                                                     │
//! │  Exception: PersistenceStore::load swallows read/parse errors       │
//! │  entirely (user sees an empty inventory, never a crash).            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Storage Error
// =============================================================================

/// Failures of the backing byte store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium is out of space. The last successfully persisted snapshot
    /// remains in the store unchanged.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Any other write failure (serialization, connection, constraint).
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// Read failure. Only ever logged: load() turns this into an empty
    /// collection.
    #[error("read failed: {0}")]
    ReadFailed(String),
}

/// Categorizes write-side sqlx failures.
///
/// ## Error Mapping
/// ```text
/// SQLITE_FULL ("database or disk is full") → StorageError::QuotaExceeded
/// Other                                    → StorageError::WriteFailed
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                if msg.contains("disk is full") || msg.contains("database or disk is full") {
                    StorageError::QuotaExceeded
                } else {
                    StorageError::WriteFailed(msg)
                }
            }
            other => StorageError::WriteFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::WriteFailed(err.to_string())
    }
}

// =============================================================================
// Import Error
// =============================================================================

/// Failures of the backup import boundary.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The raw bytes are not a JSON array of product-shaped records.
    /// Nothing was mutated.
    #[error("invalid backup format: {0}")]
    InvalidFormat(String),
}

// =============================================================================
// Repository Error
// =============================================================================

/// Failures of repository mutations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A product with this id already exists. Only reachable when ids
    /// bypass the freshly-generated-UUID path (e.g. imported batches).
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A record violated a field invariant. For replace_all the index is
    /// the offending position in the incoming batch.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The persistence write failed. The in-memory mutation is kept; the
    /// caller decides whether to roll back.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A backup document failed to parse.
    #[error("import error: {0}")]
    Import(#[from] ImportError),
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepositoryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StorageError::QuotaExceeded.to_string(),
            "storage quota exceeded"
        );

        let err = RepositoryError::InvalidRecord {
            index: 2,
            reason: "name is required".to_string(),
        };
        assert_eq!(err.to_string(), "invalid record at index 2: name is required");
    }

    #[test]
    fn test_storage_error_converts_to_repository_error() {
        let err: RepositoryError = StorageError::QuotaExceeded.into();
        assert!(matches!(err, RepositoryError::Storage(StorageError::QuotaExceeded)));
    }
}
