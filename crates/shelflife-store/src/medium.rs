//! # Storage Medium Abstraction
//!
//! The engine persists the entire product collection as one document under
//! one fixed logical key. This module defines the byte-store contract and an
//! in-memory implementation; the SQLite implementation lives in [`crate::sqlite`].
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       StorageMedium                                 │
//! │                                                                     │
//! │  get(key) ──► Some(bytes) | None                                    │
//! │  set(key, bytes) ──► Ok | QuotaExceeded | WriteFailed               │
//! │                                                                     │
//! │  • one logical writer, last-writer-wins                             │
//! │  • a failed set leaves the previous value intact                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::error::StorageError;

// =============================================================================
// Trait
// =============================================================================

/// A persistent key-value byte store.
///
/// Implementations must be atomic per `set`: after a failure the previously
/// stored value is still readable.
#[allow(async_fn_in_trait)]
pub trait StorageMedium: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

// =============================================================================
// In-Memory Medium
// =============================================================================

/// Volatile in-process medium.
///
/// ## Usage
/// Tests and previews. The optional quota makes quota-exceeded paths
/// reproducible without filling a disk:
///
/// ```rust,ignore
/// let medium = MemoryMedium::with_quota(8);
/// assert!(medium.set("k", b"tiny").await.is_ok());
/// assert!(medium.set("k", b"way too large").await.is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    quota_bytes: Option<usize>,
}

impl MemoryMedium {
    /// Creates an unbounded in-memory medium.
    pub fn new() -> Self {
        MemoryMedium::default()
    }

    /// Creates a medium that rejects any value larger than `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        MemoryMedium {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }
}

impl StorageMedium for MemoryMedium {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }

        self.entries.lock().await.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let medium = MemoryMedium::new();
        assert_eq!(medium.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let medium = MemoryMedium::new();
        medium.set("k", b"value").await.unwrap();
        assert_eq!(medium.get("k").await.unwrap(), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let medium = MemoryMedium::new();
        medium.set("k", b"one").await.unwrap();
        medium.set("k", b"two").await.unwrap();
        assert_eq!(medium.get("k").await.unwrap(), Some(b"two".to_vec()));
    }

    #[tokio::test]
    async fn test_quota_rejects_and_preserves_previous_value() {
        let medium = MemoryMedium::with_quota(4);
        medium.set("k", b"ok").await.unwrap();

        let err = medium.set("k", b"too large").await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));

        // Failed writes never clobber the stored value.
        assert_eq!(medium.get("k").await.unwrap(), Some(b"ok".to_vec()));
    }
}
