//! # Backup Import / Export
//!
//! The file boundary for user-driven backup and restore.
//!
//! ## Round-Trip Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │   export(P, today) ──► stok_yedek_<YYYY-MM-DD>.json                 │
//! │                              │                                      │
//! │                              ▼  (user saves / moves the file)       │
//! │   import(bytes) ──► Vec<Product> == P                               │
//! │                                                                     │
//! │   import accepts ONLY a JSON array of product-shaped records;       │
//! │   anything else is InvalidFormat and mutates nothing.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use shelflife_core::Product;

use crate::error::{ImportError, StorageError};

// =============================================================================
// Backup File
// =============================================================================

/// A serialized backup ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// Deterministic download name, e.g. `stok_yedek_2024-06-15.json`.
    pub file_name: String,
    /// Pretty-printed JSON document.
    pub contents: Vec<u8>,
}

/// Deterministic backup file name for a given date.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("stok_yedek_{}.json", date.format("%Y-%m-%d"))
}

// =============================================================================
// Export / Import
// =============================================================================

/// Serializes the full collection into a pretty-printed, dated document.
pub fn export(products: &[Product], today: NaiveDate) -> Result<BackupFile, StorageError> {
    let contents =
        serde_json::to_vec_pretty(products).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

    Ok(BackupFile {
        file_name: backup_file_name(today),
        contents,
    })
}

/// Parses a backup document.
///
/// Succeeds only if the payload is a JSON array of product-shaped records.
/// The parsed collection is meant to fully replace the current one, never
/// to be merged.
pub fn import(raw: &[u8]) -> Result<Vec<Product>, ImportError> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

    if !value.is_array() {
        return Err(ImportError::InvalidFormat(
            "expected a JSON array of products".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| ImportError::InvalidFormat(e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
