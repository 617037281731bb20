//! # Error Types
//!
//! Validation errors for shelflife-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  ValidationError (this crate)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  RepositoryError::InvalidRecord (shelflife-store)                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UI shell decides on user-visible messaging                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, values)
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a record violates a field invariant. The UI restricts input
/// already, but the engine re-validates on every construction and import
/// path.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be at least 1")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
