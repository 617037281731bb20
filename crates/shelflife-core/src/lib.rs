//! # shelflife-core: Pure Business Logic for ShelfLife
//!
//! This crate is the **heart** of ShelfLife, a personal perishable-inventory
//! tracker. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      ShelfLife Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                      UI Shell (external)                    │    │
//! │  │   Inventory list ── Dashboard ── Add form ── Alerts         │    │
//! │  └───────────────────────────┬─────────────────────────────────┘    │
//! │                              │ snapshots in, mutations out          │
//! │  ┌───────────────────────────▼─────────────────────────────────┐    │
//! │  │              ★ shelflife-core (THIS CRATE) ★                │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐            │    │
//! │  │  │  types  │ │ expiry  │ │  query  │ │  stats  │            │    │
//! │  │  │ Product │ │ classify│ │ filter+ │ │aggregate│            │    │
//! │  │  │ Category│ │ days    │ │  sort   │ │         │            │    │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘            │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO DATABASE • NO CLOCK SAMPLING • PURE FUNCTIONS  │    │
//! │  └───────────────────────────┬─────────────────────────────────┘    │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐    │
//! │  │            shelflife-store (persistence layer)              │    │
//! │  │       SQLite key-value store, repository, backups           │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Stats, SortOption)
//! - [`expiry`] - Expiry classification (day counting, status buckets)
//! - [`query`] - Filtering and stable sorting for inventory views
//! - [`stats`] - Single-pass summary aggregation
//! - [`validation`] - Field invariants for product records
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; `now` is always a
//!    parameter, never sampled inside
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Closed Enums**: categories, sort keys and expiry buckets are tagged
//!    variants, so matches are exhaustiveness-checked
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use shelflife_core::expiry::{classify, days_remaining};
//! use shelflife_core::ExpiryStatus;
//!
//! let now = Utc::now();
//! let expiry = (now + Duration::days(2)).date_naive();
//!
//! let days = days_remaining(expiry, now);
//! assert_eq!(classify(days), ExpiryStatus::Critical);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod expiry;
pub mod query;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelflife_core::Product` instead of
// `use shelflife_core::types::Product`

pub use error::ValidationError;
pub use expiry::ExpiryStatus;
pub use query::ProductQuery;
pub use stats::aggregate;
pub use types::{Category, CategoryFilter, Product, SortOption, Stats};
