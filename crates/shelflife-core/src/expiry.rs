//! # Expiry Classification
//!
//! Pure functions mapping an expiry date and "now" to a signed day count and
//! one of four status buckets.
//!
//! ## Boundary Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 days_remaining → ExpiryStatus                       │
//! │                                                                     │
//! │   ... -2  -1 │  0   1   2   3 │  4   5   6   7 │  8   9  ...        │
//! │   ───────────┼────────────────┼────────────────┼───────────         │
//! │    Expired   │    Critical    │    Warning     │     Ok             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The day count is `ceil((expiry_midnight - now) / 1 day)`: a product
//! expiring later today counts as 0 days remaining (Critical), and one that
//! expired yesterday counts as -1 (Expired).
//!
//! There is no background timer anywhere in the engine. Callers sample `now`
//! once and pass it in; two calls at different wall-clock moments may
//! legitimately disagree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Window Constants
// =============================================================================

/// Upper bound (inclusive) of the Critical window, in days.
pub const CRITICAL_WINDOW_DAYS: i64 = 3;

/// Upper bound (inclusive) of the Warning window, in days.
pub const WARNING_WINDOW_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Expiry Status
// =============================================================================

/// The four mutually exclusive expiry buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Expiry date is in the past.
    Expired,
    /// Expires within 0-3 days inclusive.
    Critical,
    /// Expires within 4-7 days inclusive.
    Warning,
    /// More than 7 days remaining.
    Ok,
}

// =============================================================================
// Classification
// =============================================================================

/// Signed whole days from `now` until midnight (UTC) of `expiry`.
///
/// Rounds up: any positive fraction of a day counts as a full day, and a
/// deadline missed by less than a day counts as 0, not -1.
pub fn days_remaining(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = expiry.and_time(chrono::NaiveTime::MIN).and_utc();
    let seconds = (midnight - now).num_seconds();

    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Maps a signed day count onto a status bucket.
///
/// The boundaries at 3/4 and 7/8 days are exact and covered by tests.
pub fn classify(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= CRITICAL_WINDOW_DAYS {
        ExpiryStatus::Critical
    } else if days <= WARNING_WINDOW_DAYS {
        ExpiryStatus::Warning
    } else {
        ExpiryStatus::Ok
    }
}

/// Convenience composition of [`days_remaining`] and [`classify`].
#[inline]
pub fn status_of(expiry: NaiveDate, now: DateTime<Utc>) -> ExpiryStatus {
    classify(days_remaining(expiry, now))
}

// =============================================================================
// Unit Tests
// =============================================================================
