//! Time utilities for Snowflake generation
//!
//! Converts clock readings into whole milliseconds since the configured epoch

use chrono::{DateTime, Utc};

/// Whole milliseconds from `epoch` to `now`, truncated toward zero.
/// Negative when `now` is before `epoch`.
#[inline(always)]
pub fn millis_since_epoch(now: DateTime<Utc>, epoch: DateTime<Utc>) -> i64 {
    (now - epoch).num_milliseconds()
}

/// How far `now` is behind `last_timestamp`, in milliseconds
#[inline]
pub fn millis_behind(last_timestamp: u64, now: i64) -> u64 {
    let delta = i128::from(last_timestamp) - i128::from(now);
    u64::try_from(delta).unwrap_or(u64::MAX)
}
