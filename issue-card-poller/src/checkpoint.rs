//! Polling window lower bound.
//!
//! Nothing is persisted between invocations; the window always starts a fixed
//! number of minutes before "now".

use crate::config::ConfigError;
use chrono::{DateTime, Duration, Utc};

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses the configured interval as a whole number of minutes.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInterval`] for anything that is not a
/// non-negative integer, including negative values and surrounding whitespace.
pub fn parse_interval(raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .map_err(|e| ConfigError::InvalidInterval {
            value: raw.to_string(),
            source: e,
        })
}

/// Returns `now - interval_minutes`.
///
/// Intervals that reach past the earliest representable instant clamp to
/// [`DateTime::<Utc>::MIN_UTC`].
#[must_use]
pub fn compute_checkpoint(now: DateTime<Utc>, interval_minutes: u64) -> DateTime<Utc> {
    i64::try_from(interval_minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|interval| now.checked_sub_signed(interval))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
