//! # Timestamp Normalization
//!
//! Every lifecycle computation works on a single absolute time type,
//! [`Timestamp`]. Raw backend values (epoch milliseconds or RFC 3339 strings)
//! are converted here, at the boundary, so locale-formatted strings never
//! reach the classifier or the progress calculator.
//!
//! The current time is never read implicitly by the computations. Callers
//! obtain `now` from a [`Clock`] and pass it down explicitly.

use crate::error::{CohortError, Result};
use crate::lifecycle::{self, BatchStatus};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Absolute point in time used throughout the crate.
pub type Timestamp = DateTime<Utc>;

/// Display format used by the dashboard for batch dates ("Jan 05, 2025").
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Convert epoch milliseconds into a [`Timestamp`].
pub fn from_epoch_millis(millis: i64) -> Result<Timestamp> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        CohortError::invalid_timestamp(millis.to_string(), "epoch milliseconds out of range")
    })
}

/// Parse a boundary timestamp.
///
/// Accepts RFC 3339 (`2025-01-05T09:00:00Z`, any offset) or a bare integer of
/// epoch milliseconds. Anything else, including locale formats such as
/// `01/05/2025`, is rejected.
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CohortError::invalid_timestamp(input, "empty timestamp"));
    }

    if is_integer_literal(trimmed) {
        let millis: i64 = trimmed.parse().map_err(|e| {
            CohortError::invalid_timestamp(input, format!("invalid epoch milliseconds: {e}"))
        })?;
        return from_epoch_millis(millis);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            CohortError::invalid_timestamp(
                input,
                format!("expected RFC 3339 or epoch milliseconds ({e})"),
            )
        })
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Format a timestamp for display as a calendar date.
pub fn format_display_date(ts: Timestamp) -> String {
    ts.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Canonical wire form: RFC 3339 with millisecond precision and a `Z` suffix.
pub fn to_canonical_string(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Source of the evaluation-time clock reading.
///
/// Only callers at the edge of the system use a clock; the pure functions
/// take the resulting `now` as a parameter.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// A batch's `[start, end]` interval. Both boundaries are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchInterval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl BatchInterval {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// `end < start`. Tolerated by every computation, flagged by validation.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Signed length of the interval; negative when inverted.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn contains(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn status_at(&self, now: Timestamp) -> BatchStatus {
        lifecycle::classify(now, self.start, self.end)
    }

    pub fn progress_at(&self, now: Timestamp) -> u8 {
        lifecycle::progress(now, self.start, self.end)
    }
}

/// Serde adapter for backend timestamps.
///
/// Deserializes from either a JSON number (epoch milliseconds) or a string
/// (RFC 3339 or stringified epoch milliseconds). Serializes to the canonical
/// RFC 3339 form.
pub mod flexible {
    use super::{from_epoch_millis, parse_timestamp, to_canonical_string, Timestamp};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_canonical_string(*ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Deserialize::deserialize(deserializer)?;

        match value {
            Value::Number(n) => {
                let millis = n
                    .as_i64()
                    .ok_or_else(|| D::Error::custom("epoch milliseconds must be an integer"))?;
                from_epoch_millis(millis).map_err(D::Error::custom)
            }
            Value::String(s) => parse_timestamp(&s).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "timestamp must be epoch milliseconds or an RFC 3339 string, got {other}"
            ))),
        }
    }
}
