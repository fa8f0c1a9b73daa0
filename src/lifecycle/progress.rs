//! Completion progress.
//!
//! Progress is the share of a batch interval that has elapsed at `now`,
//! expressed as an integer percentage in `[0, 100]`. The ratio is rounded
//! half-up and computed in exact integer arithmetic on nanosecond durations,
//! so `x.5` always rounds towards 100.

use crate::timestamps::Timestamp;
use chrono::TimeDelta;

/// Percentage of `[start, end]` elapsed at `now`.
///
/// - `now < start` yields 0, `now > end` yields 100.
/// - A zero-length interval yields 100 once `now >= start`.
/// - Inverted intervals are caught by the two checks above and never divide.
pub fn progress(now: Timestamp, start: Timestamp, end: Timestamp) -> u8 {
    if now < start {
        return 0;
    }
    if now > end {
        return 100;
    }

    let total = total_nanos(end - start);
    if total <= 0 {
        return 100;
    }
    let elapsed = total_nanos(now - start);

    round_half_up_percent(elapsed, total)
}

/// Full-precision length of a non-negative delta. Does not overflow for any
/// pair of representable timestamps.
fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos())
}

/// `round(100 * elapsed / total)` with halves rounded up. `total` must be positive.
fn round_half_up_percent(elapsed: i128, total: i128) -> u8 {
    let percent = (elapsed * 200 + total) / (total * 2);

    // Bounded by the caller's start <= now <= end.
    percent.clamp(0, 100) as u8
}
