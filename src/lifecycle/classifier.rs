//! Status classification.

use super::states::BatchStatus;
use crate::timestamps::Timestamp;

/// Classify a batch interval relative to `now`.
///
/// Both boundaries are inclusive: `now == start` and `now == end` are
/// [`BatchStatus::Active`]. An inverted interval (`end < start`) goes through
/// the same comparisons and is not rejected here.
pub fn classify(now: Timestamp, start: Timestamp, end: Timestamp) -> BatchStatus {
    if now < start {
        BatchStatus::Upcoming
    } else if now > end {
        BatchStatus::Completed
    } else {
        BatchStatus::Active
    }
}
