//! # Fleet Summary
//!
//! **Computed view** - nothing here is stored. A `FleetSummary` is reduced
//! from the current batch collection on every request.
//!
//! ## Human-Readable Explanation
//!
//! This is the header strip of the batch dashboard:
//!
//! ```text
//! Batches: 12 | Active now: 4 | Interns: 318 | HR staff: 21
//! ```
//!
//! "Active now" depends on the evaluation instant, so the same collection
//! summarized a week later can report a different active count without any
//! batch having changed.

use crate::lifecycle::BatchStatus;
use crate::logging;
use crate::models::batch::Batch;
use crate::timestamps::Timestamp;
use serde::{Deserialize, Serialize};

/// Aggregate counters over a batch collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub active_count: usize,
    pub intern_sum: u64,
    pub hr_sum: u64,
}

impl FleetSummary {
    /// Reduce `batches` at `now` without side effects.
    pub fn compute(batches: &[Batch], now: Timestamp) -> Self {
        batches.iter().fold(Self::default(), |mut acc, batch| {
            acc.total += 1;
            if batch.status_at(now).is_active() {
                acc.active_count += 1;
            }
            acc.intern_sum += u64::from(batch.total_interns);
            acc.hr_sum += u64::from(batch.total_hr);
            acc
        })
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of batches currently active (0.0 to 1.0).
    pub fn active_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.active_count as f64 / self.total as f64
        }
    }

    pub fn average_interns_per_batch(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.intern_sum as f64 / self.total as f64
        }
    }

    pub fn average_hr_per_batch(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hr_sum as f64 / self.total as f64
        }
    }

    /// Interns per HR member across the fleet, `None` when no HR is assigned.
    pub fn interns_per_hr(&self) -> Option<f64> {
        if self.hr_sum == 0 {
            None
        } else {
            Some(self.intern_sum as f64 / self.hr_sum as f64)
        }
    }
}

/// Summarize a batch collection at `now`.
///
/// Inverted intervals are reported through logging and still counted.
pub fn summarize(batches: &[Batch], now: Timestamp) -> FleetSummary {
    for batch in batches.iter().filter(|b| b.interval().is_inverted()) {
        logging::log_interval_anomaly(&batch.id, batch.start_date, batch.end_date);
    }

    let summary = FleetSummary::compute(batches, now);
    logging::log_fleet_summary(
        summary.total,
        summary.active_count,
        summary.intern_sum,
        summary.hr_sum,
    );
    summary
}

/// Per-status batch counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub upcoming: usize,
    pub active: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn compute(batches: &[Batch], now: Timestamp) -> Self {
        batches.iter().fold(Self::default(), |mut acc, batch| {
            match batch.status_at(now) {
                BatchStatus::Upcoming => acc.upcoming += 1,
                BatchStatus::Active => acc.active += 1,
                BatchStatus::Completed => acc.completed += 1,
            }
            acc
        })
    }

    pub fn get(&self, status: BatchStatus) -> usize {
        match status {
            BatchStatus::Upcoming => self.upcoming,
            BatchStatus::Active => self.active,
            BatchStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.upcoming + self.active + self.completed
    }
}

/// Count batches per lifecycle status at `now`.
pub fn status_breakdown(batches: &[Batch], now: Timestamp) -> StatusCounts {
    StatusCounts::compute(batches, now)
}
