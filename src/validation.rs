//! Ingestion-time validation for batch snapshots
//!
//! The lifecycle computations accept any interval, including inverted ones.
//! This module is where callers can flag questionable data as it arrives from
//! the backend. Validation reports issues; it never drops or repairs a batch.

use crate::config::ValidationConfig;
use crate::error::{CohortError, Result};
use crate::logging;
use crate::models::batch::Batch;
use crate::timestamps::Timestamp;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    BlankId,
    DuplicateBatchId {
        batch_id: String,
    },
    InvertedInterval {
        batch_id: String,
        start: Timestamp,
        end: Timestamp,
    },
    IntervalTooLong {
        batch_id: String,
        days: i64,
        max_days: u32,
    },
    MalformedAssignments {
        batch_id: String,
        count: usize,
    },
    DuplicateAssignment {
        batch_id: String,
        hr_id: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankId => write!(f, "batch has a blank id"),
            Self::DuplicateBatchId { batch_id } => {
                write!(f, "batch id {batch_id} appears more than once")
            }
            Self::InvertedInterval {
                batch_id,
                start,
                end,
            } => write!(f, "batch {batch_id} ends ({end}) before it starts ({start})"),
            Self::IntervalTooLong {
                batch_id,
                days,
                max_days,
            } => write!(
                f,
                "batch {batch_id} spans {days} days (max: {max_days})"
            ),
            Self::MalformedAssignments { batch_id, count } => write!(
                f,
                "batch {batch_id} has {count} HR assignments without an identifier"
            ),
            Self::DuplicateAssignment { batch_id, hr_id } => {
                write!(f, "batch {batch_id} lists HR {hr_id} more than once")
            }
        }
    }
}

/// Issues found in a single batch.
pub fn validate_batch(batch: &Batch, config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if batch.id.trim().is_empty() {
        issues.push(ValidationIssue::BlankId);
    }

    let interval = batch.interval();
    if interval.is_inverted() {
        logging::log_interval_anomaly(&batch.id, batch.start_date, batch.end_date);
        if config.flag_inverted_intervals {
            issues.push(ValidationIssue::InvertedInterval {
                batch_id: batch.id.clone(),
                start: batch.start_date,
                end: batch.end_date,
            });
        }
    } else {
        let days = interval.duration().num_days();
        if days > i64::from(config.max_batch_duration_days) {
            issues.push(ValidationIssue::IntervalTooLong {
                batch_id: batch.id.clone(),
                days,
                max_days: config.max_batch_duration_days,
            });
        }
    }

    let malformed = batch.malformed_assignment_count();
    if malformed > 0 {
        issues.push(ValidationIssue::MalformedAssignments {
            batch_id: batch.id.clone(),
            count: malformed,
        });
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for hr_id in batch.hr_assignments.iter().filter_map(|a| a.identifier()) {
        if !seen.insert(hr_id) && reported.insert(hr_id) {
            issues.push(ValidationIssue::DuplicateAssignment {
                batch_id: batch.id.clone(),
                hr_id: hr_id.to_string(),
            });
        }
    }

    issues
}

/// Issues across a collection, including ids shared by several batches.
pub fn validate_batches(batches: &[Batch], config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut reported_ids = HashSet::new();

    for batch in batches {
        issues.extend(validate_batch(batch, config));

        let id = batch.id.as_str();
        if !id.trim().is_empty() && !seen_ids.insert(id) && reported_ids.insert(id) {
            issues.push(ValidationIssue::DuplicateBatchId {
                batch_id: id.to_string(),
            });
        }
    }

    if !issues.is_empty() {
        tracing::warn!(
            batch_count = batches.len(),
            issue_count = issues.len(),
            "Batch collection has validation issues"
        );
    }

    issues
}

/// Strict variant for callers that want to reject questionable batches.
pub fn ensure_valid_batch(batch: &Batch, config: &ValidationConfig) -> Result<()> {
    let issues = validate_batch(batch, config);
    if issues.is_empty() {
        return Ok(());
    }

    let message = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(CohortError::ValidationError(message))
}
