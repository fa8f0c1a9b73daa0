#![allow(clippy::doc_markdown)] // Allow technical terms like RFC3339 in docs
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Cohort Core
//!
//! Batch lifecycle and metrics engine for the intern cohort dashboard.
//!
//! ## Overview
//!
//! The dashboard backend owns batches (cohorts of interns with assigned HR
//! staff). This crate derives everything the dashboard shows that is not a
//! stored field:
//!
//! - **Lifecycle status**: `Upcoming`, `Active` or `Completed`, from a batch's
//!   start/end dates relative to an evaluation instant
//! - **Progress**: elapsed share of the batch interval, as an integer percentage
//! - **Fleet summary**: batch count, active count, intern and HR totals
//! - **HR membership**: which batches a given HR member is assigned to
//!
//! Every computation is pure and takes `now` explicitly. Nothing reads the
//! clock internally, so results are reproducible and safe to compute from
//! any number of threads over a shared `&[Batch]`.
//!
//! ## Module Organization
//!
//! - [`timestamps`] - Boundary normalization of dates, intervals, clocks
//! - [`lifecycle`] - Status classification and progress calculation
//! - [`models`] - Batch snapshots and computed insights
//! - [`validation`] - Ingestion-time data quality checks
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cohort_core::{classify, progress, summarize, membership_for, Batch, BatchStatus, HrAssignment};
//!
//! let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
//! let now = Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap();
//!
//! assert_eq!(classify(now, start, end), BatchStatus::Active);
//! assert_eq!(progress(now, start, end), 50);
//!
//! let batches = vec![Batch::new("b1", start, end)
//!     .with_interns(8)
//!     .with_hr_count(1)
//!     .with_assignment(HrAssignment::new("hr-42"))];
//!
//! let summary = summarize(&batches, now);
//! assert_eq!(summary.active_count, 1);
//! assert!(membership_for(&batches, "hr-42").contains("b1"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod timestamps;
pub mod validation;

pub use config::{CohortConfig, LoggingConfig, ValidationConfig};
pub use constants::{status_groups, system};
pub use error::{CohortError, Result};
pub use lifecycle::{classify, progress, BatchStatus};
pub use models::insights::{
    batches_for_hr, describe_batches, filter_by_status, membership_for, status_breakdown,
    summarize, BatchView, FleetSummary, HrMembership, HrMembershipIndex, StatusCounts,
};
pub use models::{Batch, HrAssignment};
pub use timestamps::{BatchInterval, Clock, FixedClock, SystemClock, Timestamp};
pub use validation::{validate_batch, validate_batches, ValidationIssue};
