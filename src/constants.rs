//! # System Constants
//!
//! Shared constants and status groupings for the cohort engine.

pub use crate::lifecycle::BatchStatus;

/// System-wide constants
pub mod system {
    /// Version compatibility marker
    pub const COHORT_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Lowest progress value
    pub const PROGRESS_MIN: u8 = 0;

    /// Highest progress value
    pub const PROGRESS_MAX: u8 = 100;

    /// Prefix for layered environment configuration (`COHORT__LOGGING__JSON`)
    pub const ENV_PREFIX: &str = "COHORT";
}

/// Status groupings for dashboard filters
pub mod status_groups {
    use super::BatchStatus;

    /// Statuses shown on the "current" tab
    pub const CURRENT_STATES: &[BatchStatus] = &[BatchStatus::Upcoming, BatchStatus::Active];

    /// Statuses shown on the "archive" tab
    pub const ARCHIVED_STATES: &[BatchStatus] = &[BatchStatus::Completed];

    /// Statuses for batches that have begun
    pub const STARTED_STATES: &[BatchStatus] = &[BatchStatus::Active, BatchStatus::Completed];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_groups_partition_timeline() {
        for status in BatchStatus::ALL {
            let in_current = status_groups::CURRENT_STATES.contains(&status);
            let in_archive = status_groups::ARCHIVED_STATES.contains(&status);
            assert!(in_current ^ in_archive, "{status} must be in exactly one tab");
            assert_eq!(
                status_groups::STARTED_STATES.contains(&status),
                status.has_started()
            );
        }
    }
}
