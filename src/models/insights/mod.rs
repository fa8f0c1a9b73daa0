//! # Insights Models
//!
//! Computed views over a batch collection. None of these are stored; each
//! is recomputed from the batches and an explicit evaluation instant.
//!
//! - `FleetSummary` / `StatusCounts`: dashboard header counters
//! - `HrMembership` / `HrMembershipIndex`: HR to batch relation
//! - `BatchView`: per-batch derived values for rendering

pub mod batch_view;
pub mod fleet_summary;
pub mod membership;

// Re-export for easy access
pub use batch_view::{describe_batches, filter_by_status, BatchView};
pub use fleet_summary::{status_breakdown, summarize, FleetSummary, StatusCounts};
pub use membership::{batches_for_hr, membership_for, HrMembership, HrMembershipIndex};
