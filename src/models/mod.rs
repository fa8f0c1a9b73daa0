pub mod batch;
pub mod insights;

// Re-export core models for easy access
pub use batch::{Batch, HrAssignment};
pub use insights::{FleetSummary, HrMembership, HrMembershipIndex, StatusCounts};
