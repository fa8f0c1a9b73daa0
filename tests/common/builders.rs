//! Test data builders for batch fixtures.

use chrono::{TimeDelta, TimeZone, Utc};
use cohort_core::{Batch, HrAssignment, Timestamp};

/// Fixed evaluation instant shared by the integration tests
pub fn reference_now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Builder pattern for creating test Batches relative to a reference instant
pub struct BatchBuilder {
    id: String,
    anchor: Timestamp,
    start_offset: TimeDelta,
    end_offset: TimeDelta,
    total_interns: u32,
    total_hr: u32,
    assignments: Vec<HrAssignment>,
}

impl BatchBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            anchor: reference_now(),
            start_offset: TimeDelta::days(-30),
            end_offset: TimeDelta::days(30),
            total_interns: 0,
            total_hr: 0,
            assignments: Vec::new(),
        }
    }

    pub fn anchored_at(mut self, anchor: Timestamp) -> Self {
        self.anchor = anchor;
        self
    }

    /// Interval expressed in days relative to the anchor
    pub fn days(mut self, start: i64, end: i64) -> Self {
        self.start_offset = TimeDelta::days(start);
        self.end_offset = TimeDelta::days(end);
        self
    }

    pub fn upcoming(self) -> Self {
        self.days(10, 40)
    }

    pub fn active(self) -> Self {
        self.days(-10, 20)
    }

    pub fn completed(self) -> Self {
        self.days(-60, -30)
    }

    pub fn interns(mut self, count: u32) -> Self {
        self.total_interns = count;
        self
    }

    pub fn hr_count(mut self, count: u32) -> Self {
        self.total_hr = count;
        self
    }

    pub fn hr(mut self, hr_id: &str) -> Self {
        self.assignments.push(HrAssignment::new(hr_id));
        self
    }

    pub fn malformed_hr(mut self) -> Self {
        self.assignments.push(HrAssignment::malformed());
        self
    }

    pub fn build(self) -> Batch {
        let mut batch = Batch::new(
            self.id,
            self.anchor + self.start_offset,
            self.anchor + self.end_offset,
        )
        .with_interns(self.total_interns)
        .with_hr_count(self.total_hr);
        batch.hr_assignments = self.assignments;
        batch
    }
}
