//! # Batch Model
//!
//! Read-only snapshot of a cohort as returned by the dashboard backend.
//! The engine never mutates a `Batch`; status and progress are derived on
//! demand from its interval and an explicit evaluation instant.

use crate::lifecycle::{self, BatchStatus};
use crate::timestamps::{self, BatchInterval, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One cohort offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Opaque identifier assigned by the backend.
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(with = "timestamps::flexible")]
    pub start_date: Timestamp,

    /// Expected to be `>= start_date`; not enforced here.
    #[serde(with = "timestamps::flexible")]
    pub end_date: Timestamp,

    #[serde(default)]
    pub total_interns: u32,

    #[serde(default, rename = "totalHR", alias = "totalHr")]
    pub total_hr: u32,

    /// HR members assigned to this batch. Treated as a set.
    #[serde(default, alias = "hrs")]
    pub hr_assignments: Vec<HrAssignment>,
}

impl Batch {
    pub fn new(id: impl Into<String>, start_date: Timestamp, end_date: Timestamp) -> Self {
        Self {
            id: id.into(),
            name: None,
            start_date,
            end_date,
            total_interns: 0,
            total_hr: 0,
            hr_assignments: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_interns(mut self, total_interns: u32) -> Self {
        self.total_interns = total_interns;
        self
    }

    pub fn with_hr_count(mut self, total_hr: u32) -> Self {
        self.total_hr = total_hr;
        self
    }

    pub fn with_assignment(mut self, assignment: HrAssignment) -> Self {
        self.hr_assignments.push(assignment);
        self
    }

    pub fn interval(&self) -> BatchInterval {
        BatchInterval::new(self.start_date, self.end_date)
    }

    pub fn status_at(&self, now: Timestamp) -> BatchStatus {
        lifecycle::classify(now, self.start_date, self.end_date)
    }

    pub fn progress_at(&self, now: Timestamp) -> u8 {
        lifecycle::progress(now, self.start_date, self.end_date)
    }

    /// Whether any well-formed assignment carries `hr_id`.
    pub fn has_hr(&self, hr_id: &str) -> bool {
        self.hr_assignments
            .iter()
            .any(|assignment| assignment.identifier() == Some(hr_id))
    }

    /// Number of assignments without a usable identifier.
    pub fn malformed_assignment_count(&self) -> usize {
        self.hr_assignments
            .iter()
            .filter(|assignment| assignment.is_malformed())
            .count()
    }
}

/// Reference to an HR member inside a batch.
///
/// The backend sends either a bare identifier string or an object with an
/// `_id`/`id` field. Entries that carry no usable identifier deserialize with
/// `id: None` instead of failing the whole batch, so that aggregation can
/// skip and count them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HrAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl HrAssignment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// An assignment with no identifier at all.
    pub fn malformed() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The identifier, if present and not blank.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    pub fn is_malformed(&self) -> bool {
        self.identifier().is_none()
    }
}

impl<'de> Deserialize<'de> for HrAssignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Deserialize::deserialize(deserializer)?;

        let assignment = match value {
            // Bare reference: "hr-42"
            Value::String(id) => HrAssignment {
                id: Some(id),
                ..HrAssignment::default()
            },
            // Populated reference: { "_id": "hr-42", "name": "...", "email": "..." }
            Value::Object(obj) => {
                let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_owned);
                HrAssignment {
                    id: text("_id").or_else(|| text("id")),
                    name: text("name"),
                    email: text("email"),
                }
            }
            _ => HrAssignment::malformed(),
        };

        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "_id": "batch-7",
            "name": "Summer 2025",
            "startDate": "2025-06-01T00:00:00.000Z",
            "endDate": 1756598400000,
            "totalInterns": 24,
            "totalHR": 3,
            "hrs": [
                "hr-1",
                { "_id": "hr-2", "name": "Dana", "email": "dana@example.com" },
                { "name": "No Id" },
                42
            ]
        }"#;

        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.id, "batch-7");
        assert_eq!(batch.name.as_deref(), Some("Summer 2025"));
        assert_eq!(
            batch.start_date,
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            batch.end_date,
            Utc.with_ymd_and_hms(2025, 8, 31, 0, 0, 0).unwrap()
        );
        assert_eq!(batch.total_interns, 24);
        assert_eq!(batch.total_hr, 3);
        assert_eq!(batch.hr_assignments.len(), 4);
        assert_eq!(batch.hr_assignments[0].identifier(), Some("hr-1"));
        assert_eq!(batch.hr_assignments[1].name.as_deref(), Some("Dana"));
        assert_eq!(batch.malformed_assignment_count(), 2);
        assert!(batch.has_hr("hr-2"));
        assert!(!batch.has_hr("hr-3"));
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let json = r#"{
            "id": "b1",
            "startDate": "2025-01-01T00:00:00Z",
            "endDate": "2025-02-01T00:00:00Z"
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.total_interns, 0);
        assert_eq!(batch.total_hr, 0);
        assert!(batch.hr_assignments.is_empty());
    }

    #[test]
    fn test_locale_dates_are_rejected() {
        let json = r#"{
            "id": "b1",
            "startDate": "1/1/2025",
            "endDate": "2025-02-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Batch>(json).is_err());
    }

    #[test]
    fn test_blank_identifier_is_malformed() {
        assert!(HrAssignment::new("   ").is_malformed());
        assert!(HrAssignment::malformed().is_malformed());
        assert_eq!(HrAssignment::new(" hr-9 ").identifier(), Some("hr-9"));
    }

    #[test]
    fn test_derived_status_and_progress() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap();
        let batch = Batch::new("b1", start, end);
        let now = Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap();

        assert_eq!(batch.status_at(now), BatchStatus::Active);
        assert_eq!(batch.progress_at(now), 50);
        assert_eq!(batch.interval().status_at(now), BatchStatus::Active);
    }
}
