use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a batch, derived from its interval and the evaluation instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// The batch has not started yet
    Upcoming,
    /// The evaluation instant lies inside the batch interval (boundaries included)
    Active,
    /// The batch interval has ended
    Completed,
}

impl BatchStatus {
    /// All statuses in timeline order
    pub const ALL: [BatchStatus; 3] = [Self::Upcoming, Self::Active, Self::Completed];

    /// Check if the batch is currently running
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if this is a terminal status (time only moves forward)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if the batch has begun, whether or not it has finished
    pub fn has_started(&self) -> bool {
        matches!(self, Self::Active | Self::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid batch status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(BatchStatus::Active.is_active());
        assert!(!BatchStatus::Upcoming.is_active());
        assert!(!BatchStatus::Completed.is_active());

        assert!(BatchStatus::Completed.is_terminal());
        assert!(!BatchStatus::Active.is_terminal());

        assert!(BatchStatus::Active.has_started());
        assert!(BatchStatus::Completed.has_started());
        assert!(!BatchStatus::Upcoming.has_started());
    }

    #[test]
    fn test_status_string_conversion() {
        assert_eq!(BatchStatus::Upcoming.to_string(), "upcoming");
        assert_eq!("active".parse::<BatchStatus>().unwrap(), BatchStatus::Active);
        assert_eq!(
            " Completed ".parse::<BatchStatus>().unwrap(),
            BatchStatus::Completed
        );
        assert!("in_progress".parse::<BatchStatus>().is_err());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&BatchStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let parsed: BatchStatus = serde_json::from_str("\"upcoming\"").unwrap();
        assert_eq!(parsed, BatchStatus::Upcoming);
    }

    #[test]
    fn test_status_ordering_follows_timeline() {
        let mut statuses = vec![
            BatchStatus::Completed,
            BatchStatus::Upcoming,
            BatchStatus::Active,
        ];
        statuses.sort();
        assert_eq!(statuses, BatchStatus::ALL.to_vec());
    }
}
