//! Core data types for tracker-lib.
//!
//! Serde names follow the HTTP wire format (`createdAt`, `in_progress`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(TrackerError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Issue priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TrackerError::InvalidPriority {
                priority: other.to_string(),
            }),
        }
    }
}

/// The tracked work item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID (e.g., "iss-k3f9a"). Never reused.
    pub id: String,

    /// Title (1-500 chars).
    pub title: String,

    /// Detailed description.
    #[serde(default)]
    pub description: Option<String>,

    /// Workflow status.
    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub priority: Priority,

    /// Assigned user.
    #[serde(default)]
    pub assignee: Option<String>,

    /// Creation timestamp. Set once.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Default for Issue {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            status: Status::default(),
            priority: Priority::default(),
            assignee: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl AsRef<Self> for Issue {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: Status = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, Status::Done);
        assert!(serde_json::from_str::<Status>("\"closed\"").is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        for raw in ["TODO", "Done", " todo"] {
            assert!(raw.parse::<Status>().is_err(), "{raw:?}");
        }
        assert!(matches!(
            "blocked".parse::<Status>(),
            Err(TrackerError::InvalidStatus { .. })
        ));
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!(" High ".parse::<Priority>().is_err());
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(TrackerError::InvalidPriority { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Status::default(), Status::Todo);
        assert_eq!(Priority::default(), Priority::Medium);
        let issue = Issue::default();
        assert_eq!(issue.created_at, issue.updated_at);
    }

    #[test]
    fn test_issue_serializes_camel_case_with_nulls() {
        let issue = Issue {
            id: "iss-abc".to_string(),
            title: "Fix bug".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["id"], "iss-abc");
        assert_eq!(value["status"], "todo");
        assert_eq!(value["priority"], "medium");
        assert!(value["description"].is_null());
        assert!(value["assignee"].is_null());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
