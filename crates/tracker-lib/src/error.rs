//! Error types for `tracker-lib`.

use thiserror::Error;

/// Primary error type for tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    // === Issue Errors ===
    /// Issue with the specified ID was not found.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: String },

    /// Attempted to insert an issue whose ID is live or was issued before.
    #[error("Issue ID collision: {id}")]
    IdCollision { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority}")]
    InvalidPriority { priority: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl TrackerError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// Whether this error is a client-side input problem.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::ValidationErrors { .. }
                | Self::InvalidStatus { .. }
                | Self::InvalidPriority { .. }
        )
    }

    /// Flatten into field-level errors for structured responses.
    #[must_use]
    pub fn field_errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Validation { field, reason } => vec![ValidationError::new(field, reason)],
            Self::ValidationErrors { errors } => errors.clone(),
            Self::InvalidStatus { status } => {
                vec![ValidationError::new("status", format!("unknown value '{status}'"))]
            }
            Self::InvalidPriority { priority } => vec![ValidationError::new(
                "priority",
                format!("unknown value '{priority}'"),
            )],
            _ => Vec::new(),
        }
    }
}

/// Result type using `TrackerError`.
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_validation_error_collapses() {
        let err = TrackerError::from_validation_errors(vec![ValidationError::new(
            "title",
            "cannot be empty",
        )]);
        assert!(matches!(err, TrackerError::Validation { ref field, .. } if field == "title"));
        assert_eq!(err.to_string(), "Validation failed: title: cannot be empty");
    }

    #[test]
    fn test_multiple_validation_errors_kept() {
        let err = TrackerError::from_validation_errors(vec![
            ValidationError::new("page", "must be at least 1"),
            ValidationError::new("pageSize", "must be at most 100"),
        ]);
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_is_not_validation() {
        let err = TrackerError::IssueNotFound {
            id: "iss-x".to_string(),
        };
        assert!(!err.is_validation());
        assert!(err.field_errors().is_empty());
    }
}
