//! HTTP error mapping.
//!
//! Core errors become client-visible responses here:
//! - `IssueNotFound` → 404 `{"detail": "Issue not found"}`
//! - validation and request decode failures → 422 with field errors
//! - everything else (including `IdCollision`) → 500, logged

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use tracker_lib::{TrackerError, ValidationError};

/// Error returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Issue not found")]
    NotFound { id: String },

    #[error("{message}")]
    Unprocessable {
        message: String,
        errors: Vec<ValidationError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldError {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field.clone(),
            message: err.message.clone(),
        }
    }
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::IssueNotFound { id } => Self::NotFound { id },
            err if err.is_validation() => Self::Unprocessable {
                message: err.to_string(),
                errors: err.field_errors(),
            },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound { .. } => ErrorBody {
                detail: self.to_string(),
                errors: Vec::new(),
            },
            Self::Unprocessable { message, errors } => ErrorBody {
                detail: message.clone(),
                errors: errors.iter().map(FieldError::from).collect(),
            },
            Self::Internal(message) => {
                error!(%message, "request failed");
                ErrorBody {
                    detail: "Internal server error".to_string(),
                    errors: Vec::new(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
