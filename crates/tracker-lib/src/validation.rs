//! Validation helpers.
//!
//! These routines enforce issue data constraints at the boundary and
//! return structured validation errors without touching storage.

use crate::error::{Result, TrackerError, ValidationError};
use crate::query::{IssueUpdate, NewIssue};

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 500;

fn check_title(title: &str, errors: &mut Vec<ValidationError>) {
    if title.trim().is_empty() {
        errors.push(ValidationError::new("title", "cannot be empty"));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(ValidationError::new(
            "title",
            format!("exceeds {MAX_TITLE_LEN} characters"),
        ));
    }
}

/// Validate a creation payload.
///
/// # Errors
///
/// Returns `Validation` if the title is missing, blank, or too long.
pub fn validate_new_issue(payload: &NewIssue) -> Result<()> {
    let mut errors = Vec::new();
    match payload.title.as_deref() {
        Some(title) => check_title(title, &mut errors),
        None => errors.push(ValidationError::new("title", "field required")),
    }
    finish(errors)
}

/// Validate a sparse update. Only fields that are present are checked.
///
/// # Errors
///
/// Returns `Validation` if a provided title is blank or too long.
pub fn validate_update(update: &IssueUpdate) -> Result<()> {
    let mut errors = Vec::new();
    if let Some(ref title) = update.title {
        check_title(title, &mut errors);
    }
    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TrackerError::from_validation_errors(errors))
    }
}
