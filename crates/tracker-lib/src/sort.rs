//! Field-based sorting.
//!
//! Every field compares by its wire representation: text and enum values
//! lexicographically (`done < in_progress < todo`, `high < low < medium`),
//! timestamps chronologically. Missing optional values sort first.

use std::cmp::Ordering;

use crate::model::Issue;
use crate::query::{SortField, SortOrder};

/// Compare two issues on a single field, ascending.
#[must_use]
pub fn compare_by(field: SortField, a: &Issue, b: &Issue) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Priority => a.priority.as_str().cmp(b.priority.as_str()),
        SortField::Assignee => a.assignee.cmp(&b.assignee),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Sort in place. Stable in both directions: tied issues keep their
/// input order. `None` leaves the slice untouched.
pub fn sort_issues<T: AsRef<Issue>>(issues: &mut [T], field: Option<SortField>, order: SortOrder) {
    let Some(field) = field else {
        return;
    };

    match order {
        SortOrder::Asc => issues.sort_by(|a, b| compare_by(field, a.as_ref(), b.as_ref())),
        SortOrder::Desc => issues.sort_by(|a, b| compare_by(field, b.as_ref(), a.as_ref())),
    }
}
