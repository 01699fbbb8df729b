//! List filtering.

use crate::model::Issue;
use crate::query::ListFilters;

/// Lowercased needles, computed once per query instead of once per issue.
struct Compiled<'f> {
    title: Option<String>,
    assignee: Option<String>,
    filters: &'f ListFilters,
}

impl<'f> Compiled<'f> {
    fn new(filters: &'f ListFilters) -> Self {
        Self {
            title: filters.title_needle(),
            assignee: filters.assignee_needle(),
            filters,
        }
    }

    fn matches(&self, issue: &Issue) -> bool {
        // Title search
        if let Some(ref needle) = self.title {
            if !issue.title.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if let Some(status) = self.filters.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(priority) = self.filters.priority {
            if issue.priority != priority {
                return false;
            }
        }

        // Unassigned issues never match an assignee search
        if let Some(ref needle) = self.assignee {
            match issue.assignee.as_deref() {
                Some(assignee) if assignee.to_lowercase().contains(needle.as_str()) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Check a single issue against the filters.
#[must_use]
pub fn matches(issue: &Issue, filters: &ListFilters) -> bool {
    Compiled::new(filters).matches(issue)
}

/// Narrow a sequence of issues, preserving its order.
pub fn apply_filters<'a, I>(issues: I, filters: &ListFilters) -> impl Iterator<Item = &'a Issue>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let compiled = Compiled::new(filters);
    issues.into_iter().filter(move |issue| compiled.matches(issue))
}
