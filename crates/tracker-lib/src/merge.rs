//! Building new issues and merging sparse updates into existing ones.

use chrono::{DateTime, Utc};

use crate::model::Issue;
use crate::query::{IssueUpdate, NewIssue};

impl IssueUpdate {
    /// Overwrite the provided fields in place and refresh `updated_at`.
    ///
    /// `id` and `created_at` are never touched. `updated_at` is refreshed
    /// even when nothing else changed, and never goes below `created_at`.
    pub fn apply_to(&self, issue: &mut Issue, now: DateTime<Utc>) {
        if let Some(ref title) = self.title {
            issue.title.clone_from(title);
        }
        if let Some(ref desc) = self.description {
            issue.description.clone_from(desc);
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
        if let Some(priority) = self.priority {
            issue.priority = priority;
        }
        if let Some(ref assignee) = self.assignee {
            issue.assignee.clone_from(assignee);
        }

        issue.updated_at = now.max(issue.created_at);
    }
}

impl NewIssue {
    /// Materialize the payload as a fresh issue with the given ID.
    ///
    /// Both timestamps are set to `now`; status and priority fall back to
    /// their defaults when omitted.
    #[must_use]
    pub fn into_issue(self, id: String, now: DateTime<Utc>) -> Issue {
        Issue {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            assignee: self.assignee,
            created_at: now,
            updated_at: now,
        }
    }
}
