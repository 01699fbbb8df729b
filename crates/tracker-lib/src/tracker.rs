//! The tracker facade: create, list, update, delete on top of a store.

use chrono::Utc;
use tracing::{debug, trace};

use crate::error::Result;
use crate::filter;
use crate::model::Issue;
use crate::page;
use crate::query::{IssueUpdate, ListFilters, ListQuery, NewIssue};
use crate::sort;
use crate::store::{InMemoryStore, IssueStore};
use crate::util::{self, DEFAULT_ID_PREFIX, IdSeed};

/// Issue tracker over an [`IssueStore`].
///
/// Title requirements are checked by the caller (see
/// [`crate::validation`]); the tracker builds whatever it is given.
#[derive(Debug)]
pub struct Tracker<S = InMemoryStore> {
    store: S,
    prefix: String,
    next_sequence: u64,
}

impl Tracker<InMemoryStore> {
    /// Create a tracker over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for Tracker<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IssueStore> Tracker<S> {
    /// Wrap an existing store.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            prefix: DEFAULT_ID_PREFIX.to_string(),
            next_sequence: 0,
        }
    }

    /// Set the ID prefix for new issues.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Get the ID prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create a new issue with a fresh ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `IdCollision` if the store refuses the generated ID.
    pub fn create_issue(&mut self, payload: NewIssue) -> Result<Issue> {
        let now = Utc::now();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let id = {
            let store = &self.store;
            let seed = IdSeed {
                title: payload.title.as_deref().unwrap_or(""),
                description: payload.description.as_deref(),
                created_at: now,
                sequence,
            };
            util::generate_id(&self.prefix, seed, store.len(), |id| store.was_issued(id))
        };

        let issue = payload.into_issue(id, now);
        self.store.insert(issue.clone())?;
        debug!(id = %issue.id, "issue created");
        Ok(issue)
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: &str) -> Result<&Issue> {
        self.store.find(id)
    }

    /// Run a list query: filter, then sort, then take one page.
    #[must_use]
    pub fn list_issues(&self, query: &ListQuery) -> Vec<Issue> {
        let mut results: Vec<&Issue> =
            filter::apply_filters(self.store.scan(), &query.filters).collect();

        trace!(
            matched = results.len(),
            sort_by = query.sort_by.map_or("none", |field| field.as_str()),
            order = ?query.order,
            "listing issues"
        );
        sort::sort_issues(&mut results, query.sort_by, query.order);

        page::paginate(results, query.page)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Count issues matching the filters, ignoring paging.
    #[must_use]
    pub fn count_issues(&self, filters: &ListFilters) -> usize {
        filter::apply_filters(self.store.scan(), filters).count()
    }

    /// Merge a sparse update into an existing issue.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn update_issue(&mut self, id: &str, update: &IssueUpdate) -> Result<Issue> {
        let issue = self.store.find_mut(id)?;
        update.apply_to(issue, Utc::now());
        if update.is_empty() {
            debug!(id, "issue touched with empty update");
        } else {
            debug!(id, "issue updated");
        }
        Ok(issue.clone())
    }

    /// Delete an issue. Its ID is retired, never reissued.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn delete_issue(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        debug!(id, "issue deleted");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
