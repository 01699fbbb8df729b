//! Issue storage.
//!
//! [`IssueStore`] is the capability the tracker needs from a backing
//! collection. [`InMemoryStore`] keeps everything in process memory,
//! in insertion order; nothing survives a restart.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Result, TrackerError};
use crate::model::Issue;

/// Owner of all issue records.
pub trait IssueStore {
    /// Append a fully formed issue.
    ///
    /// # Errors
    ///
    /// Returns `IdCollision` if the ID is live or was issued before.
    fn insert(&mut self, issue: Issue) -> Result<()>;

    /// Look up an issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no live issue has this ID.
    fn find(&self, id: &str) -> Result<&Issue>;

    /// Mutable lookup, for in-place merges.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no live issue has this ID.
    fn find_mut(&mut self, id: &str) -> Result<&mut Issue>;

    /// Iterate all live issues in insertion order.
    fn scan(&self) -> Box<dyn Iterator<Item = &Issue> + '_>;

    /// Remove an issue.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no live issue has this ID.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Whether an ID is currently live.
    fn contains(&self, id: &str) -> bool;

    /// Whether an ID was ever inserted, including deleted ones.
    fn was_issued(&self, id: &str) -> bool;

    /// Number of live issues.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory issue store.
///
/// Issues are keyed by an insertion sequence so scans come back in the
/// order issues were created; `index` maps IDs onto that sequence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    issues: BTreeMap<u64, Issue>,
    index: HashMap<String, u64>,
    issued: HashSet<String>,
    next_seq: u64,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str) -> TrackerError {
        TrackerError::IssueNotFound { id: id.to_string() }
    }
}

impl IssueStore for InMemoryStore {
    fn insert(&mut self, issue: Issue) -> Result<()> {
        if self.issued.contains(&issue.id) {
            return Err(TrackerError::IdCollision { id: issue.id });
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.issued.insert(issue.id.clone());
        self.index.insert(issue.id.clone(), seq);
        self.issues.insert(seq, issue);
        Ok(())
    }

    fn find(&self, id: &str) -> Result<&Issue> {
        self.index
            .get(id)
            .and_then(|seq| self.issues.get(seq))
            .ok_or_else(|| Self::not_found(id))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Issue> {
        match self.index.get(id) {
            Some(seq) => self.issues.get_mut(seq).ok_or_else(|| Self::not_found(id)),
            None => Err(Self::not_found(id)),
        }
    }

    fn scan(&self) -> Box<dyn Iterator<Item = &Issue> + '_> {
        Box::new(self.issues.values())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let seq = self.index.remove(id).ok_or_else(|| Self::not_found(id))?;
        self.issues.remove(&seq);
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn was_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    fn len(&self) -> usize {
        self.issues.len()
    }
}
