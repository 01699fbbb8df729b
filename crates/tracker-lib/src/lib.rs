//! `tracker-lib` - In-process issue tracking core.
//!
//! Owns the issue collection and the list query engine (filter, sort,
//! page) plus sparse-update merging. No I/O and no transport: callers
//! hand in decoded requests and get back records.
//!
//! # Quick Start
//!
//! ```
//! use tracker_lib::{IssueUpdate, ListQuery, NewIssue, Status, Tracker};
//!
//! let mut tracker = Tracker::new();
//!
//! // Create
//! let issue = tracker.create_issue(NewIssue::titled("Fix bug")).unwrap();
//! assert_eq!(issue.status, Status::Todo);
//!
//! // Update
//! let update = IssueUpdate { status: Some(Status::Done), ..Default::default() };
//! tracker.update_issue(&issue.id, &update).unwrap();
//!
//! // Query
//! let page = tracker.list_issues(&ListQuery::default());
//! assert_eq!(page.len(), 1);
//!
//! // Delete
//! tracker.delete_issue(&issue.id).unwrap();
//! ```

pub mod error;
pub mod filter;
pub mod merge;
pub mod model;
pub mod page;
pub mod query;
pub mod sort;
pub mod store;
pub mod tracker;
pub mod util;
pub mod validation;

pub use error::{Result, TrackerError, ValidationError};
pub use model::{Issue, Priority, Status};
pub use query::{
    IssueUpdate, ListFilters, ListQuery, NewIssue, PageRequest, SortField, SortOrder,
};
pub use store::{InMemoryStore, IssueStore};
pub use tracker::Tracker;
