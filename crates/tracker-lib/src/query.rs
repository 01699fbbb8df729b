//! Query, filter, and update types for issue operations.

use serde::{Deserialize, Deserializer};

use crate::error::{Result, TrackerError, ValidationError};
use crate::model::{Priority, Status};

/// Default page size for listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// A field that was sent must carry a value; `null` is a decode error.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Keep "sent as null" apart from "not sent": `Some(None)` vs `None`.
#[allow(clippy::option_option)]
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Fields to update on an issue.
///
/// Outer `None` leaves the field untouched. For the nullable fields,
/// `Some(None)` clears the value. Keys outside this set (`id`,
/// `createdAt`, `updatedAt`, ...) are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[allow(clippy::option_option)]
pub struct IssueUpdate {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "present")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "nullable")]
    pub assignee: Option<Option<String>>,
}

impl IssueUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }
}

/// Creation payload. Same sparse shape as [`IssueUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewIssue {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "present")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl NewIssue {
    /// Minimal payload with just a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Filter options for listing issues. Combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Case-insensitive substring of the assignee.
    pub assignee_contains: Option<String>,
}

impl ListFilters {
    /// True when no predicate would narrow the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title_needle().is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee_needle().is_none()
    }

    /// Lowercased title needle, ignoring empty strings.
    #[must_use]
    pub fn title_needle(&self) -> Option<String> {
        needle(self.title_contains.as_deref())
    }

    /// Lowercased assignee needle, ignoring empty strings.
    #[must_use]
    pub fn assignee_needle(&self) -> Option<String> {
        needle(self.assignee_contains.as_deref())
    }
}

fn needle(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}

/// Sortable issue fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Title,
    Description,
    Status,
    Priority,
    Assignee,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Resolve a field name. Unknown names yield `None`, which the sort
    /// engine treats as "leave the order alone".
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            "assignee" => Some(Self::Assignee),
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "updatedAt" | "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Assignee => "assignee",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Read a `sort_order` parameter. Only the exact string `desc` sorts
    /// descending; any other value sorts ascending.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        if raw == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// A validated page request (1-based page, bounded size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a page request.
    ///
    /// # Errors
    ///
    /// Returns `Validation` (or `ValidationErrors`) if `page < 1` or
    /// `page_size` is outside `1..=100`.
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        let mut errors = Vec::new();
        if page < 1 {
            errors.push(ValidationError::new("page", "must be at least 1"));
        }
        if page_size < 1 {
            errors.push(ValidationError::new("pageSize", "must be at least 1"));
        } else if page_size > MAX_PAGE_SIZE {
            errors.push(ValidationError::new(
                "pageSize",
                format!("must be at most {MAX_PAGE_SIZE}"),
            ));
        }
        if errors.is_empty() {
            Ok(Self { page, page_size })
        } else {
            Err(TrackerError::from_validation_errors(errors))
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based offset of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything the list endpoint needs: filter, sort, page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: ListFilters,
    /// `None` keeps insertion order.
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: ListFilters::default(),
            sort_by: Some(SortField::CreatedAt),
            order: SortOrder::Desc,
            page: PageRequest::default(),
        }
    }
}
