//! Query-string decoding for `GET /issues`.

use serde::Deserialize;
use tracker_lib::error::ValidationError;
use tracker_lib::query::DEFAULT_PAGE_SIZE;
use tracker_lib::{
    ListFilters, ListQuery, PageRequest, Priority, Result, SortField, SortOrder, Status,
    TrackerError,
};

/// Raw list parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

impl ListParams {
    /// Validate and convert into a core [`ListQuery`].
    ///
    /// An unrecognized `sort_by` is not an error: the listing simply keeps
    /// insertion order. A `sort_order` other than `desc` sorts ascending.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown status or priority values
    /// and for out-of-range paging. All problems are reported together.
    pub fn into_query(self) -> Result<ListQuery> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let status = parse_field::<Status>(self.status.as_deref(), &mut errors);
        let priority = parse_field::<Priority>(self.priority.as_deref(), &mut errors);
        let order = self
            .sort_order
            .as_deref()
            .map_or_else(SortOrder::default, SortOrder::from_param);

        let page = match PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        ) {
            Ok(page) => Some(page),
            Err(err) => {
                errors.extend(err.field_errors());
                None
            }
        };

        let sort_by = match self.sort_by.as_deref() {
            None => Some(SortField::CreatedAt),
            Some(name) => SortField::parse(name),
        };

        match page {
            Some(page) if errors.is_empty() => Ok(ListQuery {
                filters: ListFilters {
                    title_contains: self.title,
                    status,
                    priority,
                    assignee_contains: self.assignee,
                },
                sort_by,
                order,
                page,
            }),
            _ => Err(TrackerError::from_validation_errors(errors)),
        }
    }
}

fn parse_field<T>(raw: Option<&str>, errors: &mut Vec<ValidationError>) -> Option<T>
where
    T: std::str::FromStr<Err = TrackerError>,
{
    match raw.map(str::parse::<T>) {
        None => None,
        Some(Ok(value)) => Some(value),
        Some(Err(err)) => {
            errors.extend(err.field_errors());
            None
        }
    }
}
