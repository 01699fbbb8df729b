//! HTTP handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tracing::info;
use tracker_lib::{Issue, IssueUpdate, NewIssue, validation};

use super::AppState;
use super::params::ListParams;
use crate::error::ApiError;

/// Response header carrying the number of matches before paging.
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

type ApiResult<T> = Result<T, ApiError>;

#[allow(clippy::unused_async)]
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn create_issue(
    State(state): State<AppState>,
    payload: Result<Json<NewIssue>, JsonRejection>,
) -> ApiResult<Json<Issue>> {
    let Json(payload) = payload?;
    validation::validate_new_issue(&payload)?;

    let issue = state.tracker.write().await.create_issue(payload)?;
    info!(id = %issue.id, "created issue");
    Ok(Json(issue))
}

pub async fn list_issues(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = params?;
    let query = params.into_query()?;

    let (issues, total) = {
        let tracker = state.tracker.read().await;
        (
            tracker.list_issues(&query),
            tracker.count_issues(&query.filters),
        )
    };

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    Ok((headers, Json(issues)))
}

pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Issue>> {
    let tracker = state.tracker.read().await;
    let issue = tracker.get_issue(&id)?.clone();
    Ok(Json(issue))
}

pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<IssueUpdate>, JsonRejection>,
) -> ApiResult<Json<Issue>> {
    let Json(update) = payload?;
    validation::validate_update(&update)?;

    let issue = state.tracker.write().await.update_issue(&id, &update)?;
    info!(id = %issue.id, "updated issue");
    Ok(Json(issue))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tracker.write().await.delete_issue(&id)?;
    info!(%id, "deleted issue");
    Ok(StatusCode::NO_CONTENT)
}
