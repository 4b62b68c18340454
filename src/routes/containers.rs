// Container handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::{AppState, created, listed, ok};
use crate::error::ApiError;
use crate::normalize::CreateContainerRequest;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    all: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ForceQuery {
    #[serde(default)]
    force: bool,
}

fn default_tail() -> u32 {
    100
}

#[derive(Debug, Deserialize)]
pub(super) struct LogsQuery {
    #[serde(default = "default_tail")]
    tail: u32,
}

/// Optional JSON body for stop/restart carrying a kill grace period.
#[derive(Debug, Default, Deserialize)]
pub(super) struct TimeoutBody {
    timeout: Option<i32>,
}

pub(super) async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Response, ApiError> {
    Ok(listed(state.containers.list(q.all).await?))
}

pub(super) async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.containers.get(&id).await?))
}

pub(super) async fn create(
    State(state): State<AppState>,
    body: Option<Json<CreateContainerRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(created(state.containers.create(req).await?))
}

pub(super) async fn start(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.containers.start(&id).await?))
}

pub(super) async fn stop(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<TimeoutBody>>,
) -> Result<Response, ApiError> {
    let Json(body) = body.unwrap_or_default();
    Ok(ok(state.containers.stop(&id, body.timeout).await?))
}

pub(super) async fn restart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<TimeoutBody>>,
) -> Result<Response, ApiError> {
    let Json(body) = body.unwrap_or_default();
    Ok(ok(state.containers.restart(&id, body.timeout).await?))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<ForceQuery>,
) -> Result<Response, ApiError> {
    Ok(ok(state.containers.remove(&id, q.force).await?))
}

pub(super) async fn logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<LogsQuery>,
) -> Result<Response, ApiError> {
    Ok(ok(state.containers.logs(&id, q.tail).await?))
}
