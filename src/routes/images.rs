// Image handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::{AppState, listed, ok};
use crate::error::ApiError;
use crate::normalize::{BuildImageRequest, PullImageRequest};

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    all: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RemoveQuery {
    #[serde(default)]
    force: bool,
    #[serde(default)]
    no_prune: bool,
}

fn default_search_limit() -> i32 {
    25
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    term: Option<String>,
    #[serde(default = "default_search_limit")]
    limit: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(super) struct PruneQuery {
    #[serde(default = "default_true")]
    dangling_only: bool,
}

pub(super) async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Response, ApiError> {
    Ok(listed(state.images.list(q.all).await?))
}

pub(super) async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.images.get(&id).await?))
}

pub(super) async fn pull(
    State(state): State<AppState>,
    body: Option<Json<PullImageRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(ok(state.images.pull(req).await?))
}

pub(super) async fn build(
    State(state): State<AppState>,
    body: Option<Json<BuildImageRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(ok(state.images.build(req).await?))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<RemoveQuery>,
) -> Result<Response, ApiError> {
    Ok(ok(state.images.remove(&id, q.force, q.no_prune).await?))
}

pub(super) async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Response, ApiError> {
    Ok(listed(state.images.search(q.term, q.limit).await?))
}

pub(super) async fn prune(
    State(state): State<AppState>,
    Query(q): Query<PruneQuery>,
) -> Result<Response, ApiError> {
    Ok(ok(state.images.prune(q.dangling_only).await?))
}
