// Volume handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::{AppState, created, listed, ok};
use crate::error::ApiError;
use crate::normalize::CreateVolumeRequest;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ForceQuery {
    #[serde(default)]
    force: bool,
}

pub(super) async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(listed(state.volumes.list().await?))
}

pub(super) async fn details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.volumes.get(&name).await?))
}

pub(super) async fn create(
    State(state): State<AppState>,
    body: Option<Json<CreateVolumeRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(created(state.volumes.create(req).await?))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(q): Query<ForceQuery>,
) -> Result<Response, ApiError> {
    Ok(ok(state.volumes.remove(&name, q.force).await?))
}

pub(super) async fn prune(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.volumes.prune().await?))
}

pub(super) async fn stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.volumes.stats().await?))
}
