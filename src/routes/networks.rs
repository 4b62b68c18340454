// Network handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;

use super::{AppState, created, listed, ok};
use crate::error::ApiError;
use crate::normalize::{
    ConnectContainerRequest, CreateNetworkRequest, DisconnectContainerRequest,
};

pub(super) async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(listed(state.networks.list().await?))
}

pub(super) async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.networks.get(&id).await?))
}

pub(super) async fn create(
    State(state): State<AppState>,
    body: Option<Json<CreateNetworkRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(created(state.networks.create(req).await?))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    Ok(ok(state.networks.remove(&id).await?))
}

pub(super) async fn connect(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<ConnectContainerRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(ok(state.networks.connect(&id, req).await?))
}

pub(super) async fn disconnect(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<DisconnectContainerRequest>>,
) -> Result<Response, ApiError> {
    let Json(req) = body.unwrap_or_default();
    Ok(ok(state.networks.disconnect(&id, req).await?))
}

pub(super) async fn prune(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.networks.prune().await?))
}

pub(super) async fn stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.networks.stats().await?))
}
