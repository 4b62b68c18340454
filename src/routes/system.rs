// System handlers

use axum::extract::State;
use axum::response::Response;

use super::{AppState, ok};
use crate::error::ApiError;

pub(super) async fn version(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.version().await?))
}

pub(super) async fn info(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.info().await?))
}

pub(super) async fn disk_usage(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.disk_usage().await?))
}

pub(super) async fn status(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.daemon_status().await?))
}

pub(super) async fn stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.stats().await?))
}

pub(super) async fn host(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(ok(state.system.host().await?))
}
