// HTTP routes: one route per facade operation plus health/commands

mod containers;
mod images;
mod meta;
mod networks;
mod system;
mod volumes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::engine::EnginePort;
use crate::facade::{ContainerFacade, ImageFacade, NetworkFacade, SystemFacade, VolumeFacade};
use crate::host_repo::HostRepo;
use crate::models::Envelope;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) containers: ContainerFacade,
    pub(crate) images: ImageFacade,
    pub(crate) volumes: VolumeFacade,
    pub(crate) networks: NetworkFacade,
    pub(crate) system: SystemFacade,
}

pub fn app(engine: Arc<dyn EnginePort>, host: Arc<HostRepo>, config: AppConfig) -> Router {
    let state = AppState {
        containers: ContainerFacade::new(engine.clone(), config.engine.stop_timeout_secs),
        images: ImageFacade::new(engine.clone()),
        volumes: VolumeFacade::new(engine.clone()),
        networks: NetworkFacade::new(engine.clone()),
        system: SystemFacade::new(
            engine,
            host,
            Duration::from_millis(config.engine.ping_timeout_ms),
        ),
    };
    Router::new()
        .route("/", get(meta::root)) // GET /
        .route("/health", get(meta::health)) // GET /health
        .route("/api/commands", get(meta::commands)) // GET /api/commands
        .route(
            "/api/containers",
            get(containers::list).post(containers::create),
        )
        .route("/api/containers/{id}", get(containers::details))
        .route("/api/containers/{id}/start", post(containers::start))
        .route("/api/containers/{id}/stop", post(containers::stop))
        .route("/api/containers/{id}/restart", post(containers::restart))
        .route("/api/containers/{id}/remove", delete(containers::remove))
        .route("/api/containers/{id}/logs", get(containers::logs))
        .route("/api/images", get(images::list))
        .route("/api/images/pull", post(images::pull))
        .route("/api/images/build", post(images::build))
        .route("/api/images/search", get(images::search))
        .route("/api/images/prune", post(images::prune))
        .route("/api/images/{id}", get(images::details))
        .route("/api/images/{id}/remove", delete(images::remove))
        .route("/api/volumes", get(volumes::list).post(volumes::create))
        .route("/api/volumes/prune", post(volumes::prune))
        .route("/api/volumes/stats", get(volumes::stats))
        .route("/api/volumes/{name}", get(volumes::details))
        .route("/api/volumes/{name}/remove", delete(volumes::remove))
        .route("/api/networks", get(networks::list).post(networks::create))
        .route("/api/networks/prune", post(networks::prune))
        .route("/api/networks/stats", get(networks::stats))
        .route("/api/networks/{id}", get(networks::details))
        .route("/api/networks/{id}/connect", post(networks::connect))
        .route("/api/networks/{id}/disconnect", post(networks::disconnect))
        .route("/api/networks/{id}/remove", delete(networks::remove))
        .route("/api/system/version", get(system::version))
        .route("/api/system/info", get(system::info))
        .route("/api/system/df", get(system::disk_usage))
        .route("/api/system/status", get(system::status))
        .route("/api/system/stats", get(system::stats))
        .route("/api/system/host", get(system::host))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

// Envelope response helpers shared by the handlers. Failures go through
// ApiError's IntoResponse, so success and failure bodies share one shape.

pub(crate) fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(Envelope::success(data))).into_response()
}

pub(crate) fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(Envelope::success(data))).into_response()
}

pub(crate) fn listed<T: Serialize>(items: Vec<T>) -> Response {
    (StatusCode::OK, Json(Envelope::list(items))).into_response()
}
