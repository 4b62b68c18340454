// Service banner, health probe and the self-describing command catalog

use axum::extract::State;
use axum::response::Response;

use super::{AppState, ok};
use crate::error::ApiError;
use crate::models::HealthStatus;
use crate::version::{NAME, VERSION};

/// GET /: service banner.
pub(super) async fn root() -> Response {
    ok(serde_json::json!({
        "message": "Container engine management API",
        "name": NAME,
        "version": VERSION,
        "endpoints": "/api/commands",
        "health": "/health",
    }))
}

/// GET /health: bounded engine liveness probe; 503 when the engine is
/// unreachable or silent.
pub(super) async fn health(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.system.ping().await?;
    Ok(ok(HealthStatus {
        status: "healthy".into(),
        engine: "running".into(),
        name: NAME.into(),
        version: VERSION.into(),
    }))
}

/// GET /api/commands: enumerates every available operation.
pub(super) async fn commands() -> Response {
    ok(serde_json::json!({
        "containers": {
            "list": "GET /api/containers - List containers (add ?all=true for stopped ones)",
            "details": "GET /api/containers/{id} - Get container details",
            "create": "POST /api/containers - Create a container",
            "start": "POST /api/containers/{id}/start - Start a container",
            "stop": "POST /api/containers/{id}/stop - Stop a container",
            "restart": "POST /api/containers/{id}/restart - Restart a container",
            "remove": "DELETE /api/containers/{id}/remove - Remove a container (?force=true)",
            "logs": "GET /api/containers/{id}/logs - Get container logs (?tail=100)",
        },
        "images": {
            "list": "GET /api/images - List images",
            "details": "GET /api/images/{id} - Get image details",
            "pull": "POST /api/images/pull - Pull an image from a registry",
            "build": "POST /api/images/build - Build an image from a context directory",
            "remove": "DELETE /api/images/{id}/remove - Remove an image",
            "search": "GET /api/images/search?term={term} - Search the registry",
            "prune": "POST /api/images/prune - Remove unused images",
        },
        "volumes": {
            "list": "GET /api/volumes - List volumes",
            "details": "GET /api/volumes/{name} - Get volume details",
            "create": "POST /api/volumes - Create a volume",
            "remove": "DELETE /api/volumes/{name}/remove - Remove a volume",
            "prune": "POST /api/volumes/prune - Remove unused volumes",
            "stats": "GET /api/volumes/stats - Get volume statistics",
        },
        "networks": {
            "list": "GET /api/networks - List networks",
            "details": "GET /api/networks/{id} - Get network details",
            "create": "POST /api/networks - Create a network",
            "remove": "DELETE /api/networks/{id}/remove - Remove a network",
            "connect": "POST /api/networks/{id}/connect - Connect a container",
            "disconnect": "POST /api/networks/{id}/disconnect - Disconnect a container",
            "prune": "POST /api/networks/prune - Remove unused networks",
            "stats": "GET /api/networks/stats - Get network statistics",
        },
        "system": {
            "version": "GET /api/system/version - Get engine version",
            "info": "GET /api/system/info - Get engine information",
            "df": "GET /api/system/df - Get disk usage",
            "status": "GET /api/system/status - Get daemon status",
            "stats": "GET /api/system/stats - Get overall statistics",
            "host": "GET /api/system/host - Get host system info",
        },
    }))
}
