// Integration tests: HTTP endpoints against a stub engine

mod common;

use axum::http::StatusCode;
use bollard::models::{ContainerStateStatusEnum, Network, NetworkContainer};
use dockhand::engine::EngineError;
use serde_json::{Value, json};

use common::{StubEngine, inspected_container, running_container, test_app};

#[tokio::test]
async fn test_create_container_returns_201_with_receipt() {
    let (server, engine) = test_app(StubEngine::default());
    let response = server
        .post("/api/containers")
        .json(&json!({
            "image": "nginx:latest",
            "name": "w1",
            "ports": {"80/tcp": 8080},
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "w1");
    assert_eq!(body["data"]["status"], "created");
    assert_eq!(body["data"]["image"], "nginx:latest");
    assert!(body["error"].is_null());
    // Requested name is echoed back without an extra inspect round-trip.
    assert_eq!(engine.calls(), vec!["create_container"]);
}

#[tokio::test]
async fn test_create_container_without_image_is_rejected_before_engine() {
    let (server, engine) = test_app(StubEngine::default());
    let response = server.post("/api/containers").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["error"].as_str().unwrap().contains("image"));
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn test_list_containers_reports_count_and_status() {
    let stub = StubEngine {
        containers: vec![running_container("0123456789abcdef0123", "web")],
        ..Default::default()
    };
    let (server, _) = test_app(stub);
    let response = server.get("/api/containers").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["status"], "running");
    assert_eq!(body["data"][0]["name"], "web");
}

#[tokio::test]
async fn test_remove_running_container_without_force_conflicts() {
    let stub = StubEngine {
        container_inspect: Some(inspected_container(
            "0123456789abcdef0123",
            "web",
            ContainerStateStatusEnum::RUNNING,
        )),
        ..Default::default()
    }
    .fail_on(
        "remove_container",
        EngineError::Conflict("cannot remove a running container".into()),
    );
    let (server, _) = test_app(stub);
    let response = server.delete("/api/containers/web/remove").await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_missing_container_is_404() {
    let (server, _) = test_app(StubEngine::default());
    let response = server.get("/api/containers/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_container_logs_with_default_tail() {
    let stub = StubEngine {
        container_inspect: Some(inspected_container(
            "0123456789abcdef0123",
            "web",
            ContainerStateStatusEnum::RUNNING,
        )),
        ..Default::default()
    };
    let (server, _) = test_app(stub);
    let response = server.get("/api/containers/web/logs").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["logs"], "stub log line\n");
    assert_eq!(body["data"]["tail"], 100);
    assert_eq!(body["data"]["name"], "web");
}

#[tokio::test]
async fn test_system_stats_is_all_or_nothing() {
    let stub = StubEngine::default().fail_on(
        "disk_usage",
        EngineError::Api("df exploded".into()),
    );
    let (server, engine) = test_app(stub);
    let response = server.get("/api/system/stats").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert_eq!(body["error"], "df exploded");
    // The first constituent call succeeded, yet nothing partial leaks out.
    assert_eq!(engine.calls(), vec!["info", "disk_usage"]);
}

#[tokio::test]
async fn test_health_reports_healthy_engine() {
    let (server, _) = test_app(StubEngine::default());
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["engine"], "running");
}

#[tokio::test]
async fn test_health_is_503_when_engine_unreachable() {
    let stub = StubEngine::default().fail_on(
        "ping",
        EngineError::Unavailable("connection refused".into()),
    );
    let (server, _) = test_app(stub);
    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_daemon_status_is_503_when_ping_fails() {
    let stub = StubEngine::default().fail_on(
        "ping",
        EngineError::Unavailable("no socket".into()),
    );
    let (server, engine) = test_app(stub);
    let response = server.get("/api/system/status").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    // Ping failed, so version/info were never asked for.
    assert_eq!(engine.calls(), vec!["ping"]);
}

#[tokio::test]
async fn test_commands_catalog_lists_operations() {
    let (server, _) = test_app(StubEngine::default());
    let response = server.get("/api/commands").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["data"]["containers"]["list"].is_string());
    assert!(body["data"]["system"]["host"].is_string());
}

#[tokio::test]
async fn test_volume_create_with_empty_body_gets_engine_name() {
    let (server, _) = test_app(StubEngine::default());
    let response = server.post("/api/volumes").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "autogen0123");
    assert_eq!(body["data"]["driver"], "local");
    assert_eq!(body["data"]["status"], "created");
}

#[tokio::test]
async fn test_network_create_requires_name() {
    let (server, engine) = test_app(StubEngine::default());
    let response = server.post("/api/networks").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn test_network_remove_with_endpoints_conflicts_before_engine_call() {
    let mut attached = std::collections::HashMap::new();
    attached.insert(
        "0123456789abcdef0123".to_string(),
        NetworkContainer {
            name: Some("web".into()),
            ..Default::default()
        },
    );
    let stub = StubEngine {
        network_inspect: Some(Network {
            id: Some("fedcba9876543210fedc".into()),
            name: Some("appnet".into()),
            containers: Some(attached),
            ..Default::default()
        }),
        ..Default::default()
    };
    let (server, engine) = test_app(stub);
    let response = server.delete("/api/networks/appnet/remove").await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("web"));
    assert_eq!(engine.calls(), vec!["inspect_network"]);
}

#[tokio::test]
async fn test_image_pull_requires_image_name() {
    let (server, engine) = test_app(StubEngine::default());
    let response = server.post("/api/images/pull").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn test_image_search_requires_term() {
    let (server, engine) = test_app(StubEngine::default());
    let response = server.get("/api/images/search").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn test_stop_container_accepts_timeout_body() {
    let stub = StubEngine {
        container_inspect: Some(inspected_container(
            "0123456789abcdef0123",
            "web",
            ContainerStateStatusEnum::RUNNING,
        )),
        ..Default::default()
    };
    let (server, engine) = test_app(stub);
    let response = server
        .post("/api/containers/web/stop")
        .json(&json!({"timeout": 3}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "stopped");
    assert_eq!(engine.calls(), vec!["inspect_container", "stop_container"]);
}

#[tokio::test]
async fn test_root_banner() {
    let (server, _) = test_app(StubEngine::default());
    let response = server.get("/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "dockhand");
    assert_eq!(body["data"]["health"], "/health");
}
