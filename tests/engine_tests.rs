// Optional live-engine tests when a Docker daemon is available

use dockhand::engine::{DockerEngine, EnginePort};

#[tokio::test]
async fn engine_connect_ping_and_list() {
    let engine = match DockerEngine::connect() {
        Ok(e) => e,
        Err(_) => return, // Skip when Docker is not available (e.g. CI without Docker)
    };
    if engine.ping().await.is_err() {
        return; // Socket present but daemon not answering
    }
    let containers = engine.list_containers(None).await;
    assert!(containers.is_ok());
    let version = engine.version().await;
    assert!(version.is_ok());
}
