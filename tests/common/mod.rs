#![allow(dead_code)]
// Shared test fixtures: a programmable stub engine and app builders

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use bollard::models::{
    BuildInfo, ContainerConfig, ContainerCreateBody, ContainerCreateResponse,
    ContainerInspectResponse, ContainerState, ContainerStateStatusEnum, ContainerSummary,
    ContainerSummaryStateEnum, CreateImageInfo, HistoryResponseItem, ImageDeleteResponseItem,
    ImageInspect, ImagePruneResponse, ImageSearchResponseItem, ImageSummary, Network,
    NetworkConnectRequest, NetworkCreateRequest, NetworkCreateResponse, NetworkDisconnectRequest,
    NetworkPruneResponse, SystemDataUsageResponse, SystemInfo, SystemVersion, Volume,
    VolumeCreateOptions, VolumeListResponse, VolumePruneResponse,
};
use bollard::query_parameters::{
    BuildImageOptions, CreateContainerOptions, CreateImageOptions, ListContainersOptions,
    ListImagesOptions, ListNetworksOptions, ListVolumesOptions, LogsOptions, PruneImagesOptions,
    PruneNetworksOptions, PruneVolumesOptions, RemoveContainerOptions, RemoveImageOptions,
    RemoveVolumeOptions, RestartContainerOptions, SearchImagesOptions, StopContainerOptions,
};

use dockhand::config::AppConfig;
use dockhand::engine::{EngineError, EnginePort, EngineResult};
use dockhand::host_repo::HostRepo;

pub const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[engine]
ping_timeout_ms = 500
stop_timeout_secs = 10
"#;

pub fn test_config() -> AppConfig {
    AppConfig::load_from_str(TEST_CONFIG).unwrap()
}

/// Stub engine port: every call is recorded by method name, and any method
/// can be programmed to fail. Successful responses come from the fixture
/// fields below.
#[derive(Default)]
pub struct StubEngine {
    pub calls: Mutex<Vec<String>>,
    pub fail: HashMap<String, EngineError>,
    pub containers: Vec<ContainerSummary>,
    pub container_inspect: Option<ContainerInspectResponse>,
    pub images: Vec<ImageSummary>,
    pub image_inspect: Option<ImageInspect>,
    pub image_history: Vec<HistoryResponseItem>,
    pub search_results: Vec<ImageSearchResponseItem>,
    pub volumes: Vec<Volume>,
    pub volume_inspect: Option<Volume>,
    pub networks: Vec<Network>,
    pub network_inspect: Option<Network>,
    pub version: SystemVersion,
    pub info: SystemInfo,
    pub df: SystemDataUsageResponse,
}

impl StubEngine {
    pub fn fail_on(mut self, method: &str, err: EngineError) -> Self {
        self.fail.insert(method.to_string(), err);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn hit(&self, method: &str) -> EngineResult<()> {
        self.calls.lock().unwrap().push(method.to_string());
        match self.fail.get(method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EnginePort for StubEngine {
    async fn list_containers(
        &self,
        _options: Option<ListContainersOptions>,
    ) -> EngineResult<Vec<ContainerSummary>> {
        self.hit("list_containers")?;
        Ok(self.containers.clone())
    }

    async fn inspect_container(&self, id: &str) -> EngineResult<ContainerInspectResponse> {
        self.hit("inspect_container")?;
        self.container_inspect
            .clone()
            .ok_or_else(|| EngineError::NotFound(format!("No such container: {id}")))
    }

    async fn create_container(
        &self,
        _options: Option<CreateContainerOptions>,
        _body: ContainerCreateBody,
    ) -> EngineResult<ContainerCreateResponse> {
        self.hit("create_container")?;
        Ok(ContainerCreateResponse {
            id: "0123456789abcdef0123".into(),
            ..Default::default()
        })
    }

    async fn start_container(&self, _id: &str) -> EngineResult<()> {
        self.hit("start_container")
    }

    async fn stop_container(
        &self,
        _id: &str,
        _options: Option<StopContainerOptions>,
    ) -> EngineResult<()> {
        self.hit("stop_container")
    }

    async fn restart_container(
        &self,
        _id: &str,
        _options: Option<RestartContainerOptions>,
    ) -> EngineResult<()> {
        self.hit("restart_container")
    }

    async fn remove_container(
        &self,
        _id: &str,
        _options: Option<RemoveContainerOptions>,
    ) -> EngineResult<()> {
        self.hit("remove_container")
    }

    async fn container_logs(
        &self,
        _id: &str,
        _options: Option<LogsOptions>,
    ) -> EngineResult<String> {
        self.hit("container_logs")?;
        Ok("stub log line\n".into())
    }

    async fn list_images(
        &self,
        _options: Option<ListImagesOptions>,
    ) -> EngineResult<Vec<ImageSummary>> {
        self.hit("list_images")?;
        Ok(self.images.clone())
    }

    async fn inspect_image(&self, id: &str) -> EngineResult<ImageInspect> {
        self.hit("inspect_image")?;
        self.image_inspect
            .clone()
            .ok_or_else(|| EngineError::NotFound(format!("No such image: {id}")))
    }

    async fn image_history(&self, _id: &str) -> EngineResult<Vec<HistoryResponseItem>> {
        self.hit("image_history")?;
        Ok(self.image_history.clone())
    }

    async fn pull_image(
        &self,
        _options: CreateImageOptions,
    ) -> EngineResult<Vec<CreateImageInfo>> {
        self.hit("pull_image")?;
        Ok(vec![])
    }

    async fn build_image(
        &self,
        _options: BuildImageOptions,
        _context_dir: &str,
    ) -> EngineResult<Vec<BuildInfo>> {
        self.hit("build_image")?;
        Ok(vec![
            BuildInfo {
                stream: Some("Step 1/1 : FROM scratch\n".into()),
                ..Default::default()
            },
            BuildInfo {
                stream: Some("Successfully built deadbeef\n".into()),
                ..Default::default()
            },
        ])
    }

    async fn remove_image(
        &self,
        _id: &str,
        _options: Option<RemoveImageOptions>,
    ) -> EngineResult<Vec<ImageDeleteResponseItem>> {
        self.hit("remove_image")?;
        Ok(vec![])
    }

    async fn search_images(
        &self,
        _options: SearchImagesOptions,
    ) -> EngineResult<Vec<ImageSearchResponseItem>> {
        self.hit("search_images")?;
        Ok(self.search_results.clone())
    }

    async fn prune_images(
        &self,
        _options: Option<PruneImagesOptions>,
    ) -> EngineResult<ImagePruneResponse> {
        self.hit("prune_images")?;
        Ok(ImagePruneResponse {
            images_deleted: None,
            space_reclaimed: Some(0),
        })
    }

    async fn list_volumes(
        &self,
        _options: Option<ListVolumesOptions>,
    ) -> EngineResult<VolumeListResponse> {
        self.hit("list_volumes")?;
        Ok(VolumeListResponse {
            volumes: Some(self.volumes.clone()),
            ..Default::default()
        })
    }

    async fn inspect_volume(&self, name: &str) -> EngineResult<Volume> {
        self.hit("inspect_volume")?;
        self.volume_inspect
            .clone()
            .ok_or_else(|| EngineError::NotFound(format!("No such volume: {name}")))
    }

    async fn create_volume(&self, options: VolumeCreateOptions) -> EngineResult<Volume> {
        self.hit("create_volume")?;
        let name = options.name.unwrap_or_else(|| "autogen0123".into());
        Ok(Volume {
            name: name.clone(),
            driver: options.driver.unwrap_or_else(|| "local".into()),
            mountpoint: format!("/var/lib/docker/volumes/{name}/_data"),
            labels: options.labels.unwrap_or_default(),
            options: options.driver_opts.unwrap_or_default(),
            ..Default::default()
        })
    }

    async fn remove_volume(
        &self,
        _name: &str,
        _options: Option<RemoveVolumeOptions>,
    ) -> EngineResult<()> {
        self.hit("remove_volume")
    }

    async fn prune_volumes(
        &self,
        _options: Option<PruneVolumesOptions>,
    ) -> EngineResult<VolumePruneResponse> {
        self.hit("prune_volumes")?;
        Ok(VolumePruneResponse {
            volumes_deleted: Some(vec![]),
            space_reclaimed: Some(0),
        })
    }

    async fn list_networks(
        &self,
        _options: Option<ListNetworksOptions>,
    ) -> EngineResult<Vec<Network>> {
        self.hit("list_networks")?;
        Ok(self.networks.clone())
    }

    async fn inspect_network(&self, id: &str) -> EngineResult<Network> {
        self.hit("inspect_network")?;
        self.network_inspect
            .clone()
            .ok_or_else(|| EngineError::NotFound(format!("network {id} not found")))
    }

    async fn create_network(
        &self,
        _request: NetworkCreateRequest,
    ) -> EngineResult<NetworkCreateResponse> {
        self.hit("create_network")?;
        Ok(NetworkCreateResponse {
            id: "fedcba9876543210fedc".into(),
            ..Default::default()
        })
    }

    async fn remove_network(&self, _id: &str) -> EngineResult<()> {
        self.hit("remove_network")
    }

    async fn connect_network(
        &self,
        _id: &str,
        _request: NetworkConnectRequest,
    ) -> EngineResult<()> {
        self.hit("connect_network")
    }

    async fn disconnect_network(
        &self,
        _id: &str,
        _request: NetworkDisconnectRequest,
    ) -> EngineResult<()> {
        self.hit("disconnect_network")
    }

    async fn prune_networks(
        &self,
        _options: Option<PruneNetworksOptions>,
    ) -> EngineResult<NetworkPruneResponse> {
        self.hit("prune_networks")?;
        Ok(NetworkPruneResponse {
            networks_deleted: Some(vec![]),
        })
    }

    async fn ping(&self) -> EngineResult<()> {
        self.hit("ping")
    }

    async fn version(&self) -> EngineResult<SystemVersion> {
        self.hit("version")?;
        Ok(self.version.clone())
    }

    async fn info(&self) -> EngineResult<SystemInfo> {
        self.hit("info")?;
        Ok(self.info.clone())
    }

    async fn disk_usage(&self) -> EngineResult<SystemDataUsageResponse> {
        self.hit("disk_usage")?;
        Ok(self.df.clone())
    }
}

// --- fixtures ---

pub fn running_container(id: &str, name: &str) -> ContainerSummary {
    ContainerSummary {
        id: Some(id.into()),
        names: Some(vec![format!("/{name}")]),
        image: Some("nginx:latest".into()),
        state: Some(ContainerSummaryStateEnum::RUNNING),
        created: Some(1_700_000_000),
        ..Default::default()
    }
}

pub fn inspected_container(
    id: &str,
    name: &str,
    status: ContainerStateStatusEnum,
) -> ContainerInspectResponse {
    ContainerInspectResponse {
        id: Some(id.into()),
        name: Some(format!("/{name}")),
        created: Some("2024-05-01T10:00:00.123456789Z".into()),
        state: Some(ContainerState {
            status: Some(status),
            started_at: Some("2024-05-01T10:00:01Z".into()),
            ..Default::default()
        }),
        config: Some(ContainerConfig {
            image: Some("nginx:latest".into()),
            env: Some(vec!["PATH=/usr/bin".into()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Test server over a stub engine; the Arc lets tests assert on call logs
/// after the requests ran.
pub fn test_app(stub: StubEngine) -> (TestServer, Arc<StubEngine>) {
    let engine = Arc::new(stub);
    let app = dockhand::routes::app(engine.clone(), Arc::new(HostRepo::new()), test_config());
    (TestServer::new(app).unwrap(), engine)
}
