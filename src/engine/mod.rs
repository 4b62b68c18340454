// Engine client port: the narrow interface the facades consume from the
// container engine

mod docker;

pub use docker::DockerEngine;

use async_trait::async_trait;
use bollard::models::{
    BuildInfo, ContainerCreateBody, ContainerCreateResponse, ContainerInspectResponse,
    ContainerSummary, CreateImageInfo, HistoryResponseItem, ImageDeleteResponseItem, ImageInspect,
    ImagePruneResponse, ImageSearchResponseItem, ImageSummary, Network, NetworkConnectRequest,
    NetworkCreateRequest, NetworkCreateResponse, NetworkDisconnectRequest, NetworkPruneResponse,
    SystemDataUsageResponse, SystemInfo, SystemVersion, Volume, VolumeCreateOptions,
    VolumeListResponse, VolumePruneResponse,
};
use bollard::query_parameters::{
    BuildImageOptions, CreateContainerOptions, CreateImageOptions, ListContainersOptions,
    ListImagesOptions, ListNetworksOptions, ListVolumesOptions, LogsOptions, PruneImagesOptions,
    PruneNetworksOptions, PruneVolumesOptions, RemoveContainerOptions, RemoveImageOptions,
    RemoveVolumeOptions, RestartContainerOptions, SearchImagesOptions, StopContainerOptions,
};

/// Engine-stage failure. The daemon's not-found / conflict / unreachable
/// distinction is preserved here; the error mapper depends on it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// The daemon never produced a response (socket missing, connection
    /// refused, timeout).
    #[error("engine unreachable: {0}")]
    Unavailable(String),
    /// Any other daemon-reported error; message verbatim.
    #[error("{0}")]
    Api(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Synchronous RPC surface of the container engine, one method per engine
/// operation the facades need. Implementations must be safe for concurrent
/// use behind an `Arc`.
#[async_trait]
pub trait EnginePort: Send + Sync {
    // Containers
    async fn list_containers(
        &self,
        options: Option<ListContainersOptions>,
    ) -> EngineResult<Vec<ContainerSummary>>;
    async fn inspect_container(&self, id: &str) -> EngineResult<ContainerInspectResponse>;
    async fn create_container(
        &self,
        options: Option<CreateContainerOptions>,
        body: ContainerCreateBody,
    ) -> EngineResult<ContainerCreateResponse>;
    async fn start_container(&self, id: &str) -> EngineResult<()>;
    async fn stop_container(
        &self,
        id: &str,
        options: Option<StopContainerOptions>,
    ) -> EngineResult<()>;
    async fn restart_container(
        &self,
        id: &str,
        options: Option<RestartContainerOptions>,
    ) -> EngineResult<()>;
    async fn remove_container(
        &self,
        id: &str,
        options: Option<RemoveContainerOptions>,
    ) -> EngineResult<()>;
    /// Buffered log read; the tail is bounded by the options, never followed.
    async fn container_logs(&self, id: &str, options: Option<LogsOptions>)
    -> EngineResult<String>;

    // Images
    async fn list_images(
        &self,
        options: Option<ListImagesOptions>,
    ) -> EngineResult<Vec<ImageSummary>>;
    async fn inspect_image(&self, id: &str) -> EngineResult<ImageInspect>;
    async fn image_history(&self, id: &str) -> EngineResult<Vec<HistoryResponseItem>>;
    /// Registry pull, drained to completion.
    async fn pull_image(
        &self,
        options: CreateImageOptions,
    ) -> EngineResult<Vec<CreateImageInfo>>;
    /// Builds from a context directory, drained to completion.
    async fn build_image(
        &self,
        options: BuildImageOptions,
        context_dir: &str,
    ) -> EngineResult<Vec<BuildInfo>>;
    async fn remove_image(
        &self,
        id: &str,
        options: Option<RemoveImageOptions>,
    ) -> EngineResult<Vec<ImageDeleteResponseItem>>;
    async fn search_images(
        &self,
        options: SearchImagesOptions,
    ) -> EngineResult<Vec<ImageSearchResponseItem>>;
    async fn prune_images(
        &self,
        options: Option<PruneImagesOptions>,
    ) -> EngineResult<ImagePruneResponse>;

    // Volumes
    async fn list_volumes(
        &self,
        options: Option<ListVolumesOptions>,
    ) -> EngineResult<VolumeListResponse>;
    async fn inspect_volume(&self, name: &str) -> EngineResult<Volume>;
    async fn create_volume(&self, options: VolumeCreateOptions) -> EngineResult<Volume>;
    async fn remove_volume(
        &self,
        name: &str,
        options: Option<RemoveVolumeOptions>,
    ) -> EngineResult<()>;
    async fn prune_volumes(
        &self,
        options: Option<PruneVolumesOptions>,
    ) -> EngineResult<VolumePruneResponse>;

    // Networks
    async fn list_networks(
        &self,
        options: Option<ListNetworksOptions>,
    ) -> EngineResult<Vec<Network>>;
    async fn inspect_network(&self, id: &str) -> EngineResult<Network>;
    async fn create_network(
        &self,
        request: NetworkCreateRequest,
    ) -> EngineResult<NetworkCreateResponse>;
    async fn remove_network(&self, id: &str) -> EngineResult<()>;
    async fn connect_network(&self, id: &str, request: NetworkConnectRequest) -> EngineResult<()>;
    async fn disconnect_network(
        &self,
        id: &str,
        request: NetworkDisconnectRequest,
    ) -> EngineResult<()>;
    async fn prune_networks(
        &self,
        options: Option<PruneNetworksOptions>,
    ) -> EngineResult<NetworkPruneResponse>;

    // System
    async fn ping(&self) -> EngineResult<()>;
    async fn version(&self) -> EngineResult<SystemVersion>;
    async fn info(&self) -> EngineResult<SystemInfo>;
    async fn disk_usage(&self) -> EngineResult<SystemDataUsageResponse>;
}
