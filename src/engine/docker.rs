// Production engine port backed by the local Docker daemon via bollard

use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{
    BuildInfo, ContainerCreateBody, ContainerCreateResponse, ContainerInspectResponse,
    ContainerSummary, CreateImageInfo, HistoryResponseItem, ImageDeleteResponseItem, ImageInspect,
    ImagePruneResponse, ImageSearchResponseItem, ImageSummary, Network, NetworkConnectRequest,
    NetworkCreateRequest, NetworkCreateResponse, NetworkDisconnectRequest, NetworkPruneResponse,
    SystemDataUsageResponse, SystemInfo, SystemVersion, Volume, VolumeCreateOptions,
    VolumeListResponse, VolumePruneResponse,
};
use bollard::query_parameters::{
    BuildImageOptions, CreateContainerOptions, CreateImageOptions, InspectContainerOptions,
    InspectNetworkOptions, ListContainersOptions, ListImagesOptions, ListNetworksOptions,
    ListVolumesOptions, LogsOptions, PruneImagesOptions, PruneNetworksOptions, PruneVolumesOptions,
    RemoveContainerOptions, RemoveImageOptions, RemoveVolumeOptions, RestartContainerOptions,
    SearchImagesOptions, StartContainerOptions, StopContainerOptions,
};
use futures_util::{Stream, StreamExt};
use tracing::warn;

use super::{EngineError, EnginePort, EngineResult};

pub struct DockerEngine {
    docker: Docker,
}

impl DockerEngine {
    pub fn connect() -> anyhow::Result<Self> {
        let docker = Docker::connect_with_unix_defaults()?;
        Ok(Self { docker })
    }
}

/// Classify a bollard failure. Only a daemon-reported status carries
/// semantics worth keeping (404 not-found, 409 conflict, 304 redundant
/// lifecycle transition); anything else means the daemon never produced a
/// usable response.
fn map_err(err: bollard::errors::Error) -> EngineError {
    match err {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } => match status_code {
            404 => EngineError::NotFound(message),
            304 | 409 => EngineError::Conflict(message),
            _ => EngineError::Api(message),
        },
        other => EngineError::Unavailable(other.to_string()),
    }
}

/// Drain an engine stream into a buffered Vec, failing on the first error
/// item.
async fn drain<T>(
    mut stream: impl Stream<Item = Result<T, bollard::errors::Error>> + Unpin,
) -> EngineResult<Vec<T>> {
    let mut items = Vec::new();
    while let Some(item) = stream.next().await {
        items.push(item.map_err(map_err)?);
    }
    Ok(items)
}

/// Pack a build-context directory into an uncompressed tar archive.
fn tar_directory(dir: &str) -> std::io::Result<Vec<u8>> {
    let mut builder = tar::Builder::new(Vec::new());
    builder.append_dir_all(".", dir)?;
    builder.into_inner()
}

#[async_trait]
impl EnginePort for DockerEngine {
    async fn list_containers(
        &self,
        options: Option<ListContainersOptions>,
    ) -> EngineResult<Vec<ContainerSummary>> {
        self.docker.list_containers(options).await.map_err(map_err)
    }

    async fn inspect_container(&self, id: &str) -> EngineResult<ContainerInspectResponse> {
        self.docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(map_err)
    }

    async fn create_container(
        &self,
        options: Option<CreateContainerOptions>,
        body: ContainerCreateBody,
    ) -> EngineResult<ContainerCreateResponse> {
        self.docker
            .create_container(options, body)
            .await
            .map_err(map_err)
    }

    async fn start_container(&self, id: &str) -> EngineResult<()> {
        self.docker
            .start_container(id, None::<StartContainerOptions>)
            .await
            .map_err(map_err)
    }

    async fn stop_container(
        &self,
        id: &str,
        options: Option<StopContainerOptions>,
    ) -> EngineResult<()> {
        self.docker
            .stop_container(id, options)
            .await
            .map_err(map_err)
    }

    async fn restart_container(
        &self,
        id: &str,
        options: Option<RestartContainerOptions>,
    ) -> EngineResult<()> {
        self.docker
            .restart_container(id, options)
            .await
            .map_err(map_err)
    }

    async fn remove_container(
        &self,
        id: &str,
        options: Option<RemoveContainerOptions>,
    ) -> EngineResult<()> {
        self.docker
            .remove_container(id, options)
            .await
            .map_err(map_err)
    }

    async fn container_logs(
        &self,
        id: &str,
        options: Option<LogsOptions>,
    ) -> EngineResult<String> {
        let mut stream = self.docker.logs(id, options);
        let mut out = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_err)?;
            out.push_str(&String::from_utf8_lossy(&chunk.into_bytes()));
        }
        Ok(out)
    }

    async fn list_images(
        &self,
        options: Option<ListImagesOptions>,
    ) -> EngineResult<Vec<ImageSummary>> {
        self.docker.list_images(options).await.map_err(map_err)
    }

    async fn inspect_image(&self, id: &str) -> EngineResult<ImageInspect> {
        self.docker.inspect_image(id).await.map_err(map_err)
    }

    async fn image_history(&self, id: &str) -> EngineResult<Vec<HistoryResponseItem>> {
        self.docker.image_history(id).await.map_err(map_err)
    }

    async fn pull_image(
        &self,
        options: CreateImageOptions,
    ) -> EngineResult<Vec<CreateImageInfo>> {
        let stream = self.docker.create_image(Some(options), None, None);
        drain(stream).await
    }

    async fn build_image(
        &self,
        options: BuildImageOptions,
        context_dir: &str,
    ) -> EngineResult<Vec<BuildInfo>> {
        let dir = context_dir.to_string();
        let archive = tokio::task::spawn_blocking(move || tar_directory(&dir))
            .await
            .map_err(|e| EngineError::Api(format!("build context task failed: {e}")))?
            .map_err(|e| EngineError::Api(format!("failed to read build context: {e}")))?;

        let stream = self
            .docker
            .build_image(options, None, Some(bollard::body_full(archive.into())));
        drain(stream).await
    }

    async fn remove_image(
        &self,
        id: &str,
        options: Option<RemoveImageOptions>,
    ) -> EngineResult<Vec<ImageDeleteResponseItem>> {
        self.docker
            .remove_image(id, options, None)
            .await
            .map_err(map_err)
    }

    async fn search_images(
        &self,
        options: SearchImagesOptions,
    ) -> EngineResult<Vec<ImageSearchResponseItem>> {
        self.docker.search_images(options).await.map_err(map_err)
    }

    async fn prune_images(
        &self,
        options: Option<PruneImagesOptions>,
    ) -> EngineResult<ImagePruneResponse> {
        self.docker.prune_images(options).await.map_err(map_err)
    }

    async fn list_volumes(
        &self,
        options: Option<ListVolumesOptions>,
    ) -> EngineResult<VolumeListResponse> {
        self.docker.list_volumes(options).await.map_err(map_err)
    }

    async fn inspect_volume(&self, name: &str) -> EngineResult<Volume> {
        self.docker.inspect_volume(name).await.map_err(map_err)
    }

    async fn create_volume(&self, options: VolumeCreateOptions) -> EngineResult<Volume> {
        self.docker.create_volume(options).await.map_err(map_err)
    }

    async fn remove_volume(
        &self,
        name: &str,
        options: Option<RemoveVolumeOptions>,
    ) -> EngineResult<()> {
        self.docker
            .remove_volume(name, options)
            .await
            .map_err(map_err)
    }

    async fn prune_volumes(
        &self,
        options: Option<PruneVolumesOptions>,
    ) -> EngineResult<VolumePruneResponse> {
        self.docker.prune_volumes(options).await.map_err(map_err)
    }

    async fn list_networks(
        &self,
        options: Option<ListNetworksOptions>,
    ) -> EngineResult<Vec<Network>> {
        self.docker.list_networks(options).await.map_err(map_err)
    }

    async fn inspect_network(&self, id: &str) -> EngineResult<Network> {
        self.docker
            .inspect_network(id, None::<InspectNetworkOptions>)
            .await
            .map_err(map_err)
    }

    async fn create_network(
        &self,
        request: NetworkCreateRequest,
    ) -> EngineResult<NetworkCreateResponse> {
        self.docker.create_network(request).await.map_err(map_err)
    }

    async fn remove_network(&self, id: &str) -> EngineResult<()> {
        self.docker.remove_network(id).await.map_err(map_err)
    }

    async fn connect_network(&self, id: &str, request: NetworkConnectRequest) -> EngineResult<()> {
        self.docker
            .connect_network(id, request)
            .await
            .map_err(map_err)
    }

    async fn disconnect_network(
        &self,
        id: &str,
        request: NetworkDisconnectRequest,
    ) -> EngineResult<()> {
        self.docker
            .disconnect_network(id, request)
            .await
            .map_err(map_err)
    }

    async fn prune_networks(
        &self,
        options: Option<PruneNetworksOptions>,
    ) -> EngineResult<NetworkPruneResponse> {
        self.docker.prune_networks(options).await.map_err(map_err)
    }

    async fn ping(&self) -> EngineResult<()> {
        match self.docker.ping().await {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Engine ping failed: {}", e);
                Err(map_err(e))
            }
        }
    }

    async fn version(&self) -> EngineResult<SystemVersion> {
        self.docker.version().await.map_err(map_err)
    }

    async fn info(&self) -> EngineResult<SystemInfo> {
        self.docker.info().await.map_err(map_err)
    }

    async fn disk_usage(&self) -> EngineResult<SystemDataUsageResponse> {
        self.docker.df(None).await.map_err(map_err)
    }
}
