// Request normalizers: validate and lower loosely-typed JSON payloads into
// the exact parameter shapes the engine port expects. Pure transformations;
// nothing here talks to the engine.

mod container;
mod image;
mod network;
mod volume;

pub use container::{
    BindingSpec, CommandSpec, ContainerCreateParams, CreateContainerRequest, EnvSpec, PortNumber,
    PortSpec, VolumeBindSpec, lower_container_create, normalize_binds, normalize_env,
    normalize_ports,
};
pub use image::{
    BuildImageRequest, BuildParams, PullImageRequest, PullParams, lower_build, lower_pull,
};
pub use network::{
    ConnectContainerRequest, CreateNetworkRequest, DisconnectContainerRequest, IpamConfigSpec,
    IpamSpec, lower_network_connect, lower_network_create, lower_network_disconnect,
};
pub use volume::{CreateVolumeRequest, lower_volume_create};

use crate::error::ApiError;

/// Required-field check shared by all normalizers: absent or empty means the
/// operation aborts before any engine call.
pub(crate) fn require(value: Option<String>, what: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{what} is required"))),
    }
}
