// Volume create payload lowering

use std::collections::HashMap;

use bollard::models::VolumeCreateOptions;
use serde::Deserialize;

/// Volume create accepts an entirely empty body: the engine assigns a name
/// and the driver defaults to `local`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVolumeRequest {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub options: Option<HashMap<String, String>>,
}

pub fn lower_volume_create(req: CreateVolumeRequest) -> VolumeCreateOptions {
    VolumeCreateOptions {
        name: req.name.filter(|n| !n.is_empty()),
        driver: Some(
            req.driver
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "local".into()),
        ),
        driver_opts: req.options,
        labels: req.labels,
        ..Default::default()
    }
}
