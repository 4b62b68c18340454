// Canonical volume shapes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Disk usage of one volume, joined from the engine's disk-usage call.
/// `size_bytes` is -1 when the engine did not report a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeUsage {
    pub size: String,
    pub size_bytes: i64,
    pub ref_count: i64,
}

impl VolumeUsage {
    pub fn unknown() -> Self {
        Self {
            size: "unknown".into(),
            size_bytes: -1,
            ref_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub created: String,
    pub scope: String,
    pub labels: HashMap<String, String>,
    pub options: HashMap<String, String>,
    pub usage: VolumeUsage,
}

/// A container that mounts a given volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConsumer {
    pub id: String,
    pub name: String,
    pub status: String,
    pub mount_destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDetails {
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub created: String,
    pub scope: String,
    pub labels: HashMap<String, String>,
    pub options: HashMap<String, String>,
    pub usage: VolumeUsage,
    pub containers_using: Vec<VolumeConsumer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeCreateReceipt {
    pub message: String,
    pub name: String,
    pub driver: String,
    pub mountpoint: String,
    pub created: String,
    pub labels: HashMap<String, String>,
    pub options: HashMap<String, String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRemoveReceipt {
    pub message: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumePruneReceipt {
    pub message: String,
    pub volumes_deleted: Vec<String>,
    pub space_reclaimed: String,
    pub space_reclaimed_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeStats {
    pub total_volumes: usize,
    pub total_size: String,
    pub total_size_bytes: i64,
    pub drivers: HashMap<String, usize>,
    pub unused_volumes: usize,
}
