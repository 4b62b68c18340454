// Canonical image shapes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image list entry. Untagged (dangling) images report `<none>:<none>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub tags: Vec<String>,
    pub repository: String,
    pub tag: String,
    pub created: String,
    pub size: String,
    pub size_bytes: i64,
    pub labels: HashMap<String, String>,
    pub containers: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfigInfo {
    pub cmd: Option<Vec<String>>,
    pub entrypoint: Option<Vec<String>>,
    pub env: Vec<String>,
    pub exposed_ports: Vec<String>,
    pub labels: HashMap<String, String>,
    pub user: String,
    pub working_dir: String,
    pub volumes: Vec<String>,
}

/// One layer of an image's history; `created_by` is truncated at 100 chars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageLayer {
    pub id: String,
    pub created: String,
    pub created_by: String,
    pub size: String,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDetails {
    pub id: String,
    pub tags: Vec<String>,
    pub created: String,
    pub size: String,
    pub size_bytes: i64,
    pub architecture: String,
    pub os: String,
    pub docker_version: String,
    pub author: String,
    pub config: ImageConfigInfo,
    pub history: Vec<ImageLayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePullReceipt {
    pub message: String,
    pub id: String,
    pub tags: Vec<String>,
    pub size: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBuildReceipt {
    pub message: String,
    pub id: String,
    pub tags: Vec<String>,
    pub build_logs: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRemoveReceipt {
    pub message: String,
    pub id: String,
    pub tags: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearchResult {
    pub name: String,
    pub description: String,
    pub stars: i64,
    pub official: bool,
    pub automated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePruneReceipt {
    pub message: String,
    pub images_deleted: Vec<String>,
    pub space_reclaimed: String,
    pub space_reclaimed_bytes: i64,
}
