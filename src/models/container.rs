// Canonical container shapes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One host-side binding of a published container port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBindingInfo {
    pub host_ip: String,
    pub host_port: String,
}

/// Container list entry. Ids are shortened to 12 characters; an unpublished
/// exposed port maps to an empty binding list, never a missing key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub created: String,
    pub ports: HashMap<String, Vec<PortBindingInfo>>,
    pub labels: HashMap<String, String>,
}

/// Full inspect view of one container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDetails {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub created: String,
    pub started: Option<String>,
    pub finished: Option<String>,
    pub exit_code: Option<i64>,
    pub ports: HashMap<String, Vec<PortBindingInfo>>,
    pub networks: Vec<String>,
    pub mounts: Vec<String>,
    pub environment: Vec<String>,
    pub labels: HashMap<String, String>,
    pub command: Option<Vec<String>>,
    pub working_dir: String,
    pub restart_policy: String,
}

/// Receipt for a lifecycle action (start/stop/restart/remove).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerActionReceipt {
    pub message: String,
    pub id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerCreateReceipt {
    pub message: String,
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
}

/// Buffered log tail of one container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerLogs {
    pub id: String,
    pub name: String,
    pub logs: String,
    pub tail: u32,
    pub timestamp: Option<String>,
}
