// Canonical network shapes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One address pool of a network's IPAM configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamPool {
    pub subnet: String,
    pub gateway: String,
    pub ip_range: String,
    pub aux_addresses: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamInfo {
    pub driver: String,
    pub options: HashMap<String, String>,
    pub config: Vec<IpamPool>,
}

/// A container endpoint attached to a network. Addresses are stripped of
/// their CIDR suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    pub id: String,
    pub name: String,
    pub ipv4_address: String,
    pub ipv6_address: String,
    pub mac_address: String,
    pub endpoint_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub created: String,
    pub internal: bool,
    pub attachable: bool,
    pub ingress: bool,
    pub ipam: IpamInfo,
    pub labels: HashMap<String, String>,
    pub containers: Vec<NetworkEndpoint>,
    pub options: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDetails {
    pub id: String,
    pub name: String,
    pub driver: String,
    pub scope: String,
    pub created: String,
    pub internal: bool,
    pub attachable: bool,
    pub ingress: bool,
    pub enable_ipv6: bool,
    pub ipam: IpamInfo,
    pub labels: HashMap<String, String>,
    pub options: HashMap<String, String>,
    pub containers: Vec<NetworkEndpoint>,
    pub config_from: String,
    pub config_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkCreateReceipt {
    pub message: String,
    pub id: String,
    pub name: String,
    pub driver: String,
    pub internal: bool,
    pub attachable: bool,
    pub labels: HashMap<String, String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRemoveReceipt {
    pub message: String,
    pub id: String,
    pub name: String,
    pub status: String,
}

/// Receipt for connect/disconnect of a container endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEndpointReceipt {
    pub message: String,
    pub network_id: String,
    pub network_name: String,
    pub container_id: String,
    pub container_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkPruneReceipt {
    pub message: String,
    pub networks_deleted: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_networks: usize,
    pub drivers: HashMap<String, usize>,
    pub scopes: HashMap<String, usize>,
    pub total_connected_containers: usize,
    pub system_networks: usize,
}
