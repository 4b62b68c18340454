// Canonical system shapes: engine version/info, disk usage, daemon status,
// aggregate stats, host info

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineVersion {
    pub version: String,
    pub api_version: String,
    pub min_api_version: String,
    pub git_commit: String,
    pub go_version: String,
    pub os: String,
    pub arch: String,
    pub kernel_version: String,
    pub build_time: String,
    pub experimental: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmSummary {
    pub node_id: String,
    pub node_addr: String,
    pub local_node_state: String,
    pub control_available: bool,
    pub error: String,
}

/// Installed engine plugins grouped by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSummary {
    pub volume: Vec<String>,
    pub network: Vec<String>,
    pub authorization: Vec<String>,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineInfo {
    pub containers: i64,
    pub containers_running: i64,
    pub containers_paused: i64,
    pub containers_stopped: i64,
    pub images: i64,
    pub server_version: String,
    pub storage_driver: String,
    pub logging_driver: String,
    pub cgroup_driver: String,
    pub cgroup_version: String,
    pub kernel_version: String,
    pub operating_system: String,
    pub os_type: String,
    pub architecture: String,
    pub ncpu: i64,
    pub mem_total: String,
    pub mem_total_bytes: i64,
    pub docker_root_dir: String,
    pub http_proxy: String,
    pub https_proxy: String,
    pub no_proxy: String,
    pub name: String,
    pub labels: Vec<String>,
    pub experimental_build: bool,
    pub live_restore_enabled: bool,
    pub default_runtime: String,
    pub runtimes: Vec<String>,
    pub swarm: SwarmSummary,
    pub plugins: PluginSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSection {
    pub count: usize,
    pub size: String,
    pub size_bytes: i64,
    pub reclaimable: String,
    pub reclaimable_bytes: i64,
}

/// Image disk usage also reports the layer bytes shared between images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUsageSection {
    pub count: usize,
    pub size: String,
    pub size_bytes: i64,
    pub shared_size: String,
    pub shared_size_bytes: i64,
    pub reclaimable: String,
    pub reclaimable_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageTotal {
    pub size: String,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskUsage {
    pub containers: UsageSection,
    pub images: ImageUsageSection,
    pub volumes: UsageSection,
    pub build_cache: UsageSection,
    pub total: UsageTotal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonStatus {
    pub status: String,
    pub ping: bool,
    pub server_version: String,
    pub api_version: String,
    pub containers_running: i64,
    pub containers_total: i64,
    pub images_total: i64,
    pub storage_driver: String,
    pub logging_driver: String,
    pub warnings: Vec<String>,
    pub experimental: bool,
    pub live_restore: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerTotals {
    pub total: i64,
    pub running: i64,
    pub stopped: i64,
    pub paused: i64,
    pub disk_usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTotals {
    pub total: i64,
    pub disk_usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeTotals {
    pub total: usize,
    pub disk_usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkTotals {
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemTotals {
    pub engine_version: String,
    pub storage_driver: String,
    pub total_disk_usage: String,
    pub cpu_count: i64,
    pub memory_total: String,
}

/// Aggregate of engine info + disk usage + network count; built
/// all-or-nothing, a failing constituent call fails the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    pub containers: ContainerTotals,
    pub images: ImageTotals,
    pub volumes: VolumeTotals,
    pub networks: NetworkTotals,
    pub system: SystemTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub engine: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostMemory {
    pub total: String,
    pub available: String,
    pub used: String,
    pub free: String,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostDisk {
    pub total: String,
    pub used: String,
    pub free: String,
    pub usage_percent: f64,
}

/// Host (non-engine) system information for GET /api/system/host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub platform: String,
    pub system: String,
    pub release: String,
    pub machine: String,
    pub cpu_count: usize,
    pub cpu_usage_percent: f64,
    pub memory: HostMemory,
    pub disk: HostDisk,
}
