// System canonicalization: version, info, disk usage, daemon status,
// aggregate stats

use bollard::models::{SystemDataUsageResponse, SystemInfo, SystemVersion};

use super::format_size;
use crate::models::{
    ContainerTotals, DaemonStatus, DiskUsage, EngineInfo, EngineVersion, ImageTotals,
    ImageUsageSection, NetworkTotals, OverallStats, PluginSummary, SwarmSummary, SystemTotals,
    UsageSection, UsageTotal, VolumeTotals,
};

pub fn engine_version(v: SystemVersion) -> EngineVersion {
    EngineVersion {
        version: v.version.unwrap_or_default(),
        api_version: v.api_version.unwrap_or_default(),
        min_api_version: v.min_api_version.unwrap_or_default(),
        git_commit: v.git_commit.unwrap_or_default(),
        go_version: v.go_version.unwrap_or_default(),
        os: v.os.unwrap_or_default(),
        arch: v.arch.unwrap_or_default(),
        kernel_version: v.kernel_version.unwrap_or_default(),
        build_time: v.build_time.unwrap_or_default(),
        experimental: v.experimental.unwrap_or(false),
    }
}

fn swarm_summary(info: &SystemInfo) -> SwarmSummary {
    let swarm = info.swarm.clone().unwrap_or_default();
    SwarmSummary {
        node_id: swarm.node_id.unwrap_or_default(),
        node_addr: swarm.node_addr.unwrap_or_default(),
        local_node_state: swarm
            .local_node_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "inactive".into()),
        control_available: swarm.control_available.unwrap_or(false),
        error: swarm.error.unwrap_or_default(),
    }
}

fn plugin_summary(info: &SystemInfo) -> PluginSummary {
    let plugins = info.plugins.clone().unwrap_or_default();
    PluginSummary {
        volume: plugins.volume.unwrap_or_default(),
        network: plugins.network.unwrap_or_default(),
        authorization: plugins.authorization.unwrap_or_default(),
        log: plugins.log.unwrap_or_default(),
    }
}

pub fn engine_info(i: SystemInfo) -> EngineInfo {
    let swarm = swarm_summary(&i);
    let plugins = plugin_summary(&i);
    let mut runtimes: Vec<String> = i.runtimes.unwrap_or_default().into_keys().collect();
    runtimes.sort();
    let mem_total = i.mem_total.unwrap_or(0);
    EngineInfo {
        containers: i.containers.unwrap_or(0),
        containers_running: i.containers_running.unwrap_or(0),
        containers_paused: i.containers_paused.unwrap_or(0),
        containers_stopped: i.containers_stopped.unwrap_or(0),
        images: i.images.unwrap_or(0),
        server_version: i.server_version.unwrap_or_default(),
        storage_driver: i.driver.unwrap_or_default(),
        logging_driver: i.logging_driver.unwrap_or_default(),
        cgroup_driver: i.cgroup_driver.map(|d| d.to_string()).unwrap_or_default(),
        cgroup_version: i.cgroup_version.map(|v| v.to_string()).unwrap_or_default(),
        kernel_version: i.kernel_version.unwrap_or_default(),
        operating_system: i.operating_system.unwrap_or_default(),
        os_type: i.os_type.unwrap_or_default(),
        architecture: i.architecture.unwrap_or_default(),
        ncpu: i.ncpu.unwrap_or(0),
        mem_total: format_size(mem_total),
        mem_total_bytes: mem_total,
        docker_root_dir: i.docker_root_dir.unwrap_or_default(),
        http_proxy: i.http_proxy.unwrap_or_default(),
        https_proxy: i.https_proxy.unwrap_or_default(),
        no_proxy: i.no_proxy.unwrap_or_default(),
        name: i.name.unwrap_or_default(),
        labels: i.labels.unwrap_or_default(),
        experimental_build: i.experimental_build.unwrap_or(false),
        live_restore_enabled: i.live_restore_enabled.unwrap_or(false),
        default_runtime: i.default_runtime.unwrap_or_default(),
        runtimes,
        swarm,
        plugins,
    }
}

fn usage_section(count: usize, size: i64, reclaimable: i64) -> UsageSection {
    UsageSection {
        count,
        size: format_size(size),
        size_bytes: size,
        reclaimable: format_size(reclaimable),
        reclaimable_bytes: reclaimable,
    }
}

pub fn disk_usage(df: SystemDataUsageResponse) -> DiskUsage {
    let containers = df.containers.unwrap_or_default();
    let containers_size: i64 = containers
        .iter()
        .map(|c| c.size_rw.unwrap_or(0) + c.size_root_fs.unwrap_or(0))
        .sum();
    let containers_reclaimable: i64 = containers
        .iter()
        .filter(|c| c.state.as_ref().map(|s| s.to_string()).as_deref() != Some("running"))
        .map(|c| c.size_rw.unwrap_or(0))
        .sum();

    let images = df.images.unwrap_or_default();
    let images_size: i64 = images.iter().map(|i| i.size).sum();
    let images_shared: i64 = images.iter().map(|i| i.shared_size).sum();
    let images_reclaimable: i64 = images
        .iter()
        .filter(|i| i.containers == 0)
        .map(|i| i.size)
        .sum();

    let volumes = df.volumes.unwrap_or_default();
    let volume_size = |v: &bollard::models::Volume| {
        v.usage_data.as_ref().map(|u| u.size).unwrap_or(0)
    };
    let volumes_size: i64 = volumes.iter().map(volume_size).sum();
    let volumes_reclaimable: i64 = volumes
        .iter()
        .filter(|v| v.usage_data.as_ref().map(|u| u.ref_count).unwrap_or(0) == 0)
        .map(volume_size)
        .sum();

    let build_cache = df.build_cache.unwrap_or_default();
    let cache_size: i64 = build_cache.iter().map(|c| c.size.unwrap_or(0)).sum();

    let total = containers_size + images_size + volumes_size + cache_size;
    DiskUsage {
        containers: usage_section(containers.len(), containers_size, containers_reclaimable),
        images: ImageUsageSection {
            count: images.len(),
            size: format_size(images_size),
            size_bytes: images_size,
            shared_size: format_size(images_shared),
            shared_size_bytes: images_shared,
            reclaimable: format_size(images_reclaimable),
            reclaimable_bytes: images_reclaimable,
        },
        volumes: usage_section(volumes.len(), volumes_size, volumes_reclaimable),
        build_cache: usage_section(build_cache.len(), cache_size, cache_size),
        total: UsageTotal {
            size: format_size(total),
            size_bytes: total,
        },
    }
}

pub fn daemon_status(version: &SystemVersion, info: &SystemInfo) -> DaemonStatus {
    DaemonStatus {
        status: "running".into(),
        ping: true,
        server_version: version.version.clone().unwrap_or_default(),
        api_version: version.api_version.clone().unwrap_or_default(),
        containers_running: info.containers_running.unwrap_or(0),
        containers_total: info.containers.unwrap_or(0),
        images_total: info.images.unwrap_or(0),
        storage_driver: info.driver.clone().unwrap_or_default(),
        logging_driver: info.logging_driver.clone().unwrap_or_default(),
        warnings: info.warnings.clone().unwrap_or_default(),
        experimental: info.experimental_build.unwrap_or(false),
        live_restore: info.live_restore_enabled.unwrap_or(false),
    }
}

pub fn overall_stats(
    info: &SystemInfo,
    df: &SystemDataUsageResponse,
    network_count: usize,
) -> OverallStats {
    let containers_size: i64 = df
        .containers
        .iter()
        .flatten()
        .map(|c| c.size_rw.unwrap_or(0) + c.size_root_fs.unwrap_or(0))
        .sum();
    let images_size: i64 = df.images.iter().flatten().map(|i| i.size).sum();
    let volumes = df.volumes.as_deref().unwrap_or_default();
    let volumes_size: i64 = volumes
        .iter()
        .map(|v| v.usage_data.as_ref().map(|u| u.size).unwrap_or(0))
        .sum();

    OverallStats {
        containers: ContainerTotals {
            total: info.containers.unwrap_or(0),
            running: info.containers_running.unwrap_or(0),
            stopped: info.containers_stopped.unwrap_or(0),
            paused: info.containers_paused.unwrap_or(0),
            disk_usage: format_size(containers_size),
        },
        images: ImageTotals {
            total: info.images.unwrap_or(0),
            disk_usage: format_size(images_size),
        },
        volumes: VolumeTotals {
            total: volumes.len(),
            disk_usage: format_size(volumes_size),
        },
        networks: NetworkTotals {
            total: network_count,
        },
        system: SystemTotals {
            engine_version: info.server_version.clone().unwrap_or_default(),
            storage_driver: info.driver.clone().unwrap_or_default(),
            total_disk_usage: format_size(containers_size + images_size + volumes_size),
            cpu_count: info.ncpu.unwrap_or(0),
            memory_total: format_size(info.mem_total.unwrap_or(0)),
        },
    }
}
