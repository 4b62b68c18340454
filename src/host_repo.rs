// Host system stats via sysinfo (non-engine data for /api/system/host)

use std::sync::Arc;
use sysinfo::{Disks, System};

use crate::canon::format_size;
use crate::models::{HostDisk, HostInfo, HostMemory};

pub struct HostRepo {
    sys: Arc<std::sync::Mutex<System>>,
}

impl Default for HostRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
        }
    }

    pub async fn host_info(&self) -> anyhow::Result<HostInfo> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_all();
            sys.refresh_memory();

            let os_name = System::name().unwrap_or_else(|| "Unknown".into());
            let platform = System::long_os_version().unwrap_or_else(|| os_name.clone());
            let release = System::kernel_version().unwrap_or_default();

            let total = sys.total_memory();
            let available = sys.available_memory();
            let used = total.saturating_sub(available);
            let free = sys.free_memory();
            let mem_percent = if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            };

            // Root filesystem, or the largest disk when nothing mounts at /.
            let disks = Disks::new_with_refreshed_list();
            let root = disks
                .list()
                .iter()
                .find(|d| d.mount_point() == std::path::Path::new("/"))
                .or_else(|| disks.list().iter().max_by_key(|d| d.total_space()));
            let (disk_total, disk_available) = root
                .map(|d| (d.total_space(), d.available_space()))
                .unwrap_or((0, 0));
            let disk_used = disk_total.saturating_sub(disk_available);
            let disk_percent = if disk_total > 0 {
                (disk_used as f64 / disk_total as f64) * 100.0
            } else {
                0.0
            };

            Ok(HostInfo {
                platform,
                system: os_name,
                release,
                machine: std::env::consts::ARCH.to_string(),
                cpu_count: sys.cpus().len(),
                cpu_usage_percent: (sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
                memory: HostMemory {
                    total: format_size(total as i64),
                    available: format_size(available as i64),
                    used: format_size(used as i64),
                    free: format_size(free as i64),
                    usage_percent: mem_percent,
                },
                disk: HostDisk {
                    total: format_size(disk_total as i64),
                    used: format_size(disk_used as i64),
                    free: format_size(disk_available as i64),
                    usage_percent: disk_percent,
                },
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}
