// Volume canonicalization

use bollard::models::{SystemDataUsageResponse, Volume as EngineVolume};

use super::{format_size, iso_utc};
use crate::models::{Volume, VolumeUsage};

/// Usage for one volume, looked up in a disk-usage snapshot. Volumes the
/// engine did not size report `unknown`.
pub fn volume_usage_from_df(df: &SystemDataUsageResponse, name: &str) -> VolumeUsage {
    df.volumes
        .iter()
        .flatten()
        .find(|v| v.name == name)
        .and_then(|v| v.usage_data.as_ref())
        .map(|u| VolumeUsage {
            size: format_size(u.size),
            size_bytes: u.size,
            ref_count: u.ref_count,
        })
        .unwrap_or_else(VolumeUsage::unknown)
}

pub fn volume_from_engine(v: EngineVolume, usage: VolumeUsage) -> Volume {
    Volume {
        name: v.name,
        driver: v.driver,
        mountpoint: v.mountpoint,
        created: v.created_at.as_deref().map(iso_utc).unwrap_or_default(),
        scope: v
            .scope
            .map(|s| s.to_string())
            .unwrap_or_else(|| "local".into()),
        labels: v.labels,
        options: v.options,
        usage,
    }
}
