// Response canonicalizers: lift engine-native objects into the stable
// shapes in `models`. Deterministic field extraction; absent engine data
// becomes an explicit empty value, never a missing key.

mod container;
mod image;
mod network;
mod system;
mod volume;

pub use container::{container_details, container_from_summary};
pub use image::{image_details, image_from_summary, split_repo_tag};
pub use network::{network_details, network_endpoints, network_from_engine};
pub use system::{daemon_status, disk_usage, engine_info, engine_version, overall_stats};
pub use volume::{volume_from_engine, volume_usage_from_df};

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a unix timestamp as ISO-8601 UTC (`2024-01-01T00:00:00Z`).
pub fn iso_utc_from_unix(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Re-render an engine timestamp string as ISO-8601 UTC, dropping
/// sub-second precision. An unparseable value passes through untouched.
pub fn iso_utc(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|_| raw.to_string())
}

/// Human-readable size, engine-CLI style: `0 B`, `1.5 KB`, `2.0 MB`.
pub fn format_size(bytes: i64) -> String {
    if bytes == 0 {
        return "0 B".into();
    }
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} PB")
}

/// First 12 characters of an id, `sha256:` prefix stripped.
pub fn short_id(id: &str) -> String {
    id.trim_start_matches("sha256:").chars().take(12).collect()
}
