// Response canonicalizer tests: timestamps, sizes, lifted shapes

mod common;

use bollard::models::{
    ContainerStateStatusEnum, ContainerSummary, ImageSummary, Network, NetworkContainer,
    SystemDataUsageResponse, Volume, VolumeUsageData,
};
use dockhand::canon::{
    container_details, container_from_summary, format_size, image_from_summary, iso_utc,
    iso_utc_from_unix, network_endpoints, network_from_engine, short_id, split_repo_tag,
    volume_from_engine, volume_usage_from_df,
};
use dockhand::models::VolumeUsage;

use common::{inspected_container, running_container};

#[test]
fn test_iso_utc_from_unix() {
    assert_eq!(iso_utc_from_unix(1_700_000_000), "2023-11-14T22:13:20Z");
    assert_eq!(iso_utc_from_unix(0), "1970-01-01T00:00:00Z");
}

#[test]
fn test_iso_utc_normalizes_offsets_and_precision() {
    assert_eq!(
        iso_utc("2024-05-01T10:00:00.123456789Z"),
        "2024-05-01T10:00:00Z"
    );
    assert_eq!(iso_utc("2024-05-01T12:00:00+02:00"), "2024-05-01T10:00:00Z");
    // Unparseable input passes through untouched.
    assert_eq!(iso_utc("not-a-time"), "not-a-time");
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(523), "523.0 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(1_048_576), "1.0 MB");
}

#[test]
fn test_short_id_strips_digest_prefix() {
    assert_eq!(
        short_id("sha256:0123456789abcdef0123456789abcdef"),
        "0123456789ab"
    );
    assert_eq!(short_id("<missing>"), "<missing>");
}

#[test]
fn test_container_from_summary() {
    let lifted = container_from_summary(running_container("0123456789abcdef0123", "web"));
    assert_eq!(lifted.id, "0123456789ab");
    assert_eq!(lifted.name, "web");
    assert_eq!(lifted.status, "running");
    assert_eq!(lifted.created, "2023-11-14T22:13:20Z");
    assert!(lifted.ports.is_empty());
    assert!(lifted.labels.is_empty());
}

#[test]
fn test_container_from_empty_summary_has_explicit_defaults() {
    let lifted = container_from_summary(ContainerSummary::default());
    assert_eq!(lifted.status, "");
    assert_eq!(lifted.created, "");
    assert!(lifted.ports.is_empty());
}

#[test]
fn test_list_canonicalization_preserves_order() {
    let summaries = vec![
        running_container("aaaaaaaaaaaaaaaaaaaa", "zeta"),
        running_container("bbbbbbbbbbbbbbbbbbbb", "alpha"),
    ];
    let lifted: Vec<_> = summaries.into_iter().map(container_from_summary).collect();
    assert_eq!(lifted[0].name, "zeta");
    assert_eq!(lifted[1].name, "alpha");
}

#[test]
fn test_container_details_lifting() {
    let details = container_details(inspected_container(
        "0123456789abcdef0123",
        "web",
        ContainerStateStatusEnum::RUNNING,
    ));
    assert_eq!(details.name, "web");
    assert_eq!(details.status, "running");
    assert_eq!(details.created, "2024-05-01T10:00:00Z");
    assert_eq!(details.started.as_deref(), Some("2024-05-01T10:00:01Z"));
    assert_eq!(details.environment, vec!["PATH=/usr/bin"]);
    assert_eq!(details.image, "nginx:latest");
}

#[test]
fn test_image_summary_untagged_reports_none_pair() {
    let img = ImageSummary {
        id: "sha256:0123456789abcdef0123456789abcdef".into(),
        created: 1_700_000_000,
        size: 1536,
        ..Default::default()
    };
    let lifted = image_from_summary(img);
    assert_eq!(lifted.id, "0123456789ab");
    assert_eq!(lifted.tags, vec!["<none>:<none>"]);
    assert_eq!(lifted.repository, "<none>");
    assert_eq!(lifted.tag, "<none>");
    assert_eq!(lifted.size, "1.5 KB");
    assert_eq!(lifted.size_bytes, 1536);
}

#[test]
fn test_split_repo_tag() {
    assert_eq!(
        split_repo_tag("nginx:alpine"),
        ("nginx".into(), "alpine".into())
    );
    assert_eq!(
        split_repo_tag("localhost:5000/app"),
        ("localhost:5000/app".into(), "latest".into())
    );
    assert_eq!(split_repo_tag("nginx"), ("nginx".into(), "latest".into()));
}

#[test]
fn test_network_endpoints_sorted_and_stripped() {
    let mut containers = std::collections::HashMap::new();
    containers.insert(
        "bbbbbbbbbbbbbbbbbbbb".to_string(),
        NetworkContainer {
            name: Some("late".into()),
            ipv4_address: Some("172.17.0.3/16".into()),
            ..Default::default()
        },
    );
    containers.insert(
        "aaaaaaaaaaaaaaaaaaaa".to_string(),
        NetworkContainer {
            name: Some("early".into()),
            ipv4_address: Some("172.17.0.2/16".into()),
            ..Default::default()
        },
    );
    let endpoints = network_endpoints(Some(containers));
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].name, "early");
    assert_eq!(endpoints[0].ipv4_address, "172.17.0.2");
    assert_eq!(endpoints[1].name, "late");
}

#[test]
fn test_network_from_engine_defaults() {
    let lifted = network_from_engine(Network::default());
    assert_eq!(lifted.scope, "local");
    assert_eq!(lifted.ipam.driver, "default");
    assert!(lifted.ipam.config.is_empty());
    assert!(!lifted.internal);
}

#[test]
fn test_volume_usage_joined_from_disk_usage() {
    let df = SystemDataUsageResponse {
        volumes: Some(vec![Volume {
            name: "data".into(),
            usage_data: Some(VolumeUsageData {
                size: 2048,
                ref_count: 1,
            }),
            ..Default::default()
        }]),
        ..Default::default()
    };
    let usage = volume_usage_from_df(&df, "data");
    assert_eq!(usage.size_bytes, 2048);
    assert_eq!(usage.ref_count, 1);

    let missing = volume_usage_from_df(&df, "other");
    assert_eq!(missing, VolumeUsage::unknown());
}

#[test]
fn test_volume_from_engine() {
    let volume = Volume {
        name: "data".into(),
        driver: "local".into(),
        mountpoint: "/var/lib/docker/volumes/data/_data".into(),
        created_at: Some("2024-05-01T12:00:00+02:00".into()),
        ..Default::default()
    };
    let lifted = volume_from_engine(volume, VolumeUsage::unknown());
    assert_eq!(lifted.name, "data");
    assert_eq!(lifted.created, "2024-05-01T10:00:00Z");
    assert_eq!(lifted.scope, "local");
}
