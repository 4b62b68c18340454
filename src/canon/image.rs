// Image canonicalization

use bollard::models::{HistoryResponseItem, ImageInspect, ImageSummary};

use super::{format_size, iso_utc, iso_utc_from_unix, short_id};
use crate::models::{Image, ImageConfigInfo, ImageDetails, ImageLayer};

const UNTAGGED: &str = "<none>:<none>";
const HISTORY_LAYERS: usize = 5;
const CREATED_BY_MAX: usize = 100;

/// Split an image reference into repository and tag. A `/` after the last
/// colon means a registry port, not a tag.
pub fn split_repo_tag(reference: &str) -> (String, String) {
    match reference.rsplit_once(':') {
        Some((repo, tag)) if !tag.contains('/') && !repo.is_empty() => {
            (repo.to_string(), tag.to_string())
        }
        _ => (reference.to_string(), "latest".to_string()),
    }
}

pub fn image_from_summary(img: ImageSummary) -> Image {
    let tags = if img.repo_tags.is_empty() {
        vec![UNTAGGED.to_string()]
    } else {
        img.repo_tags
    };
    let (repository, tag) = split_repo_tag(&tags[0]);
    Image {
        id: short_id(&img.id),
        tags,
        repository,
        tag,
        created: iso_utc_from_unix(img.created),
        size: format_size(img.size),
        size_bytes: img.size,
        labels: img.labels,
        containers: img.containers,
    }
}

fn image_layer(layer: HistoryResponseItem) -> ImageLayer {
    let created_by = if layer.created_by.chars().count() > CREATED_BY_MAX {
        let head: String = layer.created_by.chars().take(CREATED_BY_MAX).collect();
        format!("{head}...")
    } else {
        layer.created_by
    };
    ImageLayer {
        id: short_id(&layer.id),
        created: iso_utc_from_unix(layer.created),
        created_by,
        size: format_size(layer.size),
        size_bytes: layer.size,
    }
}

pub fn image_details(img: ImageInspect, history: Vec<HistoryResponseItem>) -> ImageDetails {
    let config = img.config.unwrap_or_default();
    let mut exposed_ports: Vec<String> =
        config.exposed_ports.unwrap_or_default().into_keys().collect();
    exposed_ports.sort();
    let mut volumes: Vec<String> = config.volumes.unwrap_or_default().into_keys().collect();
    volumes.sort();

    let size = img.size.unwrap_or(0);
    ImageDetails {
        id: img.id.unwrap_or_default(),
        tags: img.repo_tags.unwrap_or_default(),
        created: img.created.as_deref().map(iso_utc).unwrap_or_default(),
        size: format_size(size),
        size_bytes: size,
        architecture: img.architecture.unwrap_or_default(),
        os: img.os.unwrap_or_default(),
        docker_version: img.docker_version.unwrap_or_default(),
        author: img.author.unwrap_or_default(),
        config: ImageConfigInfo {
            cmd: config.cmd,
            entrypoint: config.entrypoint,
            env: config.env.unwrap_or_default(),
            exposed_ports,
            labels: config.labels.unwrap_or_default(),
            user: config.user.unwrap_or_default(),
            working_dir: config.working_dir.unwrap_or_default(),
            volumes,
        },
        history: history
            .into_iter()
            .take(HISTORY_LAYERS)
            .map(image_layer)
            .collect(),
    }
}
