// Image pull/build payload lowering

use bollard::query_parameters::{BuildImageOptions, CreateImageOptions};
use serde::Deserialize;

use super::require;
use crate::error::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullImageRequest {
    pub image: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PullParams {
    /// `name:tag` as resolved, for receipts and the follow-up inspect.
    pub reference: String,
    pub options: CreateImageOptions,
}

/// Resolve the pull target. An explicit `tag` field wins; otherwise a `:`
/// suffix in `image` is taken as the tag (a `/` after the colon means a
/// registry port, not a tag); otherwise `latest`.
pub fn lower_pull(req: PullImageRequest) -> Result<PullParams, ApiError> {
    let image = require(req.image, "image")?;
    let (name, tag) = match req.tag.filter(|t| !t.is_empty()) {
        Some(tag) => (image, tag),
        None => match image.rsplit_once(':') {
            Some((name, tag)) if !tag.contains('/') && !name.is_empty() => {
                (name.to_string(), tag.to_string())
            }
            _ => (image, "latest".to_string()),
        },
    };
    Ok(PullParams {
        reference: format!("{name}:{tag}"),
        options: CreateImageOptions {
            from_image: Some(name),
            tag: Some(tag),
            ..Default::default()
        },
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildImageRequest {
    pub path: Option<String>,
    pub tag: Option<String>,
    pub dockerfile: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildParams {
    pub context_dir: String,
    pub options: BuildImageOptions,
}

pub fn lower_build(req: BuildImageRequest) -> Result<BuildParams, ApiError> {
    let context_dir = require(req.path, "build path")?;
    let dockerfile = req
        .dockerfile
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Dockerfile".into());
    Ok(BuildParams {
        context_dir,
        options: BuildImageOptions {
            dockerfile,
            t: req.tag.filter(|t| !t.is_empty()),
            ..Default::default()
        },
    })
}
