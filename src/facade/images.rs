// Image operations

use std::collections::HashMap;
use std::sync::Arc;

use bollard::query_parameters::{
    ListImagesOptions, PruneImagesOptions, RemoveImageOptions, SearchImagesOptions,
};

use crate::canon::{self, format_size, short_id};
use crate::engine::EnginePort;
use crate::error::ApiError;
use crate::models::{
    Image, ImageBuildReceipt, ImageDetails, ImagePruneReceipt, ImagePullReceipt,
    ImageRemoveReceipt, ImageSearchResult,
};
use crate::normalize::{BuildImageRequest, PullImageRequest, lower_build, lower_pull, require};

const BUILD_LOG_TAIL: usize = 10;

#[derive(Clone)]
pub struct ImageFacade {
    engine: Arc<dyn EnginePort>,
}

impl ImageFacade {
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    pub async fn list(&self, all: bool) -> Result<Vec<Image>, ApiError> {
        let options = ListImagesOptions {
            all,
            ..Default::default()
        };
        let images = self.engine.list_images(Some(options)).await?;
        Ok(images.into_iter().map(canon::image_from_summary).collect())
    }

    pub async fn get(&self, id: &str) -> Result<ImageDetails, ApiError> {
        let inspected = self.engine.inspect_image(id).await?;
        // Layer history is best-effort decoration, not worth failing the
        // whole inspect over.
        let history = self.engine.image_history(id).await.unwrap_or_default();
        Ok(canon::image_details(inspected, history))
    }

    pub async fn pull(&self, req: PullImageRequest) -> Result<ImagePullReceipt, ApiError> {
        let params = lower_pull(req)?;
        let progress = self.engine.pull_image(params.options).await?;
        // The registry reports some failures inside the stream with a 200.
        if let Some(err) = progress.into_iter().find_map(|p| p.error) {
            return Err(ApiError::engine(err));
        }
        let inspected = self.engine.inspect_image(&params.reference).await?;
        Ok(ImagePullReceipt {
            message: format!("Image '{}' pulled successfully", params.reference),
            id: short_id(&inspected.id.unwrap_or_default()),
            tags: inspected.repo_tags.unwrap_or_default(),
            size: format_size(inspected.size.unwrap_or(0)),
            status: "pulled".into(),
        })
    }

    pub async fn build(&self, req: BuildImageRequest) -> Result<ImageBuildReceipt, ApiError> {
        let params = lower_build(req)?;
        let tag = params.options.t.clone();
        let infos = self
            .engine
            .build_image(params.options, &params.context_dir)
            .await?;
        if let Some(err) = infos.iter().find_map(|i| i.error.clone()) {
            return Err(ApiError::engine(err));
        }
        let id = infos
            .iter()
            .rev()
            .find_map(|i| i.aux.as_ref().and_then(|a| a.id.clone()))
            .map(|id| short_id(&id))
            .unwrap_or_default();
        let mut logs: Vec<String> = infos
            .into_iter()
            .filter_map(|i| i.stream)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let tail = logs.len().saturating_sub(BUILD_LOG_TAIL);
        Ok(ImageBuildReceipt {
            message: "Image built successfully".into(),
            id,
            tags: tag.into_iter().collect(),
            build_logs: logs.split_off(tail),
            status: "built".into(),
        })
    }

    pub async fn remove(
        &self,
        id: &str,
        force: bool,
        no_prune: bool,
    ) -> Result<ImageRemoveReceipt, ApiError> {
        let inspected = self.engine.inspect_image(id).await?;
        let tags = inspected
            .repo_tags
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| vec!["<none>:<none>".into()]);
        let options = RemoveImageOptions {
            force,
            noprune: no_prune,
            ..Default::default()
        };
        self.engine.remove_image(id, Some(options)).await?;
        Ok(ImageRemoveReceipt {
            message: "Image removed successfully".into(),
            id: id.to_string(),
            tags,
            status: "removed".into(),
        })
    }

    pub async fn search(
        &self,
        term: Option<String>,
        limit: i32,
    ) -> Result<Vec<ImageSearchResult>, ApiError> {
        let term = require(term, "search term")?;
        let options = SearchImagesOptions {
            term,
            limit: Some(limit),
            ..Default::default()
        };
        let results = self.engine.search_images(options).await?;
        Ok(results
            .into_iter()
            .map(|r| ImageSearchResult {
                name: r.name.unwrap_or_default(),
                description: r.description.unwrap_or_default(),
                stars: r.star_count.unwrap_or(0),
                official: r.is_official.unwrap_or(false),
                automated: r.is_automated.unwrap_or(false),
            })
            .collect())
    }

    pub async fn prune(&self, dangling_only: bool) -> Result<ImagePruneReceipt, ApiError> {
        let options = dangling_only.then(|| {
            let mut filters = HashMap::new();
            filters.insert("dangling".to_string(), vec!["true".to_string()]);
            PruneImagesOptions {
                filters: Some(filters),
                ..Default::default()
            }
        });
        let result = self.engine.prune_images(options).await?;
        let deleted = result
            .images_deleted
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.deleted.or(item.untagged))
            .collect();
        let reclaimed = result.space_reclaimed.unwrap_or(0);
        Ok(ImagePruneReceipt {
            message: "Image pruning completed".into(),
            images_deleted: deleted,
            space_reclaimed: format_size(reclaimed),
            space_reclaimed_bytes: reclaimed,
        })
    }
}
