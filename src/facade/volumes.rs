// Volume operations

use std::collections::HashMap;
use std::sync::Arc;

use bollard::query_parameters::{ListContainersOptions, RemoveVolumeOptions};

use crate::canon::{self, format_size, short_id};
use crate::engine::EnginePort;
use crate::error::ApiError;
use crate::models::{
    Volume, VolumeConsumer, VolumeCreateReceipt, VolumeDetails, VolumePruneReceipt,
    VolumeRemoveReceipt, VolumeStats,
};
use crate::normalize::{CreateVolumeRequest, lower_volume_create};

#[derive(Clone)]
pub struct VolumeFacade {
    engine: Arc<dyn EnginePort>,
}

impl VolumeFacade {
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    /// Containers (in any state) that mount the named volume.
    async fn consumers(&self, name: &str) -> Result<Vec<VolumeConsumer>, ApiError> {
        let options = ListContainersOptions {
            all: true,
            ..Default::default()
        };
        let containers = self.engine.list_containers(Some(options)).await?;
        let mut out = Vec::new();
        for container in containers {
            let mount = container.mounts.iter().flatten().find(|m| {
                m.typ.as_ref().map(|t| t.to_string()).as_deref() == Some("volume")
                    && m.name.as_deref() == Some(name)
            });
            if let Some(mount) = mount {
                let id = container.id.clone().unwrap_or_default();
                out.push(VolumeConsumer {
                    id: short_id(&id),
                    name: container
                        .names
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .next()
                        .map(|n| n.trim_start_matches('/').to_string())
                        .unwrap_or_else(|| short_id(&id)),
                    status: container
                        .state
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_default(),
                    mount_destination: mount.destination.clone().unwrap_or_default(),
                });
            }
        }
        Ok(out)
    }

    pub async fn list(&self) -> Result<Vec<Volume>, ApiError> {
        let listed = self.engine.list_volumes(None).await?;
        let df = self.engine.disk_usage().await?;
        Ok(listed
            .volumes
            .unwrap_or_default()
            .into_iter()
            .map(|v| {
                let usage = canon::volume_usage_from_df(&df, &v.name);
                canon::volume_from_engine(v, usage)
            })
            .collect())
    }

    pub async fn get(&self, name: &str) -> Result<VolumeDetails, ApiError> {
        let volume = self.engine.inspect_volume(name).await?;
        let df = self.engine.disk_usage().await?;
        let containers_using = self.consumers(name).await?;
        let usage = canon::volume_usage_from_df(&df, &volume.name);
        let lifted = canon::volume_from_engine(volume, usage);
        Ok(VolumeDetails {
            name: lifted.name,
            driver: lifted.driver,
            mountpoint: lifted.mountpoint,
            created: lifted.created,
            scope: lifted.scope,
            labels: lifted.labels,
            options: lifted.options,
            usage: lifted.usage,
            containers_using,
        })
    }

    pub async fn create(&self, req: CreateVolumeRequest) -> Result<VolumeCreateReceipt, ApiError> {
        let options = lower_volume_create(req);
        let volume = self.engine.create_volume(options).await?;
        let lifted = canon::volume_from_engine(volume, crate::models::VolumeUsage::unknown());
        Ok(VolumeCreateReceipt {
            message: format!("Volume '{}' created successfully", lifted.name),
            name: lifted.name,
            driver: lifted.driver,
            mountpoint: lifted.mountpoint,
            created: lifted.created,
            labels: lifted.labels,
            options: lifted.options,
            status: "created".into(),
        })
    }

    pub async fn remove(&self, name: &str, force: bool) -> Result<VolumeRemoveReceipt, ApiError> {
        // Resolve first so a missing volume reports not-found, not the
        // engine's removal error.
        self.engine.inspect_volume(name).await?;
        let options = RemoveVolumeOptions {
            force,
            ..Default::default()
        };
        self.engine.remove_volume(name, Some(options)).await?;
        Ok(VolumeRemoveReceipt {
            message: format!("Volume '{name}' removed successfully"),
            name: name.to_string(),
            status: "removed".into(),
        })
    }

    pub async fn prune(&self) -> Result<VolumePruneReceipt, ApiError> {
        let result = self.engine.prune_volumes(None).await?;
        let reclaimed = result.space_reclaimed.unwrap_or(0);
        Ok(VolumePruneReceipt {
            message: "Volume pruning completed".into(),
            volumes_deleted: result.volumes_deleted.unwrap_or_default(),
            space_reclaimed: format_size(reclaimed),
            space_reclaimed_bytes: reclaimed,
        })
    }

    pub async fn stats(&self) -> Result<VolumeStats, ApiError> {
        let listed = self.engine.list_volumes(None).await?;
        let df = self.engine.disk_usage().await?;
        let volumes = listed.volumes.unwrap_or_default();

        let mut drivers: HashMap<String, usize> = HashMap::new();
        for volume in &volumes {
            *drivers.entry(volume.driver.clone()).or_default() += 1;
        }

        let df_volumes = df.volumes.unwrap_or_default();
        let total_size: i64 = df_volumes
            .iter()
            .filter_map(|v| v.usage_data.as_ref())
            .map(|u| u.size)
            .sum();
        let unused = df_volumes
            .iter()
            .filter(|v| v.usage_data.as_ref().map(|u| u.ref_count).unwrap_or(0) == 0)
            .count();

        Ok(VolumeStats {
            total_volumes: volumes.len(),
            total_size: format_size(total_size),
            total_size_bytes: total_size,
            drivers,
            unused_volumes: unused,
        })
    }
}
