// Container operations

use std::sync::Arc;

use bollard::query_parameters::{
    ListContainersOptions, LogsOptions, RemoveContainerOptions, RestartContainerOptions,
    StopContainerOptions,
};

use crate::canon::{self, iso_utc, short_id};
use crate::engine::EnginePort;
use crate::error::ApiError;
use crate::models::{
    Container, ContainerActionReceipt, ContainerCreateReceipt, ContainerDetails, ContainerLogs,
};
use crate::normalize::{CreateContainerRequest, lower_container_create};

#[derive(Clone)]
pub struct ContainerFacade {
    engine: Arc<dyn EnginePort>,
    stop_timeout_secs: i32,
}

impl ContainerFacade {
    pub fn new(engine: Arc<dyn EnginePort>, stop_timeout_secs: i32) -> Self {
        Self {
            engine,
            stop_timeout_secs,
        }
    }

    /// Short id + display name of an existing container; the not-found case
    /// surfaces here, before any lifecycle action fires.
    async fn identify(&self, id: &str) -> Result<(String, String), ApiError> {
        let inspected = self.engine.inspect_container(id).await?;
        let full_id = inspected.id.unwrap_or_else(|| id.to_string());
        let name = inspected
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| short_id(&full_id));
        Ok((short_id(&full_id), name))
    }

    pub async fn list(&self, all: bool) -> Result<Vec<Container>, ApiError> {
        let options = ListContainersOptions {
            all,
            ..Default::default()
        };
        let containers = self.engine.list_containers(Some(options)).await?;
        Ok(containers
            .into_iter()
            .map(canon::container_from_summary)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<ContainerDetails, ApiError> {
        Ok(canon::container_details(
            self.engine.inspect_container(id).await?,
        ))
    }

    pub async fn create(
        &self,
        req: CreateContainerRequest,
    ) -> Result<ContainerCreateReceipt, ApiError> {
        let params = lower_container_create(req)?;
        let created = self
            .engine
            .create_container(params.options, params.body)
            .await?;
        // The engine answers with the id only; without a requested name one
        // inspect round-trip learns the assigned one.
        let name = match params.name {
            Some(name) => name,
            None => self.identify(&created.id).await?.1,
        };
        Ok(ContainerCreateReceipt {
            message: "Container created successfully".into(),
            id: short_id(&created.id),
            name,
            image: params.image,
            status: "created".into(),
        })
    }

    pub async fn start(&self, id: &str) -> Result<ContainerActionReceipt, ApiError> {
        let (short, name) = self.identify(id).await?;
        self.engine.start_container(id).await?;
        Ok(ContainerActionReceipt {
            message: format!("Container '{name}' started successfully"),
            id: short,
            name,
            status: "started".into(),
        })
    }

    pub async fn stop(
        &self,
        id: &str,
        timeout: Option<i32>,
    ) -> Result<ContainerActionReceipt, ApiError> {
        let (short, name) = self.identify(id).await?;
        let options = StopContainerOptions {
            t: Some(timeout.unwrap_or(self.stop_timeout_secs)),
            ..Default::default()
        };
        self.engine.stop_container(id, Some(options)).await?;
        Ok(ContainerActionReceipt {
            message: format!("Container '{name}' stopped successfully"),
            id: short,
            name,
            status: "stopped".into(),
        })
    }

    pub async fn restart(
        &self,
        id: &str,
        timeout: Option<i32>,
    ) -> Result<ContainerActionReceipt, ApiError> {
        let (short, name) = self.identify(id).await?;
        let options = RestartContainerOptions {
            t: Some(timeout.unwrap_or(self.stop_timeout_secs)),
            ..Default::default()
        };
        self.engine.restart_container(id, Some(options)).await?;
        Ok(ContainerActionReceipt {
            message: format!("Container '{name}' restarted successfully"),
            id: short,
            name,
            status: "restarted".into(),
        })
    }

    pub async fn remove(&self, id: &str, force: bool) -> Result<ContainerActionReceipt, ApiError> {
        let (short, name) = self.identify(id).await?;
        let options = RemoveContainerOptions {
            force,
            ..Default::default()
        };
        self.engine.remove_container(id, Some(options)).await?;
        Ok(ContainerActionReceipt {
            message: format!("Container '{name}' removed successfully"),
            id: short,
            name,
            status: "removed".into(),
        })
    }

    pub async fn logs(&self, id: &str, tail: u32) -> Result<ContainerLogs, ApiError> {
        let inspected = self.engine.inspect_container(id).await?;
        let full_id = inspected.id.unwrap_or_else(|| id.to_string());
        let name = inspected
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_else(|| short_id(&full_id));
        let started = inspected
            .state
            .and_then(|s| s.started_at)
            .map(|t| iso_utc(&t));
        let options = LogsOptions {
            stdout: true,
            stderr: true,
            tail: tail.to_string(),
            ..Default::default()
        };
        let logs = self.engine.container_logs(id, Some(options)).await?;
        Ok(ContainerLogs {
            id: short_id(&full_id),
            name,
            logs,
            tail,
            timestamp: started,
        })
    }
}
