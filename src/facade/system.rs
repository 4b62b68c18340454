// System operations: engine version/info/df/status, aggregate stats, host

use std::sync::Arc;
use std::time::Duration;

use crate::canon;
use crate::engine::EnginePort;
use crate::error::ApiError;
use crate::host_repo::HostRepo;
use crate::models::{DaemonStatus, DiskUsage, EngineInfo, EngineVersion, HostInfo, OverallStats};

#[derive(Clone)]
pub struct SystemFacade {
    engine: Arc<dyn EnginePort>,
    host: Arc<HostRepo>,
    ping_timeout: Duration,
}

impl SystemFacade {
    pub fn new(engine: Arc<dyn EnginePort>, host: Arc<HostRepo>, ping_timeout: Duration) -> Self {
        Self {
            engine,
            host,
            ping_timeout,
        }
    }

    /// Liveness probe with an explicit upper bound; a silent daemon must
    /// not stall health checks.
    pub async fn ping(&self) -> Result<(), ApiError> {
        match tokio::time::timeout(self.ping_timeout, self.engine.ping()).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(_) => Err(ApiError::unavailable(format!(
                "engine did not answer ping within {}ms",
                self.ping_timeout.as_millis()
            ))),
        }
    }

    pub async fn version(&self) -> Result<EngineVersion, ApiError> {
        Ok(canon::engine_version(self.engine.version().await?))
    }

    pub async fn info(&self) -> Result<EngineInfo, ApiError> {
        Ok(canon::engine_info(self.engine.info().await?))
    }

    pub async fn disk_usage(&self) -> Result<DiskUsage, ApiError> {
        Ok(canon::disk_usage(self.engine.disk_usage().await?))
    }

    pub async fn daemon_status(&self) -> Result<DaemonStatus, ApiError> {
        self.ping().await?;
        let version = self.engine.version().await?;
        let info = self.engine.info().await?;
        Ok(canon::daemon_status(&version, &info))
    }

    /// Aggregate of info + disk usage + network count. All-or-nothing: any
    /// failing constituent call fails the whole response.
    pub async fn stats(&self) -> Result<OverallStats, ApiError> {
        let info = self.engine.info().await?;
        let df = self.engine.disk_usage().await?;
        let networks = self.engine.list_networks(None).await?;
        Ok(canon::overall_stats(&info, &df, networks.len()))
    }

    pub async fn host(&self) -> Result<HostInfo, ApiError> {
        self.host.host_info().await.map_err(|e| {
            tracing::error!("host info probe failed: {}", e);
            ApiError::internal()
        })
    }
}
