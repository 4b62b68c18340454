// Network operations

use std::collections::HashMap;
use std::sync::Arc;

use crate::canon::{self, short_id};
use crate::engine::EnginePort;
use crate::error::ApiError;
use crate::models::{
    Network, NetworkCreateReceipt, NetworkDetails, NetworkEndpointReceipt, NetworkPruneReceipt,
    NetworkRemoveReceipt, NetworkStats,
};
use crate::normalize::{
    ConnectContainerRequest, CreateNetworkRequest, DisconnectContainerRequest,
    lower_network_connect, lower_network_create, lower_network_disconnect,
};

/// Built-in engine networks that cannot be user-managed.
const SYSTEM_NETWORKS: [&str; 3] = ["bridge", "host", "none"];

#[derive(Clone)]
pub struct NetworkFacade {
    engine: Arc<dyn EnginePort>,
}

impl NetworkFacade {
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    pub async fn list(&self) -> Result<Vec<Network>, ApiError> {
        let networks = self.engine.list_networks(None).await?;
        Ok(networks
            .into_iter()
            .map(canon::network_from_engine)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<NetworkDetails, ApiError> {
        Ok(canon::network_details(
            self.engine.inspect_network(id).await?,
        ))
    }

    pub async fn create(&self, req: CreateNetworkRequest) -> Result<NetworkCreateReceipt, ApiError> {
        let request = lower_network_create(req)?;
        let name = request.name.clone();
        let driver = request.driver.clone().unwrap_or_default();
        let internal = request.internal.unwrap_or(false);
        let attachable = request.attachable.unwrap_or(false);
        let labels = request.labels.clone().unwrap_or_default();
        let created = self.engine.create_network(request).await?;
        Ok(NetworkCreateReceipt {
            message: format!("Network '{name}' created successfully"),
            id: short_id(&created.id),
            name,
            driver,
            internal,
            attachable,
            labels,
            status: "created".into(),
        })
    }

    pub async fn remove(&self, id: &str) -> Result<NetworkRemoveReceipt, ApiError> {
        let network = self.engine.inspect_network(id).await?;
        let name = network.name.clone().unwrap_or_else(|| id.to_string());
        let endpoints = canon::network_endpoints(network.containers);
        if !endpoints.is_empty() {
            let names: Vec<String> = endpoints.into_iter().map(|e| e.name).collect();
            return Err(ApiError::conflict(format!(
                "Cannot remove network '{name}' - it is used by containers: {}. Disconnect them first",
                names.join(", ")
            )));
        }
        self.engine.remove_network(id).await?;
        Ok(NetworkRemoveReceipt {
            message: format!("Network '{name}' removed successfully"),
            id: short_id(&network.id.unwrap_or_else(|| id.to_string())),
            name,
            status: "removed".into(),
        })
    }

    pub async fn connect(
        &self,
        network_id: &str,
        req: ConnectContainerRequest,
    ) -> Result<NetworkEndpointReceipt, ApiError> {
        let (container_ref, request) = lower_network_connect(req)?;
        let network = self.engine.inspect_network(network_id).await?;
        let network_name = network.name.clone().unwrap_or_else(|| network_id.to_string());
        let container = self.engine.inspect_container(&container_ref).await?;
        let container_id = short_id(&container.id.unwrap_or_else(|| container_ref.clone()));
        let container_name = container
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_else(|| container_id.clone());

        let attached = canon::network_endpoints(network.containers);
        if attached.iter().any(|e| e.id == container_id) {
            return Err(ApiError::conflict(format!(
                "Container '{container_name}' is already connected to network '{network_name}'"
            )));
        }

        self.engine.connect_network(network_id, request).await?;
        Ok(NetworkEndpointReceipt {
            message: format!(
                "Container '{container_name}' connected to network '{network_name}' successfully"
            ),
            network_id: short_id(&network.id.unwrap_or_else(|| network_id.to_string())),
            network_name,
            container_id,
            container_name,
            status: "connected".into(),
        })
    }

    pub async fn disconnect(
        &self,
        network_id: &str,
        req: DisconnectContainerRequest,
    ) -> Result<NetworkEndpointReceipt, ApiError> {
        let (container_ref, request) = lower_network_disconnect(req)?;
        let network = self.engine.inspect_network(network_id).await?;
        let network_name = network.name.clone().unwrap_or_else(|| network_id.to_string());
        let container = self.engine.inspect_container(&container_ref).await?;
        let container_id = short_id(&container.id.unwrap_or_else(|| container_ref.clone()));
        let container_name = container
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_else(|| container_id.clone());

        let attached = canon::network_endpoints(network.containers);
        if !attached.iter().any(|e| e.id == container_id) {
            return Err(ApiError::conflict(format!(
                "Container '{container_name}' is not connected to network '{network_name}'"
            )));
        }

        self.engine.disconnect_network(network_id, request).await?;
        Ok(NetworkEndpointReceipt {
            message: format!(
                "Container '{container_name}' disconnected from network '{network_name}' successfully"
            ),
            network_id: short_id(&network.id.unwrap_or_else(|| network_id.to_string())),
            network_name,
            container_id,
            container_name,
            status: "disconnected".into(),
        })
    }

    pub async fn prune(&self) -> Result<NetworkPruneReceipt, ApiError> {
        let result = self.engine.prune_networks(None).await?;
        Ok(NetworkPruneReceipt {
            message: "Network pruning completed".into(),
            networks_deleted: result.networks_deleted.unwrap_or_default(),
        })
    }

    pub async fn stats(&self) -> Result<NetworkStats, ApiError> {
        let networks = self.engine.list_networks(None).await?;

        let mut drivers: HashMap<String, usize> = HashMap::new();
        let mut scopes: HashMap<String, usize> = HashMap::new();
        let mut total_connected = 0usize;
        let mut system_networks = 0usize;
        let total = networks.len();

        for network in networks {
            let driver = network.driver.clone().unwrap_or_else(|| "unknown".into());
            let scope = network.scope.clone().unwrap_or_else(|| "local".into());
            *drivers.entry(driver).or_default() += 1;
            *scopes.entry(scope).or_default() += 1;
            total_connected += network.containers.as_ref().map(HashMap::len).unwrap_or(0);
            if let Some(name) = network.name.as_deref() {
                if SYSTEM_NETWORKS.contains(&name) {
                    system_networks += 1;
                }
            }
        }

        Ok(NetworkStats {
            total_networks: total,
            drivers,
            scopes,
            total_connected_containers: total_connected,
            system_networks,
        })
    }
}
