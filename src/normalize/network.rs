// Network create/connect/disconnect payload lowering, IPAM validation

use std::collections::HashMap;
use std::net::IpAddr;

use bollard::models::{
    EndpointIpamConfig, EndpointSettings, Ipam, IpamConfig, NetworkConnectRequest,
    NetworkCreateRequest as EngineNetworkCreateRequest, NetworkDisconnectRequest,
};
use serde::Deserialize;

use super::require;
use crate::error::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpamConfigSpec {
    pub subnet: Option<String>,
    pub ip_range: Option<String>,
    pub gateway: Option<String>,
    pub aux_addresses: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpamSpec {
    pub driver: Option<String>,
    pub config: Option<Vec<IpamConfigSpec>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNetworkRequest {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub internal: Option<bool>,
    pub attachable: Option<bool>,
    pub enable_ipv6: Option<bool>,
    pub labels: Option<HashMap<String, String>>,
    pub options: Option<HashMap<String, String>>,
    pub ipam: Option<IpamSpec>,
}

fn valid_cidr(s: &str) -> bool {
    match s.split_once('/') {
        Some((addr, prefix)) => {
            let max = match addr.parse::<IpAddr>() {
                Ok(IpAddr::V4(_)) => 32,
                Ok(IpAddr::V6(_)) => 128,
                Err(_) => return false,
            };
            matches!(prefix.parse::<u8>(), Ok(p) if p <= max)
        }
        None => false,
    }
}

/// An `ipam` key, when present, must carry at least one config entry with a
/// valid subnet. An absent key means engine-default IPAM (no `Ipam` sent).
fn lower_ipam(spec: IpamSpec) -> Result<Ipam, ApiError> {
    let entries = spec.config.unwrap_or_default();
    if entries.is_empty() {
        return Err(ApiError::validation(
            "ipam requires at least one config entry with a subnet",
        ));
    }
    let mut config = Vec::with_capacity(entries.len());
    for entry in entries {
        let subnet = entry.subnet.filter(|s| !s.is_empty()).ok_or_else(|| {
            ApiError::validation("ipam config entry is missing 'subnet'")
        })?;
        if !valid_cidr(&subnet) {
            return Err(ApiError::validation(format!(
                "invalid ipam subnet '{subnet}'"
            )));
        }
        if let Some(range) = entry.ip_range.as_deref().filter(|r| !r.is_empty()) {
            if !valid_cidr(range) {
                return Err(ApiError::validation(format!(
                    "invalid ipam ip_range '{range}'"
                )));
            }
        }
        if let Some(gw) = entry.gateway.as_deref().filter(|g| !g.is_empty()) {
            if gw.parse::<IpAddr>().is_err() {
                return Err(ApiError::validation(format!(
                    "invalid ipam gateway '{gw}'"
                )));
            }
        }
        config.push(IpamConfig {
            subnet: Some(subnet),
            ip_range: entry.ip_range.filter(|r| !r.is_empty()),
            gateway: entry.gateway.filter(|g| !g.is_empty()),
            auxiliary_addresses: entry.aux_addresses,
        });
    }
    Ok(Ipam {
        driver: spec.driver,
        config: Some(config),
        ..Default::default()
    })
}

pub fn lower_network_create(
    req: CreateNetworkRequest,
) -> Result<EngineNetworkCreateRequest, ApiError> {
    let name = require(req.name, "network name")?;
    let ipam = req.ipam.map(lower_ipam).transpose()?;
    Ok(EngineNetworkCreateRequest {
        name,
        driver: Some(
            req.driver
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "bridge".into()),
        ),
        internal: Some(req.internal.unwrap_or(false)),
        attachable: Some(req.attachable.unwrap_or(false)),
        enable_ipv6: req.enable_ipv6,
        labels: req.labels,
        options: req.options,
        ipam,
        ..Default::default()
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectContainerRequest {
    pub container: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub ipv4_address: Option<String>,
    pub ipv6_address: Option<String>,
}

/// Returns the target container id plus the lowered engine request.
pub fn lower_network_connect(
    req: ConnectContainerRequest,
) -> Result<(String, NetworkConnectRequest), ApiError> {
    let container = require(req.container, "container")?;
    for (field, addr) in [
        ("ipv4_address", req.ipv4_address.as_deref()),
        ("ipv6_address", req.ipv6_address.as_deref()),
    ] {
        if let Some(a) = addr.filter(|a| !a.is_empty()) {
            if a.parse::<IpAddr>().is_err() {
                return Err(ApiError::validation(format!("invalid {field} '{a}'")));
            }
        }
    }
    let wants_endpoint = req.aliases.is_some()
        || req.ipv4_address.is_some()
        || req.ipv6_address.is_some();
    let endpoint_config = wants_endpoint.then(|| EndpointSettings {
        aliases: req.aliases,
        ipam_config: Some(EndpointIpamConfig {
            ipv4_address: req.ipv4_address,
            ipv6_address: req.ipv6_address,
            ..Default::default()
        }),
        ..Default::default()
    });
    Ok((
        container.clone(),
        NetworkConnectRequest {
            container: Some(container),
            endpoint_config,
        },
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisconnectContainerRequest {
    pub container: Option<String>,
    #[serde(default)]
    pub force: bool,
}

pub fn lower_network_disconnect(
    req: DisconnectContainerRequest,
) -> Result<(String, NetworkDisconnectRequest), ApiError> {
    let container = require(req.container, "container")?;
    Ok((
        container.clone(),
        NetworkDisconnectRequest {
            container: Some(container),
            force: Some(req.force),
        },
    ))
}
