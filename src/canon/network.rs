// Network canonicalization

use std::collections::HashMap;

use bollard::models::{Ipam, Network as EngineNetwork, NetworkContainer};

use super::{iso_utc, short_id};
use crate::models::{IpamInfo, IpamPool, Network, NetworkDetails, NetworkEndpoint};

fn ipam_info(ipam: Option<Ipam>) -> IpamInfo {
    let ipam = ipam.unwrap_or_default();
    IpamInfo {
        driver: ipam.driver.unwrap_or_else(|| "default".into()),
        options: ipam.options.unwrap_or_default(),
        config: ipam
            .config
            .unwrap_or_default()
            .into_iter()
            .map(|c| IpamPool {
                subnet: c.subnet.unwrap_or_default(),
                gateway: c.gateway.unwrap_or_default(),
                ip_range: c.ip_range.unwrap_or_default(),
                aux_addresses: c.auxiliary_addresses.unwrap_or_default(),
            })
            .collect(),
    }
}

fn strip_cidr(addr: Option<String>) -> String {
    addr.unwrap_or_default()
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Attached endpoints, sorted by container id: the engine hands them over
/// as a map with no usable order.
pub fn network_endpoints(
    containers: Option<HashMap<String, NetworkContainer>>,
) -> Vec<NetworkEndpoint> {
    let mut out: Vec<NetworkEndpoint> = containers
        .unwrap_or_default()
        .into_iter()
        .map(|(id, c)| NetworkEndpoint {
            id: short_id(&id),
            name: c.name.unwrap_or_else(|| "unknown".into()),
            ipv4_address: strip_cidr(c.ipv4_address),
            ipv6_address: strip_cidr(c.ipv6_address),
            mac_address: c.mac_address.unwrap_or_default(),
            endpoint_id: short_id(&c.endpoint_id.unwrap_or_default()),
        })
        .collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

pub fn network_from_engine(n: EngineNetwork) -> Network {
    Network {
        id: short_id(&n.id.unwrap_or_default()),
        name: n.name.unwrap_or_default(),
        driver: n.driver.unwrap_or_default(),
        scope: n.scope.unwrap_or_else(|| "local".into()),
        created: n.created.as_deref().map(iso_utc).unwrap_or_default(),
        internal: n.internal.unwrap_or(false),
        attachable: n.attachable.unwrap_or(false),
        ingress: n.ingress.unwrap_or(false),
        ipam: ipam_info(n.ipam),
        labels: n.labels.unwrap_or_default(),
        containers: network_endpoints(n.containers),
        options: n.options.unwrap_or_default(),
    }
}

pub fn network_details(n: EngineNetwork) -> NetworkDetails {
    NetworkDetails {
        id: n.id.clone().unwrap_or_default(),
        name: n.name.unwrap_or_default(),
        driver: n.driver.unwrap_or_default(),
        scope: n.scope.unwrap_or_else(|| "local".into()),
        created: n.created.as_deref().map(iso_utc).unwrap_or_default(),
        internal: n.internal.unwrap_or(false),
        attachable: n.attachable.unwrap_or(false),
        ingress: n.ingress.unwrap_or(false),
        enable_ipv6: n.enable_ipv6.unwrap_or(false),
        ipam: ipam_info(n.ipam),
        labels: n.labels.unwrap_or_default(),
        options: n.options.unwrap_or_default(),
        containers: network_endpoints(n.containers),
        config_from: n.config_from.and_then(|c| c.network).unwrap_or_default(),
        config_only: n.config_only.unwrap_or(false),
    }
}
