// Container canonicalization

use std::collections::HashMap;

use bollard::models::{
    ContainerInspectResponse, ContainerSummary, Port, PortBinding,
};

use super::{iso_utc, iso_utc_from_unix, short_id};
use crate::models::{Container, ContainerDetails, PortBindingInfo};

/// Lift the inspect-style port map. A `null` binding list (exposed but
/// unpublished port) becomes an empty list under the same key.
fn ports_from_map(
    ports: Option<HashMap<String, Option<Vec<PortBinding>>>>,
) -> HashMap<String, Vec<PortBindingInfo>> {
    ports
        .unwrap_or_default()
        .into_iter()
        .map(|(key, bindings)| {
            let lifted = bindings
                .unwrap_or_default()
                .into_iter()
                .map(|b| PortBindingInfo {
                    host_ip: b.host_ip.unwrap_or_default(),
                    host_port: b.host_port.unwrap_or_default(),
                })
                .collect();
            (key, lifted)
        })
        .collect()
}

/// Lift the list-style flat port entries into the same map shape the
/// inspect view uses.
fn ports_from_list(ports: Option<Vec<Port>>) -> HashMap<String, Vec<PortBindingInfo>> {
    let mut out: HashMap<String, Vec<PortBindingInfo>> = HashMap::new();
    for port in ports.unwrap_or_default() {
        let proto = port
            .typ
            .map(|t| t.to_string())
            .unwrap_or_else(|| "tcp".into());
        let key = format!("{}/{}", port.private_port, proto);
        let entry = out.entry(key).or_default();
        if let Some(public) = port.public_port {
            entry.push(PortBindingInfo {
                host_ip: port.ip.clone().unwrap_or_default(),
                host_port: public.to_string(),
            });
        }
    }
    out
}

pub fn container_from_summary(c: ContainerSummary) -> Container {
    let id = c.id.unwrap_or_default();
    let name = c
        .names
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| short_id(&id));
    Container {
        id: short_id(&id),
        name,
        image: c.image.unwrap_or_default(),
        status: c.state.map(|s| s.to_string()).unwrap_or_default(),
        created: c.created.map(iso_utc_from_unix).unwrap_or_default(),
        ports: ports_from_list(c.ports),
        labels: c.labels.unwrap_or_default(),
    }
}

pub fn container_details(c: ContainerInspectResponse) -> ContainerDetails {
    let state = c.state.unwrap_or_default();
    let config = c.config.unwrap_or_default();
    let host_config = c.host_config.unwrap_or_default();
    let network_settings = c.network_settings.unwrap_or_default();

    let mut networks: Vec<String> = network_settings
        .networks
        .unwrap_or_default()
        .into_keys()
        .collect();
    networks.sort();

    let mounts = c
        .mounts
        .unwrap_or_default()
        .into_iter()
        .map(|m| {
            format!(
                "{}:{}",
                m.source.unwrap_or_default(),
                m.destination.unwrap_or_default()
            )
        })
        .collect();

    ContainerDetails {
        id: c.id.unwrap_or_default(),
        name: c
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default(),
        image: config.image.clone().or(c.image).unwrap_or_default(),
        status: state.status.map(|s| s.to_string()).unwrap_or_default(),
        created: c.created.as_deref().map(iso_utc).unwrap_or_default(),
        started: state.started_at.as_deref().map(iso_utc),
        finished: state.finished_at.as_deref().map(iso_utc),
        exit_code: state.exit_code,
        ports: ports_from_map(network_settings.ports),
        networks,
        mounts,
        environment: config.env.unwrap_or_default(),
        labels: config.labels.unwrap_or_default(),
        command: config.cmd,
        working_dir: config.working_dir.unwrap_or_default(),
        restart_policy: host_config
            .restart_policy
            .and_then(|p| p.name)
            .map(|n| n.to_string())
            .unwrap_or_default(),
    }
}
