// Container create payload lowering: ports, environment, volume binds

use std::collections::{BTreeMap, HashMap};

use bollard::models::{
    ContainerCreateBody, HostConfig, PortBinding, RestartPolicy, RestartPolicyNameEnum,
};
use bollard::query_parameters::CreateContainerOptions;
use serde::Deserialize;

use super::require;
use crate::error::ApiError;

/// Accepted port publication shapes: a bare host port number or the
/// explicit binding-list form. Both lower to the binding-list form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    HostPort(u16),
    Bindings(Vec<BindingSpec>),
}

/// One explicit host binding; `HostPort` may arrive as number or string.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingSpec {
    #[serde(rename = "HostPort", default)]
    pub host_port: Option<PortNumber>,
    #[serde(rename = "HostIp", default)]
    pub host_ip: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortNumber {
    Number(u16),
    Text(String),
}

impl PortNumber {
    fn into_string(self) -> String {
        match self {
            PortNumber::Number(n) => n.to_string(),
            PortNumber::Text(s) => s,
        }
    }
}

/// Environment accepts a `"KEY=VALUE"` list or a key→value mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnvSpec {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeBindSpec {
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    Line(String),
    Argv(Vec<String>),
}

/// Container-create request. Every field is optional at the serde layer so
/// unknown keys are ignored and required-field failures surface as
/// validation errors, not deserialization rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContainerRequest {
    pub image: Option<String>,
    pub name: Option<String>,
    pub ports: Option<BTreeMap<String, PortSpec>>,
    pub environment: Option<EnvSpec>,
    pub volumes: Option<BTreeMap<String, VolumeBindSpec>>,
    pub command: Option<CommandSpec>,
    pub working_dir: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub restart_policy: Option<String>,
}

/// Fully lowered create parameters, ready for the engine port.
#[derive(Debug, Clone)]
pub struct ContainerCreateParams {
    pub image: String,
    pub name: Option<String>,
    pub options: Option<CreateContainerOptions>,
    pub body: ContainerCreateBody,
}

/// Canonical key form is `port/proto`; a bare port defaults to tcp.
fn normalize_port_key(key: &str) -> Result<String, ApiError> {
    let (port, proto) = match key.split_once('/') {
        Some((p, proto)) => (p, proto),
        None => (key, "tcp"),
    };
    if port.parse::<u16>().is_err() {
        return Err(ApiError::validation(format!(
            "invalid container port '{key}'"
        )));
    }
    match proto {
        "tcp" | "udp" | "sctp" => Ok(format!("{port}/{proto}")),
        _ => Err(ApiError::validation(format!(
            "invalid protocol in port '{key}' (expected tcp, udp or sctp)"
        ))),
    }
}

/// Lower a port mapping to the explicit binding-list form. An already
/// canonical mapping passes through unchanged.
pub fn normalize_ports(
    ports: BTreeMap<String, PortSpec>,
) -> Result<HashMap<String, Option<Vec<PortBinding>>>, ApiError> {
    let mut out = HashMap::with_capacity(ports.len());
    for (key, spec) in ports {
        let key = normalize_port_key(&key)?;
        let bindings = match spec {
            PortSpec::HostPort(n) => vec![PortBinding {
                host_ip: None,
                host_port: Some(n.to_string()),
            }],
            PortSpec::Bindings(list) => list
                .into_iter()
                .map(|b| PortBinding {
                    host_ip: b.host_ip,
                    host_port: b.host_port.map(PortNumber::into_string),
                })
                .collect(),
        };
        // Keys are unique after normalization; a later duplicate wins.
        out.insert(key, Some(bindings));
    }
    Ok(out)
}

/// Lower environment to the `KEY=VALUE` list form. List input passes
/// through untouched; mapping input is emitted in key order. Mapping keys
/// or values containing `=` cannot round-trip and are rejected.
pub fn normalize_env(env: EnvSpec) -> Result<Vec<String>, ApiError> {
    match env {
        EnvSpec::List(list) => Ok(list),
        EnvSpec::Map(map) => {
            let mut out = Vec::with_capacity(map.len());
            for (key, value) in map {
                if key.contains('=') {
                    return Err(ApiError::validation(format!(
                        "environment key '{key}' must not contain '='"
                    )));
                }
                if value.contains('=') {
                    return Err(ApiError::validation(format!(
                        "environment value for '{key}' must not contain '='"
                    )));
                }
                out.push(format!("{key}={value}"));
            }
            Ok(out)
        }
    }
}

/// Lower volume specs to engine bind strings `source:target:mode`.
/// `mode` defaults to `rw`; a spec without `bind` is rejected.
pub fn normalize_binds(
    volumes: BTreeMap<String, VolumeBindSpec>,
) -> Result<Vec<String>, ApiError> {
    let mut out = Vec::with_capacity(volumes.len());
    for (source, spec) in volumes {
        let bind = spec.bind.filter(|b| !b.is_empty()).ok_or_else(|| {
            ApiError::validation(format!("volume '{source}' is missing 'bind'"))
        })?;
        let mode = spec.mode.unwrap_or_else(|| "rw".into());
        if mode != "rw" && mode != "ro" {
            return Err(ApiError::validation(format!(
                "volume '{source}' has invalid mode '{mode}' (expected 'rw' or 'ro')"
            )));
        }
        out.push(format!("{source}:{bind}:{mode}"));
    }
    Ok(out)
}

fn lower_restart_policy(name: &str) -> Result<RestartPolicy, ApiError> {
    let name = match name {
        "no" => RestartPolicyNameEnum::NO,
        "always" => RestartPolicyNameEnum::ALWAYS,
        "unless-stopped" => RestartPolicyNameEnum::UNLESS_STOPPED,
        "on-failure" => RestartPolicyNameEnum::ON_FAILURE,
        other => {
            return Err(ApiError::validation(format!(
                "invalid restart_policy '{other}'"
            )));
        }
    };
    Ok(RestartPolicy {
        name: Some(name),
        maximum_retry_count: None,
    })
}

/// Validate and lower a container-create request. Runs to completion before
/// any engine interaction, so a rejected request has no side effects.
pub fn lower_container_create(
    req: CreateContainerRequest,
) -> Result<ContainerCreateParams, ApiError> {
    let image = require(req.image, "image")?;

    let env = req.environment.map(normalize_env).transpose()?;
    let cmd = req.command.map(|c| match c {
        CommandSpec::Line(line) => line.split_whitespace().map(str::to_string).collect(),
        CommandSpec::Argv(argv) => argv,
    });

    let port_bindings = req
        .ports
        .filter(|p| !p.is_empty())
        .map(normalize_ports)
        .transpose()?;
    let exposed_ports = port_bindings.as_ref().map(|bindings| {
        bindings
            .keys()
            .map(|k| (k.clone(), HashMap::new()))
            .collect::<HashMap<String, HashMap<(), ()>>>()
    });

    let binds = req
        .volumes
        .filter(|v| !v.is_empty())
        .map(normalize_binds)
        .transpose()?;

    let restart_policy = req
        .restart_policy
        .as_deref()
        .map(lower_restart_policy)
        .transpose()?;

    let host_config = if port_bindings.is_some() || binds.is_some() || restart_policy.is_some() {
        Some(HostConfig {
            port_bindings,
            binds,
            restart_policy,
            ..Default::default()
        })
    } else {
        None
    };

    let body = ContainerCreateBody {
        image: Some(image.clone()),
        env,
        cmd,
        labels: req.labels,
        working_dir: req.working_dir.clone(),
        exposed_ports,
        host_config,
        ..Default::default()
    };

    let options = req.name.clone().map(|name| CreateContainerOptions {
        name: Some(name),
        ..Default::default()
    });

    Ok(ContainerCreateParams {
        image,
        name: req.name,
        options,
        body,
    })
}
