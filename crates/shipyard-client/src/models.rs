//! Shipyard API records.
//!
//! These mirror the controller's JSON documents. The client never inspects
//! them beyond the identifiers it needs to build request paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Port binding exposed by a container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    /// Protocol (`tcp` / `udp`).
    #[serde(default)]
    pub proto: String,
    /// Host port.
    #[serde(default)]
    pub port: u16,
    /// Host IP the port is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    /// Port inside the container.
    #[serde(default)]
    pub container_port: u16,
}

/// Restart policy applied by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestartPolicy {
    /// Policy name (`no`, `always`, `on-failure`).
    #[serde(default)]
    pub name: String,
    /// Retry limit for `on-failure`.
    #[serde(default)]
    pub maximum_retry_count: u32,
}

/// Image and runtime parameters used to run containers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Image reference (e.g. `nginx:latest`).
    #[serde(default)]
    pub name: String,
    /// Name to give the created container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// CPU shares requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpus: Option<f64>,
    /// Memory requested (MiB).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    /// Entrypoint override.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entrypoint: Vec<String>,
    /// Environment variables.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
    /// Container hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Container domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domainname: Option<String>,
    /// Arguments passed to the entrypoint.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Scheduling type (`service`, `batch`, `host`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Engine labels the container must be scheduled on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Explicit port bindings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind_ports: Vec<Port>,
    /// Volume mounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    /// Container links (name to alias).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
    /// Restart policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<RestartPolicy>,
    /// Publish all exposed ports.
    #[serde(default)]
    pub publish: bool,
    /// Docker network mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<String>,
}

impl Image {
    /// Image with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A Docker engine as seen by the scheduler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DockerEngine {
    /// Engine identifier.
    #[serde(default)]
    pub id: String,
    /// Docker API address (e.g. `tcp://10.0.0.5:2375`).
    #[serde(default)]
    pub addr: String,
    /// CPU capacity.
    #[serde(default)]
    pub cpus: f64,
    /// Memory capacity (MiB).
    #[serde(default)]
    pub memory: f64,
    /// Scheduling labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// A running or stopped container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Container {
    /// Container identifier.
    #[serde(default)]
    pub id: String,
    /// Image the container was started from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Engine hosting the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<DockerEngine>,
    /// Runtime state (`running`, `stopped`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Published ports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<Port>,
}

/// Engine health as last probed by the controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    /// Health status (`up` / `down`).
    #[serde(default)]
    pub status: String,
    /// Probe round-trip time (nanoseconds).
    #[serde(default)]
    pub response_time: i64,
}

/// An engine registered with the controller.
///
/// The Docker engine itself is nested under `engine`; its `id` is the one used
/// to address the registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Engine {
    /// Registration identifier.
    #[serde(default)]
    pub id: String,
    /// The underlying Docker engine.
    #[serde(default)]
    pub engine: DockerEngine,
    /// Last health probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Docker daemon version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_version: Option<String>,
}

/// Aggregate cluster capacity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClusterInfo {
    /// Total CPUs.
    #[serde(default)]
    pub cpus: f64,
    /// Total memory (MiB).
    #[serde(default)]
    pub memory: f64,
    /// Number of containers.
    #[serde(default)]
    pub container_count: u64,
    /// Number of engines.
    #[serde(default)]
    pub engine_count: u64,
    /// Number of images.
    #[serde(default)]
    pub image_count: u64,
    /// CPUs reserved by running containers.
    #[serde(default)]
    pub reserved_cpus: f64,
    /// Memory reserved by running containers (MiB).
    #[serde(default)]
    pub reserved_memory: f64,
}

/// Cluster activity record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Event type (e.g. `start`, `die`, `add-engine`).
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Container involved, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    /// Engine involved, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<DockerEngine>,
    /// When the event happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Access role.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Role identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role name (e.g. `admin`, `user`).
    #[serde(default)]
    pub name: String,
}

/// User account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Only sent when creating an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Assigned role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Token issued by a successful login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthToken {
    /// Token value, paired with the username in `X-Access-Token`.
    #[serde(default, rename = "auth_token")]
    pub token: String,
    /// User agent the token was issued to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Credential for non-interactive callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceKey {
    /// Key value; empty until issued by the controller.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl ServiceKey {
    /// Unissued key carrying only a description.
    #[must_use]
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            key: String::new(),
            description: description.into(),
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Body of `POST /account/changepassword`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// New password.
    pub password: String,
}
