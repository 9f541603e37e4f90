//! Shipyard cluster management API client.
//!
//! Provides typed records and an asynchronous façade, [`ShipyardClient`], over
//! the controller's REST API: containers, engines, cluster info, events,
//! accounts, roles, authentication and service keys.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{ShipyardClient, ShipyardClientBuilder};
pub use models::{
    Account, AuthToken, ChangePasswordRequest, ClusterInfo, Container, DockerEngine, Engine,
    Event, Health, Image, LoginRequest, Port, RestartPolicy, Role, ServiceKey,
};
pub use shipyard_core::{Error, ErrorKind, ShipyardConfig};

/// Convenient result alias that reuses the shared Shipyard error type.
pub type Result<T> = shipyard_core::Result<T>;
