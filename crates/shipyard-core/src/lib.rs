//! # shipyard-core
//!
//! Request execution pipeline and shared types for the Shipyard cluster
//! management API.
//!
//! Every operation exposed by `shipyard-client` is a thin mapping over the
//! [`executor::RequestExecutor`], which owns URL construction, credential
//! header selection and the per-call status contract.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and classification
//! - [`config`] - Endpoint and credential configuration
//! - [`client`] - HTTP transport tuning (timeouts, pooling)
//! - [`transport`] - Pluggable HTTP transport and the default reqwest implementation
//! - [`query`] - Query string assembly for request paths
//! - [`executor`] - Authenticated request execution and status enforcement

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod query;
pub mod transport;

// Re-export commonly used types
pub use config::ShipyardConfig;
pub use error::{Error, ErrorKind, Result};
pub use executor::RequestExecutor;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
