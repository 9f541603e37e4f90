//! Authenticated request execution.
//!
//! [`RequestExecutor`] turns `(path, method, expected status, body)` into one
//! HTTP call and enforces the success contract:
//!
//! 1. `401` is always [`Error::Unauthorized`], whatever the caller expected.
//! 2. The expected status is success; the body is returned untouched.
//! 3. Anything else is [`Error::UnexpectedStatus`] carrying the raw body text.
//!
//! Nothing is retried.

use crate::config::ShipyardConfig;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Executes requests against the configured controller.
///
/// Cheap to clone; holds only the immutable configuration and the transport.
#[derive(Clone)]
pub struct RequestExecutor {
    config: Arc<ShipyardConfig>,
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    /// Create an executor over an explicit transport.
    #[must_use]
    pub fn new(config: ShipyardConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Access the configuration.
    #[must_use]
    pub fn config(&self) -> &ShipyardConfig {
        &self.config
    }

    /// Issue one request and enforce the status contract.
    ///
    /// `path` is appended verbatim to the base URL and may carry a
    /// pre-encoded query string.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the call could not be completed.
    /// - [`Error::Unauthorized`] on a `401` response.
    /// - [`Error::UnexpectedStatus`] on any other status not equal to `expected`.
    pub async fn execute(
        &self,
        path: &str,
        method: Method,
        expected: StatusCode,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let auth = self.config.auth_header();
        let request = HttpRequest {
            method: method.clone(),
            url: self.config.build_url(path),
            headers: vec![(auth.name(), auth.value().to_string())],
            body,
        };

        debug!(%method, path, expected = expected.as_u16(), "Shipyard request");

        let response = self.transport.send(request).await?;
        let status = response.status;

        debug!(%method, path, status = status.as_u16(), "Shipyard response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        if status != expected {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                message: response.text(),
            });
        }

        Ok(response)
    }
}

/// Serialize a request body to JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Encode`] if `value` cannot be serialized.
pub fn encode_body<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(value).map_err(|err| Error::Encode(err.to_string()))
}
