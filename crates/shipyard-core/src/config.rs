//! Configuration for Shipyard clients.
//!
//! A [`ShipyardConfig`] names the controller endpoint and carries the
//! credential material used to authenticate every request. It is built once
//! and never mutated after the client is constructed. Transport tuning such
//! as timeouts lives in [`ClientConfig`](crate::client::ClientConfig).

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;
use validator::Validate;

/// Header carrying a service key.
pub const SERVICE_KEY_HEADER: &str = "X-Service-Key";

/// Header carrying the composite `username:token` credential.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Configuration for a Shipyard client instance.
///
/// When both a service key and a username/token pair are configured, the
/// service key wins.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShipyardConfig {
    /// Controller base URL (e.g. `http://shipyard.example.com:8080`).
    ///
    /// Request paths are appended to it verbatim.
    pub url: String,

    /// Username used for the access-token header
    #[validate(length(min = 1))]
    #[serde(default)]
    pub username: Option<String>,

    /// Auth token paired with `username`
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Service key for non-interactive callers
    #[serde(default)]
    pub service_key: Option<SecretString>,
}

impl ShipyardConfig {
    /// Create a new configuration for the given controller URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the URL does not parse.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            url: url.into(),
            username: None,
            token: None,
            service_key: None,
        };

        config.validated()
    }

    /// Parse a JSON document into a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        config.validated()
    }

    /// Run field validation, returning the configuration unchanged on success.
    ///
    /// The URL is only checked, never normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] for an unparseable URL and
    /// [`Error::ConfigError`] describing any other failing field.
    pub fn validated(self) -> Result<Self, Error> {
        Url::parse(&self.url)?;
        self.validate()?;
        Ok(self)
    }

    /// Set the username/token credential pair.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set the service key.
    #[must_use]
    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(SecretString::from(key.into()));
        self
    }

    /// Build the absolute URL for a server-relative path.
    ///
    /// Plain concatenation: duplicate or missing slashes are the caller's
    /// responsibility.
    #[must_use]
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    /// Returns true if a non-empty service key is configured.
    #[must_use]
    pub fn has_service_key(&self) -> bool {
        self.service_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Returns true if any credential material is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.has_service_key() || self.username.is_some() || self.token.is_some()
    }

    /// Select the authentication header for a request.
    #[must_use]
    pub fn auth_header(&self) -> AuthHeader {
        match &self.service_key {
            Some(key) if !key.expose_secret().is_empty() => {
                AuthHeader::ServiceKey(key.expose_secret().to_string())
            }
            _ => {
                let username = self.username.as_deref().unwrap_or_default();
                let token = self
                    .token
                    .as_ref()
                    .map(|token| token.expose_secret())
                    .unwrap_or_default();
                AuthHeader::AccessToken(format!("{username}:{token}"))
            }
        }
    }
}

/// The single credential header attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthHeader {
    /// `X-Service-Key: <key>`
    ServiceKey(String),
    /// `X-Access-Token: <username>:<token>`
    AccessToken(String),
}

impl AuthHeader {
    /// Header name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ServiceKey(_) => SERVICE_KEY_HEADER,
            Self::AccessToken(_) => ACCESS_TOKEN_HEADER,
        }
    }

    /// Header value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::ServiceKey(value) | Self::AccessToken(value) => value,
        }
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthHeader")
            .field(&self.name())
            .field(&"[REDACTED]")
            .finish()
    }
}
