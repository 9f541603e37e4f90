//! Asynchronous Shipyard client implementation.

use crate::models::{
    Account, AuthToken, ChangePasswordRequest, ClusterInfo, Container, Engine, Event, Image,
    LoginRequest, Role, ServiceKey,
};
use crate::Result;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shipyard_core::client::ClientConfig;
use shipyard_core::executor::encode_body;
use shipyard_core::query::QueryParams;
use shipyard_core::{HttpResponse, RequestExecutor, ReqwestTransport, ShipyardConfig, Transport};
use std::sync::Arc;
use tracing::warn;

/// Builder for [`ShipyardClient`].
#[derive(Clone)]
pub struct ShipyardClientBuilder {
    config: ShipyardConfig,
    http_config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ShipyardClientBuilder {
    /// Create a builder from a [`ShipyardConfig`].
    #[must_use]
    pub fn new(config: ShipyardConfig) -> Self {
        Self {
            config,
            http_config: ClientConfig::new(),
            transport: None,
        }
    }

    /// Override the HTTP client configuration used for the default transport.
    ///
    /// This is the only place request timeouts are set. It has no effect when
    /// a transport is injected with [`Self::with_transport`].
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Use an explicit transport instead of building a reqwest client.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ShipyardClient> {
        if !self.config.has_credentials() {
            warn!(url = %self.config.url, "Shipyard client built without credentials");
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.http_config)?),
        };

        Ok(ShipyardClient {
            executor: RequestExecutor::new(self.config, transport),
        })
    }
}

/// Asynchronous Shipyard client.
#[derive(Clone)]
pub struct ShipyardClient {
    executor: RequestExecutor,
}

impl ShipyardClient {
    /// Construct a client with the default reqwest transport.
    pub fn new(config: ShipyardConfig) -> Result<Self> {
        ShipyardClientBuilder::new(config).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: ShipyardConfig) -> ShipyardClientBuilder {
        ShipyardClientBuilder::new(config)
    }

    /// Access the configuration.
    #[must_use]
    pub fn config(&self) -> &ShipyardConfig {
        self.executor.config()
    }

    /// List containers.
    pub async fn containers(&self) -> Result<Vec<Container>> {
        self.get_json("/api/containers").await
    }

    /// Fetch a single container.
    pub async fn get_container(&self, id: &str) -> Result<Container> {
        let path = format!("/api/containers/{id}");
        self.get_json(&path).await
    }

    /// Start `count` containers from `image`, pulling it first when `pull` is set.
    pub async fn run(&self, image: &Image, count: u32, pull: bool) -> Result<Vec<Container>> {
        let path = QueryParams::new()
            .with("count", count)
            .with("pull", pull)
            .append_to("/api/containers");
        self.send_json(Method::POST, &path, StatusCode::CREATED, Some(image))
            .await
    }

    /// Destroy a container.
    pub async fn destroy(&self, container: &Container) -> Result<()> {
        let path = format!("/api/containers/{}", container.id);
        self.send(Method::DELETE, &path, StatusCode::NO_CONTENT, Some(container))
            .await
            .map(|_| ())
    }

    /// List registered engines.
    pub async fn engines(&self) -> Result<Vec<Engine>> {
        self.get_json("/api/engines").await
    }

    /// Fetch a single engine.
    pub async fn get_engine(&self, id: &str) -> Result<Engine> {
        let path = format!("/api/engines/{id}");
        self.get_json(&path).await
    }

    /// Register an engine.
    pub async fn add_engine(&self, engine: &Engine) -> Result<()> {
        self.send(Method::POST, "/api/engines", StatusCode::CREATED, Some(engine))
            .await
            .map(|_| ())
    }

    /// Remove an engine, addressed by its Docker engine id.
    pub async fn remove_engine(&self, engine: &Engine) -> Result<()> {
        let path = format!("/api/engines/{}", engine.engine.id);
        self.send::<()>(Method::DELETE, &path, StatusCode::NO_CONTENT, None)
            .await
            .map(|_| ())
    }

    /// Fetch cluster capacity.
    pub async fn info(&self) -> Result<ClusterInfo> {
        self.get_json("/api/cluster/info").await
    }

    /// List cluster events.
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.get_json("/api/events").await
    }

    /// List accounts.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.get_json("/api/accounts").await
    }

    /// Create an account. The controller answers `204 No Content`.
    pub async fn add_account(&self, account: &Account) -> Result<()> {
        self.send(
            Method::POST,
            "/api/accounts",
            StatusCode::NO_CONTENT,
            Some(account),
        )
        .await
        .map(|_| ())
    }

    /// Delete an account.
    pub async fn delete_account(&self, account: &Account) -> Result<()> {
        self.send(
            Method::DELETE,
            "/api/accounts",
            StatusCode::NO_CONTENT,
            Some(account),
        )
        .await
        .map(|_| ())
    }

    /// List roles.
    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.get_json("/api/roles").await
    }

    /// Fetch a role by name.
    pub async fn role(&self, name: &str) -> Result<Role> {
        let path = format!("/api/roles/{name}");
        self.get_json(&path).await
    }

    /// Exchange a username and password for an auth token.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send_json(Method::POST, "/auth/login", StatusCode::OK, Some(&credentials))
            .await
    }

    /// Change the password of the authenticated account.
    pub async fn change_password(&self, password: &str) -> Result<()> {
        let request = ChangePasswordRequest {
            password: password.to_string(),
        };
        self.send(
            Method::POST,
            "/account/changepassword",
            StatusCode::OK,
            Some(&request),
        )
        .await
        .map(|_| ())
    }

    /// List service keys.
    pub async fn service_keys(&self) -> Result<Vec<ServiceKey>> {
        self.get_json("/api/servicekeys").await
    }

    /// Issue a new service key.
    pub async fn new_service_key(&self, description: &str) -> Result<ServiceKey> {
        let request = ServiceKey::described(description);
        self.send_json(Method::POST, "/api/servicekeys", StatusCode::OK, Some(&request))
            .await
    }

    /// Revoke a service key.
    pub async fn remove_service_key(&self, key: &ServiceKey) -> Result<()> {
        self.send(
            Method::DELETE,
            "/api/servicekeys",
            StatusCode::NO_CONTENT,
            Some(key),
        )
        .await
        .map(|_| ())
    }

    async fn get_json<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json::<(), R>(Method::GET, path, StatusCode::OK, None)
            .await
    }

    async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(method, path, expected, body).await?.json()
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let payload = body.map(encode_body).transpose()?;
        self.executor.execute(path, method, expected, payload).await
    }
}
