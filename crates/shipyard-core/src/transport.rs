//! HTTP transport abstraction.
//!
//! The executor talks to the network only through [`Transport`], so clients
//! can be handed a preconfigured reqwest client, or a test double, at
//! construction time instead of sharing a process-wide default.

use crate::client::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;

/// A fully described outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Headers to attach, in order
    pub headers: Vec<(&'static str, String)>,
    /// Raw body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Returns the value of the first header with the given name.
    ///
    /// Names are compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A fully buffered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status
    pub status: StatusCode,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is empty or does not match `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(&self.body).map_err(|err| Error::Decode(err.to_string()))
    }
}

/// Sends a single HTTP request and buffers the response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue `request` and return the status and body.
    ///
    /// Implementations must not interpret the status code.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport from the HTTP client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the underlying client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if !config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(&ClientConfig::new()).unwrap()
    }

    #[tokio::test]
    async fn sends_method_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/engines"))
            .and(header("X-Access-Token", "admin:tok"))
            .and(body_json(json!({"id": "e1"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport()
            .send(HttpRequest {
                method: Method::POST,
                url: format!("{}/api/engines", server.uri()),
                headers: vec![("X-Access-Token", "admin:tok".to_string())],
                body: Some(br#"{"id":"e1"}"#.to_vec()),
            })
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn sets_no_extra_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        transport()
            .send(HttpRequest {
                method: Method::POST,
                url: format!("{}/auth/login", server.uri()),
                headers: vec![("X-Service-Key", "k".to_string())],
                body: Some(b"{}".to_vec()),
            })
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let received = &requests[0];
        assert!(received.headers.get("content-type").is_none());
        assert!(received.headers.get("user-agent").is_none());
        assert!(received.headers.get("accept-encoding").is_none());
        assert_eq!(received.headers.get("x-service-key").unwrap(), "k");
    }

    #[tokio::test]
    async fn returns_status_without_interpreting_it() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let response = transport()
            .send(HttpRequest {
                method: Method::GET,
                url: format!("{}/api/events", server.uri()),
                headers: Vec::new(),
                body: None,
            })
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "boom");
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let url = format!("http://127.0.0.1:{port}/api/events");

        let err = transport()
            .send(HttpRequest {
                method: Method::GET,
                url,
                headers: Vec::new(),
                body: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn response_json_decodes_and_reports_errors() {
        let response = HttpResponse::new(StatusCode::OK, br#"[{"id":"a"}]"#.to_vec());
        let values: Vec<serde_json::Value> = response.json().unwrap();
        assert_eq!(values.len(), 1);

        let empty = HttpResponse::new(StatusCode::OK, Vec::new());
        let err = empty.json::<Vec<serde_json::Value>>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn request_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: Method::GET,
            url: "http://shipyard.local/api/roles".into(),
            headers: vec![("X-Access-Token", "a:b".into())],
            body: None,
        };
        assert_eq!(request.header("x-access-token"), Some("a:b"));
        assert_eq!(request.header("X-Service-Key"), None);
    }
}
