//! # HTTP Transport
//!
//! The seam between recipe-client and the network.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                    │
//! │                                                                         │
//! │  ResourceRequest { GET, "/api/recipes/1", body: None }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HttpTransport::send()                                                  │
//! │  ├── ReqwestTransport: resolve against base URL, apply timeout         │
//! │  └── test transports: scripted in-memory responses                     │
//! │       │                                                                 │
//! │       ├── could not send/receive ──► ClientError::Network / Timeout     │
//! │       ▼                                                                 │
//! │  HttpResponse { status, body }                                          │
//! │       │                                                                 │
//! │       ├── non-2xx ───────────────► ClientError::Status ("Not Found")    │
//! │       ├── unparseable body ──────► ClientError::Decode                  │
//! │       ▼                                                                 │
//! │  T (parsed payload)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{reason_phrase, ClientError, ClientResult};

// =============================================================================
// Request
// =============================================================================

/// HTTP methods used by the recipe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A resource identifier: URL path plus optional method and JSON body.
///
/// Two requests are the same resource only if method, path and body are all
/// equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
}

impl ResourceRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ResourceRequest {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attaches a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches any serializable value as the JSON body.
    pub fn with_json<B: Serialize>(self, body: &B) -> ClientResult<Self> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

impl std::fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// =============================================================================
// Response
// =============================================================================

/// Raw response: status code and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// Response with no body.
    pub fn empty(status: u16) -> Self {
        Self::new(status, Bytes::new())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reason phrase of the status code (`"Not Found"` for 404).
    pub fn reason(&self) -> String {
        reason_phrase(self.status)
    }

    /// Fails with [`ClientError::Status`] unless the status is 2xx.
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::from_status(self.status))
        }
    }

    /// Parses the body as JSON. An empty body parses as `null`, so
    /// `204 No Content` works for `()` and `Option<_>` targets.
    pub fn json_body<T: DeserializeOwned>(&self) -> ClientResult<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        Ok(serde_json::from_slice(body)?)
    }
}

// =============================================================================
// Transport Trait
// =============================================================================

/// Sends one request and returns the raw response.
///
/// Implementations report only network failures as errors; status codes are
/// left for the caller to interpret.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ResourceRequest) -> ClientResult<HttpResponse>;
}

/// Sends `request` and parses a 2xx JSON response into `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    request: &ResourceRequest,
) -> ClientResult<T> {
    transport.send(request).await?.error_for_status()?.json_body()
}

// =============================================================================
// Reqwest Transport
// =============================================================================

/// Production transport backed by `reqwest`.
///
/// ## Usage
/// ```rust,ignore
/// let config = ClientConfig::load_or_default(None);
/// let transport = Arc::new(ReqwestTransport::new(&config)?);
///
/// let response = transport.send(&ResourceRequest::get("/api/recipes")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Builds a transport from validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut base_url = config.base_url()?;
        // Request paths are joined relative to the base so that a base with
        // a path prefix ("https://host/recipes/") keeps it.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(ReqwestTransport {
            client,
            base_url,
            timeout_secs: config.api.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request path against the base URL.
    pub fn resolve(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn map_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else {
            ClientError::from(err)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ResourceRequest) -> ClientResult<HttpResponse> {
        let url = self.resolve(request.path())?;
        debug!(method = %request.method(), %url, "Sending request");

        let mut builder = self
            .client
            .request(request.method().into(), url)
            .header(ACCEPT, "application/json");

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        debug!(%request, status, bytes = body.len(), "Received response");
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_identity() {
        let a = ResourceRequest::get("/api/recipes/1");
        let b = ResourceRequest::get("/api/recipes/1");
        let c = ResourceRequest::get("/api/recipes/2");
        let d = ResourceRequest::new(Method::Post, "/api/recipes/1").with_body(json!({}));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a.to_string(), "GET /api/recipes/1");
    }

    #[test]
    fn test_response_status_handling() {
        assert!(HttpResponse::empty(204).error_for_status().is_ok());
        assert_eq!(HttpResponse::empty(404).reason(), "Not Found");
        let err = HttpResponse::empty(404).error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn test_json_body() {
        let response = HttpResponse::json(200, &json!([{"_id": "1", "title": "Toast"}]));
        let value: serde_json::Value = response.json_body().unwrap();
        assert_eq!(value[0]["title"], "Toast");

        let empty = HttpResponse::empty(204);
        assert!(empty.json_body::<()>().is_ok());
        let none: Option<u32> = empty.json_body().unwrap();
        assert!(none.is_none());

        let garbage = HttpResponse::new(200, "<html>");
        let result: ClientResult<serde_json::Value> = garbage.json_body();
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_resolve_against_base() {
        let transport = ReqwestTransport::new(&ClientConfig::with_base_url("http://localhost:5000")).unwrap();
        assert_eq!(
            transport.resolve("/api/recipes").unwrap().as_str(),
            "http://localhost:5000/api/recipes"
        );

        let prefixed =
            ReqwestTransport::new(&ClientConfig::with_base_url("https://example.com/book")).unwrap();
        assert_eq!(
            prefixed.resolve("/api/recipes/7").unwrap().as_str(),
            "https://example.com/book/api/recipes/7"
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        let result = ReqwestTransport::new(&ClientConfig::with_base_url("mailto:chef@example.com"));
        assert!(result.is_err());
    }
}
