//! # In-Memory Transports
//!
//! [`HttpTransport`] implementations that never touch the network. Used by
//! the unit tests of this crate and of the app, and handy for offline demos.
//!
//! - [`StaticTransport`] answers immediately from a route table.
//! - [`GatedTransport`] hands every request to the test, which answers it
//!   whenever (and in whatever order) it likes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpResponse, HttpTransport, Method, ResourceRequest};

// =============================================================================
// Static Transport
// =============================================================================

#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    NetworkFailure(String),
}

/// Route-table transport. Unknown routes answer `404 Not Found`.
#[derive(Debug, Default)]
pub struct StaticTransport {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    calls: Mutex<Vec<ResourceRequest>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method path` with `response`.
    pub fn route(self, method: Method, path: impl Into<String>, response: HttpResponse) -> Self {
        self.set(method, path, Reply::Response(response));
        self
    }

    /// Makes `method path` fail as if the server were unreachable.
    pub fn fail(self, method: Method, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.set(method, path, Reply::NetworkFailure(message.into()));
        self
    }

    /// Replaces the answer of a route after construction.
    pub fn set_route(&self, method: Method, path: impl Into<String>, response: HttpResponse) {
        self.set(method, path, Reply::Response(response));
    }

    fn set(&self, method: Method, path: impl Into<String>, reply: Reply) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path.into()), reply);
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ResourceRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn send(&self, request: &ResourceRequest) -> ClientResult<HttpResponse> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let reply = self
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(request.method(), request.path().to_string()))
            .cloned();

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::NetworkFailure(message)) => Err(ClientError::Network(message)),
            None => Ok(HttpResponse::empty(404)),
        }
    }
}

// =============================================================================
// Gated Transport
// =============================================================================

/// A request waiting for the test to answer it.
pub struct PendingRequest {
    pub request: ResourceRequest,
    reply: oneshot::Sender<ClientResult<HttpResponse>>,
}

impl PendingRequest {
    /// Completes the request. Returns false if the sender already gave up.
    pub fn respond(self, response: HttpResponse) -> bool {
        self.reply.send(Ok(response)).is_ok()
    }

    /// Completes the request with a network failure.
    pub fn fail(self, message: impl Into<String>) -> bool {
        self.reply
            .send(Err(ClientError::Network(message.into())))
            .is_ok()
    }
}

/// Transport whose responses are released one by one by the test.
///
/// ## Usage
/// ```rust,ignore
/// let (transport, mut pending) = GatedTransport::new();
/// resource.request(ResourceRequest::get("/api/recipes/1"));
///
/// let first = pending.recv().await.unwrap();
/// first.respond(HttpResponse::json(200, &json!({"_id": "1", "title": "Toast"})));
/// ```
pub struct GatedTransport {
    tx: mpsc::UnboundedSender<PendingRequest>,
}

impl GatedTransport {
    pub fn new() -> (std::sync::Arc<Self>, mpsc::UnboundedReceiver<PendingRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (std::sync::Arc::new(GatedTransport { tx }), rx)
    }
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn send(&self, request: &ResourceRequest) -> ClientResult<HttpResponse> {
        let (reply, reply_rx) = oneshot::channel();
        self.tx
            .send(PendingRequest {
                request: request.clone(),
                reply,
            })
            .map_err(|_| ClientError::Network("gate closed".into()))?;

        reply_rx
            .await
            .map_err(|_| ClientError::Network("request abandoned".into()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_routes() {
        let transport = StaticTransport::new()
            .route(Method::Get, "/api/recipes", HttpResponse::json(200, &json!([])))
            .fail(Method::Delete, "/api/recipes/1", "connection refused");

        let ok = transport.send(&ResourceRequest::get("/api/recipes")).await.unwrap();
        assert_eq!(ok.status, 200);

        let missing = transport.send(&ResourceRequest::get("/api/nope")).await.unwrap();
        assert_eq!(missing.status, 404);

        let err = transport
            .send(&ResourceRequest::delete("/api/recipes/1"))
            .await
            .unwrap_err();
        assert!(err.is_network_error());

        assert_eq!(transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_gated_round_trip() {
        let (transport, mut pending) = GatedTransport::new();

        let task = tokio::spawn({
            let transport = transport.clone();
            async move { transport.send(&ResourceRequest::get("/x")).await }
        });

        let request = pending.recv().await.unwrap();
        assert_eq!(request.request.path(), "/x");
        assert!(request.respond(HttpResponse::empty(204)));

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status, 204);
    }
}
