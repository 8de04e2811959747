//! # Mock Transport
//!
//! Utilities for testing the workflow services in isolation.
//!
//! Use [`MockTransport::new`] to get a scripted transport, queue responses
//! with the `expect_*` builders, drive the real services against it, then
//! inspect [`MockTransport::requests`] and call [`MockTransport::verify`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::core::{ApiResponse, Payload, Transport, TransportError};

/// The HTTP verb of a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request the mock received, captured for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub payload: Option<Payload>,
}

struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, TransportError>,
}

/// A scripted [`Transport`] with expectation tracking.
///
/// # Testing Strategy
/// We don't want a real server in unit tests. The mock pops one queued
/// expectation per call, panics on a verb/path mismatch (so a test fails
/// loudly when the service issues something unexpected), and records every
/// request so tests can assert the exact mutation that went out, including
/// the case where *no* request must be issued at all.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new();
/// mock.expect_get("/items/").return_json(json!([]));
/// mock.expect_patch("/items/1").return_json(json!({}));
///
/// // drive the service with mock.clone() as Arc<dyn Transport>...
///
/// mock.verify();
/// ```
#[derive(Clone)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Creates a mock with no expectations queued.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Expects a `GET` to `path`.
    pub fn expect_get(&self, path: &str) -> ExpectationBuilder<'_> {
        self.expect(Method::Get, path)
    }

    /// Expects a `POST` to `path`.
    pub fn expect_post(&self, path: &str) -> ExpectationBuilder<'_> {
        self.expect(Method::Post, path)
    }

    /// Expects a `PATCH` to `path`.
    pub fn expect_patch(&self, path: &str) -> ExpectationBuilder<'_> {
        self.expect(Method::Patch, path)
    }

    /// Expects a `DELETE` to `path`.
    pub fn expect_delete(&self, path: &str) -> ExpectationBuilder<'_> {
        self.expect(Method::Delete, path)
    }

    fn expect(&self, method: Method, path: &str) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            method,
            path: path.to_string(),
        }
    }

    /// Every request the mock has received, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics unless all queued expectations were consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("not all expectations were met, {} remaining", remaining);
        }
    }

    fn handle(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        payload: Option<Payload>,
    ) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            query,
            payload,
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == method && exp.path == path => exp.response,
            Some(exp) => panic!(
                "expected {:?} {}, got {:?} {}",
                exp.method, exp.path, method, path
            ),
            None => panic!("unexpected request: {:?} {}", method, path),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, TransportError> {
        let query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.handle(Method::Get, path, query, None)
    }

    async fn post(&self, path: &str, payload: Payload) -> Result<ApiResponse, TransportError> {
        self.handle(Method::Post, path, Vec::new(), Some(payload))
    }

    async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, TransportError> {
        self.handle(Method::Patch, path, Vec::new(), body.map(Payload::Json))
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.handle(Method::Delete, path, Vec::new(), None)
    }
}

/// Builder for a single queued response.
pub struct ExpectationBuilder<'a> {
    mock: &'a MockTransport,
    method: Method,
    path: String,
}

impl ExpectationBuilder<'_> {
    /// Queues a 200 response with the given JSON body.
    pub fn return_json(self, body: Value) {
        self.push(Ok(ApiResponse::new(200, body)));
    }

    /// Queues a success response with an explicit status (e.g. 201, 204).
    pub fn return_status(self, status: u16, body: Value) {
        self.push(Ok(ApiResponse::new(status, body)));
    }

    /// Queues an HTTP-level rejection.
    pub fn return_status_err(self, status: u16, detail: Option<&str>) {
        self.push(Err(TransportError::Status {
            status,
            detail: detail.map(str::to_owned),
        }));
    }

    /// Queues a connection-level failure.
    pub fn return_network_err(self, message: &str) {
        self.push(Err(TransportError::Network(message.to_string())));
    }

    fn push(self, response: Result<ApiResponse, TransportError>) {
        self.mock.expectations.lock().unwrap().push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn mock_replays_queued_responses_and_records_requests() {
        let mock = MockTransport::new();
        mock.expect_get("/items/").return_json(json!([{"id": 1}]));
        mock.expect_delete("/items/1").return_status(204, Value::Null);

        let response = mock.get("/items/", &[("is_archived", "false")]).await.unwrap();
        assert_eq!(response.body, json!([{"id": 1}]));

        let response = mock.delete("/items/1").await.unwrap();
        assert_eq!(response.status, 204);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(
            requests[0].query,
            vec![("is_archived".to_string(), "false".to_string())]
        );
        assert_eq!(requests[1].method, Method::Delete);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations")]
    async fn verify_panics_on_unmet_expectations() {
        let mock = MockTransport::new();
        mock.expect_get("/items/").return_json(json!([]));
        mock.verify();
    }
}
