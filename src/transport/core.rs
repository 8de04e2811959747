//! # Core Transport Abstraction
//!
//! This module defines the contract between the workflow services and the
//! HTTP layer.
//!
//! ## Key Types
//!
//! - [`Transport`]: the trait every service depends on (GET/POST/PATCH/DELETE).
//! - [`ApiResponse`] / [`TransportError`]: the structured outcomes of a call.
//! - [`Payload`]: request body, JSON or form-encoded.
//! - [`Session`]: the explicit bearer-token context.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

/// Errors produced by a transport call.
///
/// Services either propagate these wholesale or classify them by status
/// class; they never retry.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// The server-provided `detail` string, when the body carried one.
        detail: Option<String>,
    },
}

impl TransportError {
    /// The status code, when the failure was an HTTP-level rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(_) => None,
        }
    }

    /// The server-provided detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Status { detail, .. } => detail.as_deref(),
            TransportError::Network(_) => None,
        }
    }
}

/// A successful response: status code plus parsed JSON body.
///
/// Bodies that are empty or not JSON (e.g. a 204 on delete) come back as
/// [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Request body for `POST` calls.
///
/// # Architecture Note
/// The token endpoint wants `application/x-www-form-urlencoded`, everything
/// else wants JSON. Keeping both under one enum keeps the trait at exactly
/// four operations, one per verb.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Form(Vec<(String, String)>),
}

/// The four operations the server is consumed through.
///
/// Implementations must return `Ok` only for success statuses; a non-2xx
/// response becomes [`TransportError::Status`] with the server `detail`
/// extracted when present. That way callers never have to inspect a
/// successful response for failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, TransportError>;

    async fn post(&self, path: &str, payload: Payload) -> Result<ApiResponse, TransportError>;

    /// `PATCH` with an optional JSON body. The archive toggle sends none.
    async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, TransportError>;

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError>;
}

/// Shared bearer-token context.
///
/// # Architecture Note
/// The original client kept the token in a mutable default header on a
/// global HTTP instance. Here the session is an explicit handle with
/// `set_token`/`clear`, cloned into whatever needs it (the transport for
/// attachment, the session gate for login/logout). Clones share one slot.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token carried by every subsequent authenticated request.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    /// Drops the credential; subsequent requests go out unauthenticated.
    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// The current token, if a login succeeded since the last clear.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_clones_share_one_token_slot() {
        let session = Session::new();
        let other = session.clone();

        session.set_token("abc");
        assert_eq!(other.bearer().as_deref(), Some("abc"));
        assert!(other.is_authenticated());

        other.clear();
        assert_eq!(session.bearer(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn transport_error_exposes_status_and_detail() {
        let err = TransportError::Status {
            status: 400,
            detail: Some("SKU already exists or invalid data.".to_string()),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("SKU already exists or invalid data."));

        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), None);
    }
}
