//! `reqwest`-backed implementation of [`Transport`].

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

use super::core::{ApiResponse, Payload, Session, Transport, TransportError};

/// The production transport.
///
/// Owns a `reqwest::Client`, the API base URL, and a [`Session`] clone.
/// Every outgoing request is routed through [`HttpTransport::authorize`] so
/// bearer attachment happens in exactly one place.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches `Authorization: Bearer <token>` when a session token is set.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<ApiResponse, TransportError> {
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        // Delete returns 204 with an empty body; treat anything unparseable as null.
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !(200..300).contains(&status) {
            let detail = body
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_owned);
            debug!(status, ?detail, "request rejected");
            return Err(TransportError::Status { status, detail });
        }

        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, TransportError> {
        let builder = self.authorize(self.client.get(self.url(path)).query(query));
        self.execute(builder).await
    }

    async fn post(&self, path: &str, payload: Payload) -> Result<ApiResponse, TransportError> {
        let builder = self.client.post(self.url(path));
        let builder = match payload {
            Payload::Json(body) => builder.json(&body),
            Payload::Form(fields) => builder.form(&fields),
        };
        self.execute(self.authorize(builder)).await
    }

    async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, TransportError> {
        let mut builder = self.client.patch(self.url(path));
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.execute(self.authorize(builder)).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        let builder = self.authorize(self.client.delete(self.url(path)));
        self.execute(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_attached_after_login() {
        let session = Session::new();
        let transport = HttpTransport::new("http://localhost:8000", session.clone());
        session.set_token("abc");

        let request = transport
            .authorize(transport.client.get(transport.url("/items/")))
            .build()
            .unwrap();

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer abc");
    }

    #[test]
    fn no_header_without_a_token() {
        let session = Session::new();
        let transport = HttpTransport::new("http://localhost:8000", session);

        let request = transport
            .authorize(transport.client.get(transport.url("/items/")))
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let transport = HttpTransport::new("http://localhost:8000/", Session::new());
        assert_eq!(transport.url("/token"), "http://localhost:8000/token");
    }
}
