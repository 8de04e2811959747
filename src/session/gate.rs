//! Credential exchange against `POST /token`.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::model::{Credentials, TokenResponse};
use crate::transport::{Payload, Session, Transport};

use super::error::SessionError;

/// Exchanges credentials for a bearer token and manages the session slot.
pub struct SessionGate {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl SessionGate {
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    /// Submits the OAuth2 password-grant form and stores the token.
    ///
    /// The fixed empty `scope`/`client_id`/`client_secret` fields are what
    /// the server's form parser expects.
    #[instrument(skip_all, fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), SessionError> {
        let form = vec![
            ("username".to_string(), credentials.username.clone()),
            ("password".to_string(), credentials.password.clone()),
            ("scope".to_string(), String::new()),
            ("grant_type".to_string(), "password".to_string()),
            ("client_id".to_string(), String::new()),
            ("client_secret".to_string(), String::new()),
        ];

        let response = self
            .transport
            .post("/token", Payload::Form(form))
            .await
            .map_err(|e| {
                debug!(error = %e, "token exchange failed");
                SessionError::LoginFailed
            })?;

        let token: TokenResponse = serde_json::from_value(response.body).map_err(|e| {
            debug!(error = %e, "token response unreadable");
            SessionError::LoginFailed
        })?;

        self.session.set_token(token.access_token);
        info!("session established");
        Ok(())
    }

    /// Clears the stored token; subsequent requests carry no credential.
    pub fn logout(&self) {
        self.session.clear();
        info!("session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
