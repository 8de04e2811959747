//! Local validation and submission against `POST /register`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument};

use crate::transport::{Payload, Transport, TransportError};

use super::error::RegisterError;

/// Default rejection message when a 400 arrives without a `detail` body.
const DEFAULT_REJECTION: &str = "that username or email is already taken.";

/// Raw sign-up form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validates and submits new-account registrations.
///
/// An in-flight flag rejects overlapping submissions: the submit control is
/// disabled while a request is outstanding, and this guard backs that up at
/// the service layer.
pub struct RegistrationFlow {
    transport: Arc<dyn Transport>,
    in_flight: AtomicBool,
}

impl RegistrationFlow {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Runs the full registration attempt.
    ///
    /// Local checks come first and never touch the network: every field must
    /// be non-empty and the two passwords must match.
    #[instrument(skip_all, fields(username = %input.username))]
    pub async fn register(&self, input: &RegistrationInput) -> Result<(), RegisterError> {
        validate(input)?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(RegisterError::AlreadyInFlight);
        }
        let result = self.submit(input).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit(&self, input: &RegistrationInput) -> Result<(), RegisterError> {
        let payload = json!({
            "username": input.username.trim(),
            "email": input.email.trim(),
            "password": input.password,
        });

        match self.transport.post("/register", Payload::Json(payload)).await {
            Ok(_) => {
                info!("registration accepted");
                Ok(())
            }
            Err(TransportError::Status { status, detail }) if (400..500).contains(&status) => {
                debug!(status, "registration rejected");
                Err(RegisterError::Rejected(
                    detail.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
                ))
            }
            Err(TransportError::Status { status, .. }) => {
                debug!(status, "registration hit a server error");
                Err(RegisterError::Server)
            }
            Err(TransportError::Network(reason)) => {
                debug!(%reason, "registration never reached the server");
                Err(RegisterError::Connectivity)
            }
        }
    }
}

fn validate(input: &RegistrationInput) -> Result<(), RegisterError> {
    if input.username.is_empty()
        || input.email.is_empty()
        || input.password.is_empty()
        || input.confirm_password.is_empty()
    {
        return Err(RegisterError::Validation(
            "all fields are required.".to_string(),
        ));
    }
    if input.password != input.confirm_password {
        return Err(RegisterError::Validation(
            "passwords do not match.".to_string(),
        ));
    }
    Ok(())
}
