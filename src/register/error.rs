//! Error types for the registration flow.

use thiserror::Error;

/// Errors that can occur during registration.
///
/// Network failures are classified by status class so the user sees one
/// appropriate message per attempt: the server's own detail for a 4xx, a
/// generic server-error message for a 5xx, a connectivity message for
/// everything else.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// Local input failure; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the registration (400-class).
    #[error("{0}")]
    Rejected(String),

    /// The server fell over (500-class).
    #[error("server error, please try again later")]
    Server,

    /// No usable response at all.
    #[error("could not reach the server, check your connection")]
    Connectivity,

    /// A previous submission is still in flight.
    #[error("a registration attempt is already in progress")]
    AlreadyInFlight,
}
