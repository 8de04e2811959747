//! Error types for admin actions.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while preparing or dispatching an admin action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The id input did not parse as an integer; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The mutation failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
