//! Error types for the session gate.

use thiserror::Error;

/// Errors that can occur during login.
///
/// Deliberately undifferentiated: bad credentials, a 5xx, and an unreachable
/// server all collapse into one variant. The underlying cause is logged at
/// debug level but never shown to the user at this layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("login failed, please check your credentials")]
    LoginFailed,
}
