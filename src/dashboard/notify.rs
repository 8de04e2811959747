//! The user-notification collaborator.
//!
//! Rendering is out of scope for this crate; a front end implements
//! [`Notifier`] however it shows alerts. The contract the services uphold is
//! that every attempted action produces at most one success notice and every
//! error produces exactly one error notice. Nothing is swallowed, nothing
//! panics.

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One user-visible alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for user-visible alerts.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
