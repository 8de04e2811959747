//! The navigation collaborator.
//!
//! The screen stack itself is out of scope; this crate only ever emits two
//! signals, "go to screen X" and "replace the current screen with X".

/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
}

/// Sink for navigation signals.
pub trait Navigator: Send + Sync {
    /// Pushes a screen onto the stack.
    fn navigate(&self, screen: Screen);

    /// Replaces the current screen, dropping it from history.
    fn replace(&self, screen: Screen);
}
