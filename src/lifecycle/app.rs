//! The application orchestrator.

use std::sync::Arc;

use crate::dashboard::{DashboardController, Notice, Notifier};
use crate::model::Credentials;
use crate::register::{RegistrationFlow, RegistrationInput};
use crate::session::SessionGate;
use crate::transport::{HttpTransport, Session, Transport};

use super::navigation::{Navigator, Screen};

/// Owns the services and wires them to the collaborators.
///
/// `ImsApp` is the composition root: it builds the transport and session,
/// hands clones to each service, and translates service outcomes into
/// navigation signals and notices the way the screens did.
///
/// # Example
///
/// ```ignore
/// let mut app = ImsApp::new("http://localhost:8000", navigator, notifier);
/// app.login("alice", "hunter2").await;
/// app.dashboard.refresh().await;
/// ```
pub struct ImsApp {
    /// The dashboard screen's controller, exposed for direct interaction.
    pub dashboard: DashboardController,
    gate: SessionGate,
    registration: RegistrationFlow,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl ImsApp {
    /// Builds the app against a real HTTP server.
    pub fn new(
        base_url: &str,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = Session::new();
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(base_url, session.clone()));
        Self::with_transport(transport, session, navigator, notifier)
    }

    /// Builds the app against any transport (tests inject the mock here).
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        session: Session,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            dashboard: DashboardController::new(transport.clone(), notifier.clone()),
            gate: SessionGate::new(transport.clone(), session),
            registration: RegistrationFlow::new(transport),
            navigator,
            notifier,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub fn registration(&self) -> &RegistrationFlow {
        &self.registration
    }

    /// Login screen submit: exchange credentials, then enter the dashboard.
    ///
    /// Failure surfaces the single undifferentiated login notice.
    pub async fn login(&self, username: &str, password: &str) {
        let credentials = Credentials::new(username, password);
        match self.gate.login(&credentials).await {
            Ok(()) => self.navigator.navigate(Screen::Dashboard),
            Err(_) => self.notifier.notify(Notice::error(
                "login failed",
                "please check your credentials.",
            )),
        }
    }

    /// Header logout: drop the token and fall back to the login screen.
    pub fn logout(&self) {
        self.gate.logout();
        self.navigator.replace(Screen::Login);
    }

    /// Sign-up screen submit: one notice per attempt, then back to login on
    /// success.
    pub async fn register(&self, input: RegistrationInput) {
        match self.registration.register(&input).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "registered",
                    "your account is ready. time to log in.",
                ));
                self.navigator.replace(Screen::Login);
            }
            Err(e) => self.notifier.notify(Notice::error("signup error", e.to_string())),
        }
    }
}
