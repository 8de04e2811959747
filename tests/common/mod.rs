//! Recording collaborators shared by the integration tests.

use std::sync::{Arc, Mutex};

use ims_client::dashboard::{Notice, Notifier};
use ims_client::lifecycle::{Navigator, Screen};

/// A navigation signal as the app emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    Navigate(Screen),
    Replace(Screen),
}

#[derive(Default)]
pub struct RecordingNavigator {
    signals: Mutex<Vec<NavSignal>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn signals(&self) -> Vec<NavSignal> {
        self.signals.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen) {
        self.signals.lock().unwrap().push(NavSignal::Navigate(screen));
    }

    fn replace(&self, screen: Screen) {
        self.signals.lock().unwrap().push(NavSignal::Replace(screen));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
