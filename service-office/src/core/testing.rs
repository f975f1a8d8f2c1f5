//! Fakes for page tests

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use service_client::mock::MockHttpClient;
use shared::{Session, UserInfo};

use super::context::PageContext;
use super::dialog::Dialog;
use super::navigation::{Navigator, Route};

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub immediate: Mutex<Vec<Route>>,
    pub scheduled: Mutex<Vec<(Route, Duration)>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.immediate.lock().push(route);
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        self.scheduled.lock().push((route, delay));
    }
}

impl RecordingNavigator {
    pub fn navigated(&self) -> bool {
        !self.immediate.lock().is_empty() || !self.scheduled.lock().is_empty()
    }
}

/// Answers confirmations from a script (default: yes) and records alerts
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    pub answers: Mutex<VecDeque<bool>>,
    pub confirmations: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
}

impl ScriptedDialog {
    pub fn answering(answer: bool) -> Self {
        let dialog = Self::default();
        dialog.answers.lock().push_back(answer);
        dialog
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().push(message.to_string());
        self.answers.lock().pop_front().unwrap_or(true)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}

pub struct Harness {
    pub navigator: Arc<RecordingNavigator>,
    pub dialog: Arc<ScriptedDialog>,
}

pub fn staff_session() -> Session {
    Session::new(
        "test-token",
        UserInfo {
            branch_id: Some("BR-01".into()),
            ..Default::default()
        },
    )
}

pub fn context(mock: MockHttpClient, dialog: ScriptedDialog) -> (PageContext<MockHttpClient>, Harness) {
    let navigator = Arc::new(RecordingNavigator::default());
    let dialog = Arc::new(dialog);
    let ctx = PageContext::new(mock, staff_session(), navigator.clone(), dialog.clone());
    (ctx, Harness { navigator, dialog })
}
