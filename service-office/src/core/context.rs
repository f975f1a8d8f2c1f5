//! Page dependencies
//!
//! Everything a page touches outside its own state is injected here:
//! the API, the session read at start-up, navigation and dialogs.

use std::sync::Arc;
use std::time::Duration;

use service_client::{ClientError, HttpClient, ServiceOfficeApi};
use shared::Session;

use super::dialog::Dialog;
use super::error::PageError;
use super::navigation::{Navigator, Route};

/// Where and when to go after the server rejects the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    pub login_route: Route,
    pub delay: Duration,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            login_route: Route::Login,
            delay: Duration::from_millis(2000),
        }
    }
}

pub struct PageContext<C> {
    pub api: ServiceOfficeApi<C>,
    pub session: Session,
    pub navigator: Arc<dyn Navigator>,
    pub dialog: Arc<dyn Dialog>,
    pub redirect: RedirectPolicy,
}

impl<C: HttpClient> PageContext<C> {
    pub fn new(
        http: C,
        session: Session,
        navigator: Arc<dyn Navigator>,
        dialog: Arc<dyn Dialog>,
    ) -> Self {
        Self {
            api: ServiceOfficeApi::new(http),
            session,
            navigator,
            dialog,
            redirect: RedirectPolicy::default(),
        }
    }

    pub fn with_redirect(mut self, redirect: RedirectPolicy) -> Self {
        self.redirect = redirect;
        self
    }

    pub fn branch_label(&self) -> &str {
        self.session.branch_label()
    }

    /// Classify a failed page load.
    ///
    /// An expired session schedules the delayed redirect to login; no
    /// other failure navigates.
    pub fn load_failed(&self, err: &ClientError, fallback: &str) -> PageError {
        let page_err = PageError::from_client(err, fallback);
        if page_err.is_session_expired() {
            tracing::warn!(
                to = %self.redirect.login_route,
                delay_ms = self.redirect.delay.as_millis() as u64,
                "session expired, redirecting to login"
            );
            self.navigator
                .navigate_after(self.redirect.login_route, self.redirect.delay);
        } else {
            tracing::error!(error = %err, "{}", fallback);
        }
        page_err
    }
}
