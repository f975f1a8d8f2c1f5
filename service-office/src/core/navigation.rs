//! Router shell and navigation
//!
//! Maps URL paths to pages; anything unknown goes to the login route.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    Dashboard,
    DueServices,
    PastServices,
    ServiceCatalog,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Login,
        Route::Home,
        Route::Dashboard,
        Route::DueServices,
        Route::PastServices,
        Route::ServiceCatalog,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/servicelogin",
            Self::Home => "/",
            Self::Dashboard => "/serviceofficedashboard",
            Self::DueServices => "/viewdueservices",
            Self::PastServices => "/viewpastservices",
            Self::ServiceCatalog => "/updateservicetable",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Service Office Login",
            Self::Home | Self::Dashboard => "Service Office Dashboard",
            Self::DueServices => "Due Services",
            Self::PastServices => "Past Services",
            Self::ServiceCatalog => "Service Catalog",
        }
    }

    /// Resolve a path. Query strings and trailing slashes are ignored;
    /// unknown paths fall through to [`Route::Login`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|r| r.path() == normalized)
            .unwrap_or(Self::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Navigation seam injected into pages
pub trait Navigator: Send + Sync {
    /// Navigate immediately
    fn navigate(&self, route: Route);

    /// Navigate once `delay` has elapsed, without blocking the caller
    fn navigate_after(&self, route: Route, delay: Duration);
}

/// Navigator backed by tokio timers
///
/// Delayed navigations run as spawned tasks; [`wait_pending`](Self::wait_pending)
/// lets a short-lived process finish them before exiting.
#[derive(Debug, Clone)]
pub struct TokioNavigator {
    current: Arc<Mutex<Route>>,
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl TokioNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.lock()
    }

    /// Await every scheduled navigation
    pub async fn wait_pending(&self) {
        let handles: Vec<_> = std::mem::take(&mut *self.pending.lock());
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "delayed navigation task failed");
            }
        }
    }
}

impl Navigator for TokioNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(to = %route, "navigate");
        *self.current.lock() = route;
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        tracing::debug!(to = %route, delay_ms = delay.as_millis() as u64, "navigation scheduled");
        let current = self.current.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(to = %route, "navigate");
            *current.lock() = route;
        });
        self.pending.lock().push(handle);
    }
}
