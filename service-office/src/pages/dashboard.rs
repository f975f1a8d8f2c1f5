//! Landing page: branch label and the menu of service pages

use service_client::HttpClient;

use crate::core::{PageContext, Route};

pub const HEADERS: [&str; 2] = ["Page", "Path"];

/// Menu entries, in display order
pub const MENU: [Route; 3] = [Route::DueServices, Route::PastServices, Route::ServiceCatalog];

pub struct DashboardPage<C> {
    ctx: PageContext<C>,
}

impl<C: HttpClient> DashboardPage<C> {
    pub fn new(ctx: PageContext<C>) -> Self {
        Self { ctx }
    }

    pub fn title(&self) -> &'static str {
        Route::Dashboard.title()
    }

    pub fn branch_label(&self) -> &str {
        self.ctx.branch_label()
    }

    /// Staff display name, when the stored user carries one
    pub fn user_name(&self) -> Option<&str> {
        self.ctx
            .session
            .user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }

    pub fn context(&self) -> &PageContext<C> {
        &self.ctx
    }

    pub fn menu(&self) -> &'static [Route] {
        &MENU
    }

    /// Follow a menu entry
    pub fn open(&self, route: Route) {
        self.ctx.navigator.navigate(route);
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        MENU.iter()
            .map(|r| vec![r.title().to_string(), r.path().to_string()])
            .collect()
    }
}
