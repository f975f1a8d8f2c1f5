//! Terminal front end
//!
//! Each subcommand builds its page with the stored session, runs the page
//! operation and prints the resulting state. A page error becomes the
//! command's error so the process exits non-zero.

use std::sync::Arc;

use anyhow::{Context, bail};
use service_client::{HttpClient, NetworkHttpClient};
use shared::Session;
use shared::models::Availability;

use crate::cli::Commands;
use crate::core::{AppConfig, Dialog, PageContext, Route, TerminalDialog, TokioNavigator};
use crate::pages::{
    Completion, DashboardPage, DraftEdit, DueServicesPage, FilterField, LoadState, PastServicesPage,
    ServiceCatalogPage, dashboard, due_services, past_services, service_catalog,
};
use crate::utils::Table;

pub struct App {
    config: AppConfig,
    session: Session,
    navigator: TokioNavigator,
}

impl App {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            config,
            session,
            navigator: TokioNavigator::new(Route::Dashboard),
        }
    }

    pub fn navigator(&self) -> &TokioNavigator {
        &self.navigator
    }

    fn context(&self, assume_yes: bool) -> anyhow::Result<PageContext<NetworkHttpClient>> {
        let http = self
            .config
            .client_config(self.session.token())
            .build_http_client()
            .context("failed to build HTTP client")?;
        let dialog: Arc<dyn Dialog> = Arc::new(TerminalDialog::new(assume_yes));
        Ok(
            PageContext::new(http, self.session.clone(), Arc::new(self.navigator.clone()), dialog)
                .with_redirect(self.config.redirect_policy()),
        )
    }

    pub async fn run(&self, command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::Dashboard => self.show(Route::Dashboard).await,
            Commands::Open { path } => {
                let route = Route::from_path(&path);
                tracing::debug!(%path, to = %route, "resolved path");
                self.show(route).await
            }
            Commands::Due => self.show(Route::DueServices).await,
            Commands::Complete { id, yes } => {
                let mut page = DueServicesPage::new(self.context(yes)?);
                complete_request(&mut page, id).await
            }
            Commands::Past {
                start_date,
                end_date,
                room,
            } => {
                let mut page = PastServicesPage::new(self.context(false)?);
                page.load_room_options().await;
                page.set_filter(FilterField::StartDate, start_date.unwrap_or_default());
                page.set_filter(FilterField::EndDate, end_date.unwrap_or_default());
                page.set_filter(FilterField::RoomNumber, room.unwrap_or_default());
                page.apply_filters().await;
                print!("{}", render_past(&page));
                page_result(page.state())
            }
            Commands::Rooms => {
                let mut page = PastServicesPage::new(self.context(false)?);
                page.load_room_options().await;
                if page.rooms().is_empty() {
                    println!("No rooms with completed services.");
                }
                for room in page.rooms() {
                    println!("{room}");
                }
                Ok(())
            }
            Commands::Catalog => self.show(Route::ServiceCatalog).await,
            Commands::CatalogEdit {
                service_type,
                charge,
                availability,
            } => self.edit_catalog(&service_type, charge, availability).await,
            Commands::CatalogAdd {
                service_type,
                charge,
                availability,
            } => {
                let mut page = ServiceCatalogPage::new(self.context(false)?);
                page.edit_new_entry(DraftEdit::ServiceType(service_type));
                page.edit_new_entry(DraftEdit::Charge(charge));
                page.edit_new_entry(DraftEdit::Availability(availability));
                if !page.can_add() {
                    bail!("service type and charge are required");
                }
                page.add_entry().await;
                print!("{}", render_catalog(&page));
                page_result(page.state())
            }
            Commands::Session => {
                print!("{}", render_session(&self.session));
                Ok(())
            }
        }
    }

    /// Open a route the way the router shell would
    async fn show(&self, route: Route) -> anyhow::Result<()> {
        match route {
            Route::Login => {
                println!("Not signed in to the service office. Sign in at {}.", Route::Login);
                Ok(())
            }
            Route::Home | Route::Dashboard => {
                let page = DashboardPage::new(self.context(false)?);
                print!("{}", render_dashboard(&page));
                Ok(())
            }
            Route::DueServices => {
                let mut page = DueServicesPage::new(self.context(false)?);
                page.mount().await;
                print!("{}", render_due(&page));
                page_result(page.state())
            }
            Route::PastServices => {
                let mut page = PastServicesPage::new(self.context(false)?);
                page.mount().await;
                print!("{}", render_past(&page));
                page_result(page.state())
            }
            Route::ServiceCatalog => {
                let mut page = ServiceCatalogPage::new(self.context(false)?);
                page.mount().await;
                print!("{}", render_catalog(&page));
                page_result(page.state())
            }
        }
    }

    async fn edit_catalog(
        &self,
        service_type: &str,
        charge: Option<String>,
        availability: Option<Availability>,
    ) -> anyhow::Result<()> {
        let mut page = ServiceCatalogPage::new(self.context(false)?);
        page.mount().await;
        page_result(page.state())?;

        let entry = page
            .find(service_type)
            .cloned()
            .with_context(|| format!("service type {service_type:?} is not in the catalog"))?;
        page.begin_edit(&entry);
        if let Some(charge) = charge {
            page.edit_field(DraftEdit::Charge(charge));
        }
        if let Some(availability) = availability {
            page.edit_field(DraftEdit::Availability(availability));
        }
        page.save_edit().await;
        print!("{}", render_catalog(&page));
        page_result(page.state())
    }
}

/// Confirm and complete one request. A refused completion is an error;
/// a declined prompt is not.
pub async fn complete_request<C: HttpClient>(
    page: &mut DueServicesPage<C>,
    id: i64,
) -> anyhow::Result<()> {
    match page.complete(id).await {
        Completion::Completed => {
            println!("Service request #{id} marked as completed.");
            print!("{}", render_due(page));
            page_result(page.state())
        }
        Completion::Declined => {
            println!("Cancelled.");
            Ok(())
        }
        Completion::Failed(message) => bail!("{message}"),
    }
}

fn page_result(state: &LoadState) -> anyhow::Result<()> {
    match state.error() {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}

fn heading(out: &mut String, title: &str, branch: &str) {
    out.push_str(title);
    if !branch.is_empty() {
        out.push_str(&format!(" | Branch: {branch}"));
    }
    out.push('\n');
    out.push('\n');
}

fn push_table(out: &mut String, headers: &[&str], rows: Vec<Vec<String>>, empty: &str) {
    let table = Table::new(headers).with_rows(rows);
    if table.is_empty() {
        out.push_str(empty);
        out.push('\n');
    } else {
        out.push_str(&table.render());
    }
}

pub fn render_dashboard<C: HttpClient>(page: &DashboardPage<C>) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), page.branch_label());
    if let Some(name) = page.user_name() {
        out.push_str(&format!("Signed in as {name}\n\n"));
    }
    push_table(&mut out, &dashboard::HEADERS, page.rows(), "");
    out
}

pub fn render_due<C: HttpClient>(page: &DueServicesPage<C>) -> String {
    let mut out = String::new();
    heading(&mut out, Route::DueServices.title(), page.branch_label());
    push_table(&mut out, &due_services::HEADERS, page.rows(), "No due services.");
    out.push_str(&format!("\nTotal due: {}\n", page.total_due()));
    out
}

pub fn render_past<C: HttpClient>(page: &PastServicesPage<C>) -> String {
    let mut out = String::new();
    heading(&mut out, Route::PastServices.title(), page.branch_label());
    push_table(&mut out, &past_services::HEADERS, page.rows(), "No completed services found.");
    out.push_str(&format!("\nTotal completed: {}\n", page.total_completed()));
    if let (Some(room), Some(count)) = (page.filters().room(), page.room_count()) {
        out.push_str(&format!("Room {room}: {count}\n"));
    }
    out.push_str(&format!("Total revenue: {}\n", page.total_revenue_display()));
    out
}

pub fn render_catalog<C: HttpClient>(page: &ServiceCatalogPage<C>) -> String {
    let mut out = String::new();
    heading(&mut out, Route::ServiceCatalog.title(), page.branch_label());
    if let Some(message) = page.success_message() {
        out.push_str(message);
        out.push_str("\n\n");
    }
    push_table(&mut out, &service_catalog::HEADERS, page.rows(), "No services configured.");
    out.push_str(&format!(
        "\nTotal services: {}\nAvailable: {}\n",
        page.total_services(),
        page.available_count()
    ));
    out
}

pub fn render_session(session: &Session) -> String {
    let user = session.user.as_ref();
    let field = |v: Option<&String>| v.map(String::as_str).unwrap_or("-").to_string();
    let rows = vec![
        vec![
            "Token".to_string(),
            if session.token().is_some() { "present" } else { "missing" }.to_string(),
        ],
        vec!["Branch".to_string(), field(user.and_then(|u| u.branch_id.as_ref()))],
        vec!["Name".to_string(), field(user.and_then(|u| u.name.as_ref()))],
        vec!["Email".to_string(), field(user.and_then(|u| u.email.as_ref()))],
        vec!["Role".to_string(), field(user.and_then(|u| u.role.as_ref()))],
    ];
    Table::new(&["Field", "Value"]).with_rows(rows).render()
}
