//! Service catalog: service types, prices and availability
//!
//! Inline edit of one entry at a time plus an add form. Both mutations
//! reload the whole catalog on success.

use service_client::HttpClient;
use shared::models::{Availability, ServiceCatalogCreate, ServiceCatalogEntry, ServiceCatalogUpdate};

use super::LoadState;
use crate::core::{PageContext, PageError};
use crate::utils::format_currency;

pub const HEADERS: [&str; 3] = ["Service", "Unit Charge", "Availability"];

const INVALID_CHARGE: &str = "Invalid charge amount";

/// Form state for editing or adding an entry. The charge stays as typed
/// until it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDraft {
    pub service_type: String,
    pub unit_quantity_charges: String,
    pub availability: Availability,
}

impl CatalogDraft {
    pub fn from_entry(entry: &ServiceCatalogEntry) -> Self {
        Self {
            service_type: entry.service_type.clone(),
            unit_quantity_charges: entry.unit_quantity_charges.to_string(),
            availability: entry.availability,
        }
    }

    /// Both required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.service_type.trim().is_empty() && !self.unit_quantity_charges.trim().is_empty()
    }

    /// Standard float parsing; negative and non-finite values are refused.
    pub fn parsed_charge(&self) -> Option<f64> {
        self.unit_quantity_charges
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c >= 0.0)
    }

    fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::ServiceType(v) => self.service_type = v,
            DraftEdit::Charge(v) => self.unit_quantity_charges = v,
            DraftEdit::Availability(v) => self.availability = v,
        }
    }
}

/// A single field change on a draft
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    ServiceType(String),
    Charge(String),
    Availability(Availability),
}

pub struct ServiceCatalogPage<C> {
    ctx: PageContext<C>,
    entries: Vec<ServiceCatalogEntry>,
    state: LoadState,
    success_message: Option<String>,
    editing: Option<CatalogDraft>,
    new_entry: CatalogDraft,
}

impl<C: HttpClient> ServiceCatalogPage<C> {
    pub fn new(ctx: PageContext<C>) -> Self {
        Self {
            ctx,
            entries: Vec::new(),
            state: LoadState::default(),
            success_message: None,
            editing: None,
            new_entry: CatalogDraft::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.load().await;
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.ctx.api.list_service_catalog().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "service catalog loaded");
                self.entries = entries;
                self.state.succeed();
            }
            Err(e) => {
                let err = self.ctx.load_failed(&e, "Failed to load services");
                self.state.fail(err);
            }
        }
    }

    // ========== Inline edit ==========

    /// Start editing a copy of `entry`, replacing any edit in progress.
    pub fn begin_edit(&mut self, entry: &ServiceCatalogEntry) {
        self.editing = Some(CatalogDraft::from_entry(entry));
        self.success_message = None;
    }

    /// Change a field of the edit draft. The service type is the entry's
    /// key and cannot change while editing.
    pub fn edit_field(&mut self, edit: DraftEdit) {
        if let DraftEdit::ServiceType(_) = edit {
            tracing::debug!("service type is not editable in place");
            return;
        }
        if let Some(draft) = self.editing.as_mut() {
            draft.apply(edit);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submit the edit draft. On failure edit mode stays open for a retry.
    pub async fn save_edit(&mut self) -> bool {
        let Some(draft) = self.editing.clone() else {
            return false;
        };
        let Some(charge) = draft.parsed_charge() else {
            self.state.error = Some(INVALID_CHARGE.to_string());
            return false;
        };

        let update = ServiceCatalogUpdate {
            unit_quantity_charges: charge,
            availability: draft.availability,
        };
        self.state.error = None;
        match self
            .ctx
            .api
            .update_service_catalog_entry(&draft.service_type, &update)
            .await
        {
            Ok(message) => {
                tracing::info!(service_type = %draft.service_type, charge, "service updated");
                self.editing = None;
                self.success_message =
                    Some(message.unwrap_or_else(|| "Service updated successfully".to_string()));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(service_type = %draft.service_type, error = %e, "failed to update service");
                let err = PageError::from_mutation(&e, "Failed to update service");
                self.state.error = Some(err.to_string());
                false
            }
        }
    }

    // ========== Add form ==========

    pub fn edit_new_entry(&mut self, edit: DraftEdit) {
        self.new_entry.apply(edit);
    }

    /// Add control state: disabled until type and charge are filled in
    pub fn can_add(&self) -> bool {
        self.new_entry.is_complete()
    }

    /// Submit the new entry. A no-op while [`can_add`](Self::can_add) is false.
    pub async fn add_entry(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        let Some(charge) = self.new_entry.parsed_charge() else {
            self.state.error = Some(INVALID_CHARGE.to_string());
            return false;
        };

        let create = ServiceCatalogCreate {
            service_type: self.new_entry.service_type.trim().to_string(),
            unit_quantity_charges: charge,
            availability: self.new_entry.availability,
        };
        self.state.error = None;
        self.success_message = None;
        match self.ctx.api.create_service_catalog_entry(&create).await {
            Ok(message) => {
                tracing::info!(service_type = %create.service_type, charge, "service added");
                self.new_entry = CatalogDraft::default();
                self.success_message =
                    Some(message.unwrap_or_else(|| "Service added successfully".to_string()));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(service_type = %create.service_type, error = %e, "failed to add service");
                let err = PageError::from_mutation(&e, "Failed to add service");
                self.state.error = Some(err.to_string());
                false
            }
        }
    }

    // ========== Accessors ==========

    pub fn entries(&self) -> &[ServiceCatalogEntry] {
        &self.entries
    }

    pub fn find(&self, service_type: &str) -> Option<&ServiceCatalogEntry> {
        self.entries.iter().find(|e| e.service_type == service_type)
    }

    pub fn editing(&self) -> Option<&CatalogDraft> {
        self.editing.as_ref()
    }

    pub fn new_entry(&self) -> &CatalogDraft {
        &self.new_entry
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn context(&self) -> &PageContext<C> {
        &self.ctx
    }

    pub fn branch_label(&self) -> &str {
        self.ctx.branch_label()
    }

    pub fn total_services(&self) -> usize {
        self.entries.len()
    }

    pub fn available_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.availability.is_available())
            .count()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|e| {
                vec![
                    e.service_type.clone(),
                    format_currency(e.unit_quantity_charges),
                    e.availability.badge().to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SESSION_EXPIRED_MESSAGE;
    use crate::core::testing::{ScriptedDialog, context};
    use serde_json::json;
    use service_client::api::paths;
    use service_client::mock::{Method, MockHttpClient, MockReply};

    fn spa() -> serde_json::Value {
        json!({"service_type": "Spa", "unit_quantity_charges": 1500, "availability": "Yes"})
    }

    fn page_with(mock: MockHttpClient) -> ServiceCatalogPage<MockHttpClient> {
        let (ctx, _) = context(mock, ScriptedDialog::default());
        ServiceCatalogPage::new(ctx)
    }

    fn http(page: &ServiceCatalogPage<MockHttpClient>) -> &MockHttpClient {
        page.context().api.http()
    }

    #[tokio::test]
    async fn test_single_entry_renders_one_row() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])));
        let mut page = page_with(mock);

        page.mount().await;

        assert_eq!(page.rows(), vec![vec!["Spa", "₹1,500.00", "Available"]]);
        assert_eq!(page.available_count(), 1);
    }

    #[tokio::test]
    async fn test_begin_edit_copies_entry_and_clears_success() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])))
            .on(Method::Put, "/updateservicetable/Spa", MockReply::done("Service updated"));
        let mut page = page_with(mock);
        page.mount().await;
        let entry = page.entries()[0].clone();

        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge("1800".into()));
        assert!(page.save_edit().await);
        assert_eq!(page.success_message(), Some("Service updated"));

        page.begin_edit(&entry);
        assert!(page.success_message().is_none());
        assert_eq!(page.editing().unwrap().unit_quantity_charges, "1500");
    }

    #[tokio::test]
    async fn test_edit_field_does_not_touch_server() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])));
        let mut page = page_with(mock);
        page.mount().await;
        let entry = page.entries()[0].clone();

        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge("2000".into()));
        page.edit_field(DraftEdit::Availability(Availability::No));
        page.edit_field(DraftEdit::ServiceType("Massage".into()));

        let draft = page.editing().unwrap();
        assert_eq!(draft.service_type, "Spa");
        assert_eq!(draft.unit_quantity_charges, "2000");
        assert_eq!(draft.availability, Availability::No);
        assert_eq!(http(&page).request_count(), 1);
        assert_eq!(page.entries()[0].unit_quantity_charges, 1500.0);
    }

    #[tokio::test]
    async fn test_save_edit_sends_parsed_charge_and_reloads() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])))
            .on(
                Method::Get,
                paths::SERVICE_TABLE,
                MockReply::data(json!([{"service_type": "Spa", "unit_quantity_charges": "1750.50", "availability": "No"}])),
            )
            .on(Method::Put, "/updateservicetable/Spa", MockReply::Json(json!({"success": true})));
        let mut page = page_with(mock);
        page.mount().await;
        let entry = page.entries()[0].clone();

        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge(" 1750.50 ".into()));
        page.edit_field(DraftEdit::Availability(Availability::No));
        assert!(page.save_edit().await);

        assert!(page.editing().is_none());
        assert_eq!(page.success_message(), Some("Service updated successfully"));
        let put = &http(&page).requests_to(Method::Put, "/updateservicetable/Spa")[0];
        assert_eq!(
            put.body,
            Some(json!({"unit_quantity_charges": 1750.5, "availability": "No"}))
        );
        assert_eq!(page.rows(), vec![vec!["Spa", "₹1,750.50", "Unavailable"]]);

        // a second reload without server change yields the same list
        let before = page.entries().to_vec();
        page.load().await;
        assert_eq!(page.entries(), before.as_slice());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_edit_mode() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])))
            .on(Method::Put, "/updateservicetable/Spa", MockReply::Status(500, json!({})));
        let (ctx, harness) = context(mock, ScriptedDialog::default());
        let mut page = ServiceCatalogPage::new(ctx);
        page.mount().await;
        let entry = page.entries()[0].clone();

        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge("1600".into()));
        assert!(!page.save_edit().await);

        assert_eq!(page.state().error(), Some("Failed to update service"));
        assert_eq!(page.editing().unwrap().unit_quantity_charges, "1600");
        assert!(!harness.navigator.navigated());
    }

    #[tokio::test]
    async fn test_invalid_charge_is_refused_locally() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])));
        let mut page = page_with(mock);
        page.mount().await;
        let entry = page.entries()[0].clone();

        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge("abc".into()));
        assert!(!page.save_edit().await);

        assert_eq!(page.state().error(), Some("Invalid charge amount"));
        assert!(page.editing().is_some());
        assert!(http(&page).requests_to(Method::Put, "/updateservicetable/Spa").is_empty());
    }

    #[tokio::test]
    async fn test_cancel_edit_discards_draft() {
        let mut page = page_with(MockHttpClient::new());
        let entry = ServiceCatalogEntry {
            service_type: "Laundry".into(),
            unit_quantity_charges: 200.0,
            availability: Availability::Yes,
        };
        page.begin_edit(&entry);
        page.edit_field(DraftEdit::Charge("999".into()));
        page.cancel_edit();

        assert!(page.editing().is_none());
        assert_eq!(http(&page).request_count(), 0);
    }

    #[tokio::test]
    async fn test_add_disabled_until_type_and_charge_filled() {
        let mut page = page_with(MockHttpClient::new());

        assert!(!page.can_add());
        assert!(!page.add_entry().await);

        page.edit_new_entry(DraftEdit::ServiceType("Laundry".into()));
        assert!(!page.can_add());
        assert!(!page.add_entry().await);

        page.edit_new_entry(DraftEdit::ServiceType(String::new()));
        page.edit_new_entry(DraftEdit::Charge("250".into()));
        assert!(!page.can_add());
        assert!(!page.add_entry().await);

        page.edit_new_entry(DraftEdit::ServiceType("Laundry".into()));
        assert!(page.can_add());
        assert_eq!(http(&page).request_count(), 0);
    }

    #[tokio::test]
    async fn test_add_entry_resets_draft_and_reloads() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::data(json!([spa()])))
            .on(Method::Post, paths::SERVICE_TABLE, MockReply::done("Service added"));
        let mut page = page_with(mock);

        page.edit_new_entry(DraftEdit::ServiceType("Airport Pickup".into()));
        page.edit_new_entry(DraftEdit::Charge("1200".into()));
        page.edit_new_entry(DraftEdit::Availability(Availability::No));
        assert!(page.add_entry().await);

        let post = &http(&page).requests_to(Method::Post, paths::SERVICE_TABLE)[0];
        assert_eq!(
            post.body,
            Some(json!({"service_type": "Airport Pickup", "unit_quantity_charges": 1200.0, "availability": "No"}))
        );
        assert_eq!(page.new_entry(), &CatalogDraft::default());
        assert_eq!(page.new_entry().availability, Availability::Yes);
        assert_eq!(page.success_message(), Some("Service added"));
        assert_eq!(http(&page).requests_to(Method::Get, paths::SERVICE_TABLE).len(), 1);
    }

    #[tokio::test]
    async fn test_add_failure_keeps_draft() {
        let mock = MockHttpClient::new();
        mock.on(Method::Post, paths::SERVICE_TABLE, MockReply::rejected("Service type already exists"));
        let mut page = page_with(mock);

        page.edit_new_entry(DraftEdit::ServiceType("Spa".into()));
        page.edit_new_entry(DraftEdit::Charge("1500".into()));
        assert!(!page.add_entry().await);

        assert_eq!(page.state().error(), Some("Service type already exists"));
        assert_eq!(page.new_entry().service_type, "Spa");
    }

    #[tokio::test]
    async fn test_unauthorized_catalog_load() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::SERVICE_TABLE, MockReply::unauthorized());
        let (ctx, harness) = context(mock, ScriptedDialog::default());
        let mut page = ServiceCatalogPage::new(ctx);

        page.load().await;

        assert_eq!(page.state().error(), Some(SESSION_EXPIRED_MESSAGE));
        assert_eq!(harness.navigator.scheduled.lock().len(), 1);
    }
}
