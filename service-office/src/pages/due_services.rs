//! Due services: open requests for the branch

use service_client::HttpClient;
use shared::models::ServiceRequest;

use super::LoadState;
use crate::core::{PageContext, PageError};

pub const HEADERS: [&str; 7] = ["ID", "Type", "Room", "Booking", "Requested", "Qty", "Status"];

/// Outcome of [`DueServicesPage::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Confirmation declined, nothing sent
    Declined,
    Completed,
    /// Server refused or the call failed; carries the alerted text
    Failed(String),
}

pub struct DueServicesPage<C> {
    ctx: PageContext<C>,
    requests: Vec<ServiceRequest>,
    state: LoadState,
}

impl<C: HttpClient> DueServicesPage<C> {
    pub fn new(ctx: PageContext<C>) -> Self {
        Self {
            ctx,
            requests: Vec::new(),
            state: LoadState::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Fetch the due list; on failure the previous list is kept.
    pub async fn load(&mut self) {
        self.state.begin();
        match self.ctx.api.list_due_services().await {
            Ok(requests) => {
                tracing::debug!(count = requests.len(), "due services loaded");
                self.requests = requests;
                self.state.succeed();
            }
            Err(e) => {
                let err = self.ctx.load_failed(&e, "Failed to load due services");
                self.state.fail(err);
            }
        }
    }

    /// Mark a request completed after confirmation, then reload.
    pub async fn complete(&mut self, service_request_id: i64) -> Completion {
        let prompt = format!("Mark service request #{service_request_id} as completed?");
        if !self.ctx.dialog.confirm(&prompt) {
            tracing::debug!(service_request_id, "completion cancelled");
            return Completion::Declined;
        }

        match self.ctx.api.complete_service_request(service_request_id).await {
            Ok(message) => {
                tracing::info!(service_request_id, message = ?message, "service request completed");
                self.load().await;
                Completion::Completed
            }
            Err(e) => {
                tracing::error!(service_request_id, error = %e, "failed to complete service request");
                let message = PageError::from_mutation(&e, "Failed to complete service request").to_string();
                self.ctx.dialog.alert(&message);
                Completion::Failed(message)
            }
        }
    }

    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    /// Always the length of the last fetched list
    pub fn total_due(&self) -> usize {
        self.requests.len()
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

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.requests
            .iter()
            .map(|r| {
                vec![
                    r.service_request_id.to_string(),
                    r.request_type.clone(),
                    r.room_number.clone(),
                    r.booking_id.to_string(),
                    r.display_date_time(),
                    r.quantity.to_string(),
                    r.status.to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SESSION_EXPIRED_MESSAGE;
    use crate::core::navigation::Route;
    use crate::core::testing::{ScriptedDialog, context};
    use serde_json::json;
    use service_client::api::paths;
    use service_client::mock::{Method, MockHttpClient, MockReply};
    use std::time::Duration;

    fn request(id: i64, room: &str) -> serde_json::Value {
        json!({
            "service_request_id": id,
            "request_type": "Laundry",
            "room_number": room,
            "booking_id": 500 + id,
            "date_time": "2024-05-02 09:30:00",
            "quantity": 1,
            "status": "Request Placed"
        })
    }

    #[tokio::test]
    async fn test_load_populates_list_and_count() {
        let mock = MockHttpClient::new();
        mock.on(
            Method::Get,
            paths::DUE_SERVICES,
            MockReply::data(json!([request(1, "101"), request(2, "102")])),
        );
        let (ctx, _) = context(mock, ScriptedDialog::default());
        let mut page = DueServicesPage::new(ctx);

        page.mount().await;

        assert_eq!(page.total_due(), 2);
        assert!(!page.state().loading);
        assert!(page.state().error().is_none());
        assert_eq!(page.branch_label(), "BR-01");
        assert_eq!(page.rows()[0][..4], ["1", "Laundry", "101", "501"]);
    }

    #[tokio::test]
    async fn test_unauthorized_load_schedules_login_redirect() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::DUE_SERVICES, MockReply::unauthorized());
        let (ctx, harness) = context(mock, ScriptedDialog::default());
        let mut page = DueServicesPage::new(ctx);

        page.load().await;

        assert_eq!(page.state().error(), Some(SESSION_EXPIRED_MESSAGE));
        assert_eq!(
            *harness.navigator.scheduled.lock(),
            vec![(Route::Login, Duration::from_secs(2))]
        );
    }

    #[tokio::test]
    async fn test_other_load_failure_does_not_navigate() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::DUE_SERVICES, MockReply::Offline("connection refused".into()));
        let (ctx, harness) = context(mock, ScriptedDialog::default());
        let mut page = DueServicesPage::new(ctx);

        page.load().await;

        assert_eq!(page.state().error(), Some("Failed to load due services"));
        assert!(!harness.navigator.navigated());
    }

    #[tokio::test]
    async fn test_cancelled_confirmation_issues_no_request() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::DUE_SERVICES, MockReply::data(json!([request(42, "101")])));
        let (ctx, harness) = context(mock, ScriptedDialog::answering(false));
        let mut page = DueServicesPage::new(ctx);
        page.mount().await;
        let before = page.requests().to_vec();

        assert_eq!(page.complete(42).await, Completion::Declined);

        assert_eq!(page.requests(), before.as_slice());
        assert!(page.context().api.http().requests_to(Method::Put, "/viewdueservices/42/complete").is_empty());
        assert_eq!(page.context().api.http().request_count(), 1);
        assert_eq!(
            *harness.dialog.confirmations.lock(),
            vec!["Mark service request #42 as completed?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_complete_reloads_from_server() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::DUE_SERVICES, MockReply::data(json!([request(42, "101"), request(43, "102")])))
            .on(Method::Get, paths::DUE_SERVICES, MockReply::data(json!([request(43, "102")])))
            .on(Method::Put, "/viewdueservices/42/complete", MockReply::done("Service marked as completed"));
        let (ctx, harness) = context(mock, ScriptedDialog::answering(true));
        let mut page = DueServicesPage::new(ctx);
        page.mount().await;
        assert_eq!(page.total_due(), 2);

        assert_eq!(page.complete(42).await, Completion::Completed);

        assert_eq!(page.total_due(), 1);
        assert_eq!(page.requests()[0].service_request_id, 43);
        assert_eq!(page.context().api.http().requests_to(Method::Get, paths::DUE_SERVICES).len(), 2);
        assert!(harness.dialog.alerts.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failed_completion_alerts_server_message() {
        let mock = MockHttpClient::new();
        mock.on(Method::Get, paths::DUE_SERVICES, MockReply::data(json!([request(7, "101")])))
            .on(Method::Put, "/viewdueservices/7/complete", MockReply::rejected("Request already completed"));
        let (ctx, harness) = context(mock, ScriptedDialog::answering(true));
        let mut page = DueServicesPage::new(ctx);
        page.mount().await;

        assert_eq!(
            page.complete(7).await,
            Completion::Failed("Request already completed".into())
        );

        assert_eq!(*harness.dialog.alerts.lock(), vec!["Request already completed".to_string()]);
        assert_eq!(page.total_due(), 1);
        assert!(!harness.navigator.navigated());
    }

    #[tokio::test]
    async fn test_unauthorized_completion_alerts_server_message() {
        let mock = MockHttpClient::new();
        mock.on(
            Method::Put,
            "/viewdueservices/9/complete",
            MockReply::Status(401, json!({"success": false, "message": "Token expired, please re-login"})),
        );
        let (ctx, harness) = context(mock, ScriptedDialog::answering(true));
        let mut page = DueServicesPage::new(ctx);

        assert_eq!(
            page.complete(9).await,
            Completion::Failed("Token expired, please re-login".into())
        );

        assert_eq!(
            *harness.dialog.alerts.lock(),
            vec!["Token expired, please re-login".to_string()]
        );
        assert!(!harness.navigator.navigated());
    }

    #[tokio::test]
    async fn test_failed_completion_without_message_uses_fallback() {
        let mock = MockHttpClient::new();
        mock.on(Method::Put, "/viewdueservices/9/complete", MockReply::Status(401, json!({})));
        let (ctx, harness) = context(mock, ScriptedDialog::answering(true));
        let mut page = DueServicesPage::new(ctx);

        assert_eq!(
            page.complete(9).await,
            Completion::Failed("Failed to complete service request".into())
        );

        assert_eq!(
            *harness.dialog.alerts.lock(),
            vec!["Failed to complete service request".to_string()]
        );
        assert!(!harness.navigator.navigated());
    }
}
