//! Typed endpoints of the service office API
//!
//! Each call unwraps the `{success, message, data}` envelope: `success:
//! false` becomes [`ClientError::Rejected`] even when the HTTP status was
//! 200, and mutations hand back the server's message for display.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiEnvelope;
use shared::models::{
    ServiceCatalogCreate, ServiceCatalogEntry, ServiceCatalogUpdate, ServiceRequest,
};

use crate::query::QueryBuilder;
use crate::{ClientResult, ClientError, HttpClient};

pub mod paths {
    pub const DUE_SERVICES: &str = "/viewdueservices";
    pub const PAST_SERVICES: &str = "/viewpastservices";
    pub const PAST_SERVICE_ROOMS: &str = "/viewpastservices/rooms";
    pub const SERVICE_TABLE: &str = "/updateservicetable";

    pub fn complete_service(id: i64) -> String {
        format!("{DUE_SERVICES}/{id}/complete")
    }

    /// `service_type` is the catalog key and may contain spaces or slashes
    pub fn service_table_entry(service_type: &str) -> String {
        format!("{SERVICE_TABLE}/{}", urlencoding::encode(service_type))
    }
}

/// Filters for the completed-services log
///
/// Fields hold raw user input; blank fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastServiceFilter {
    /// `YYYY-MM-DD`, inclusive
    pub start_date: String,
    /// `YYYY-MM-DD`, inclusive
    pub end_date: String,
    pub room_number: String,
}

impl PastServiceFilter {
    pub fn is_empty(&self) -> bool {
        self.start_date.trim().is_empty()
            && self.end_date.trim().is_empty()
            && self.room_number.trim().is_empty()
    }

    /// Active room filter, if any
    pub fn room(&self) -> Option<&str> {
        Some(self.room_number.trim()).filter(|r| !r.is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut builder = QueryBuilder::new();
        builder
            .push_non_empty("startDate", &self.start_date)
            .push_non_empty("endDate", &self.end_date)
            .push_non_empty("roomNumber", &self.room_number);
        builder.build()
    }
}

/// Empty JSON object body
#[derive(Debug, Serialize)]
struct EmptyBody {}

/// Service office API over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ServiceOfficeApi<C> {
    http: C,
}

impl<C: HttpClient> ServiceOfficeApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    // ========== Due services ==========

    /// Open requests for the caller's branch
    pub async fn list_due_services(&self) -> ClientResult<Vec<ServiceRequest>> {
        self.fetch_list(paths::DUE_SERVICES, &[]).await
    }

    /// Transition a request to `Completed`
    pub async fn complete_service_request(&self, id: i64) -> ClientResult<Option<String>> {
        let env: ApiEnvelope<serde_json::Value> =
            self.http.put(&paths::complete_service(id), &EmptyBody {}).await?;
        into_message(env)
    }

    // ========== Past services ==========

    pub async fn list_past_services(
        &self,
        filter: &PastServiceFilter,
    ) -> ClientResult<Vec<ServiceRequest>> {
        self.fetch_list(paths::PAST_SERVICES, &filter.to_query()).await
    }

    /// Distinct room numbers appearing in the completed log
    pub async fn list_past_service_rooms(&self) -> ClientResult<Vec<String>> {
        let rooms: Vec<serde_json::Value> = self.fetch_list(paths::PAST_SERVICE_ROOMS, &[]).await?;
        Ok(rooms
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect())
    }

    // ========== Service catalog ==========

    pub async fn list_service_catalog(&self) -> ClientResult<Vec<ServiceCatalogEntry>> {
        self.fetch_list(paths::SERVICE_TABLE, &[]).await
    }

    pub async fn update_service_catalog_entry(
        &self,
        service_type: &str,
        update: &ServiceCatalogUpdate,
    ) -> ClientResult<Option<String>> {
        if service_type.trim().is_empty() {
            return Err(ClientError::Validation("service type is required".into()));
        }
        let env: ApiEnvelope<serde_json::Value> = self
            .http
            .put(&paths::service_table_entry(service_type), update)
            .await?;
        into_message(env)
    }

    pub async fn create_service_catalog_entry(
        &self,
        entry: &ServiceCatalogCreate,
    ) -> ClientResult<Option<String>> {
        let env: ApiEnvelope<serde_json::Value> =
            self.http.post(paths::SERVICE_TABLE, entry).await?;
        into_message(env)
    }

    async fn fetch_list<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<Vec<T>> {
        let env: ApiEnvelope<Vec<T>> = self.http.get_with_query(path, query).await?;
        if !env.success {
            return Err(ClientError::Rejected {
                message: env.message().map(str::to_string),
            });
        }
        Ok(env.data.unwrap_or_default())
    }
}

fn into_message(env: ApiEnvelope<serde_json::Value>) -> ClientResult<Option<String>> {
    let message = env.message().map(str::to_string);
    if env.success {
        Ok(message)
    } else {
        Err(ClientError::Rejected { message })
    }
}
