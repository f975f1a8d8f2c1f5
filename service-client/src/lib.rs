//! Service Client - HTTP client for the service office API
//!
//! Provides the transport abstraction ([`HttpClient`]), its reqwest-backed
//! implementation ([`NetworkHttpClient`]) and the typed endpoint layer
//! ([`ServiceOfficeApi`]) used by the dashboard pages.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod query;

pub use api::{PastServiceFilter, ServiceOfficeApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{
    Availability, ServiceCatalogCreate, ServiceCatalogEntry, ServiceCatalogUpdate, ServiceRequest,
    ServiceStatus,
};
pub use shared::{ApiEnvelope, Session, UserInfo};
