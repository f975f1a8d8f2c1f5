//! Shared types for the service office workspace
//!
//! Wire types used by both the HTTP client and the dashboard pages:
//! service requests, catalog entries, the stored session and the
//! `{success, message, data}` response envelope.

pub mod client;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use client::{Session, UserInfo};
pub use response::ApiEnvelope;
pub use serde::{Deserialize, Serialize};
