//! Data models
//!
//! Server-owned entities; the client only holds transient copies.

pub mod service_catalog;
pub mod service_request;

// Re-exports
pub use service_catalog::*;
pub use service_request::*;
