//! Service office dashboard
//!
//! Hotel staff view of service requests: open requests to complete, the
//! completed history with filters, and the branch's service catalog.
//!
//! - [`core`]: session, navigation, dialogs and page context
//! - [`pages`]: one view-model per screen
//! - [`commands`]: terminal front end driving the pages

pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;
pub mod pages;
pub mod utils;

pub use core::{AppConfig, PageContext, PageError, Route};
pub use pages::{DashboardPage, DueServicesPage, PastServicesPage, ServiceCatalogPage};
