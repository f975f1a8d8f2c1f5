//! Dashboard pages
//!
//! Each page owns its data and a [`LoadState`], reads nothing global, and
//! re-fetches after every mutation. Operations take `&mut self`, so a page
//! never has two mutations in flight.

pub mod dashboard;
pub mod due_services;
pub mod past_services;
pub mod service_catalog;

pub use dashboard::DashboardPage;
pub use due_services::{Completion, DueServicesPage};
pub use past_services::{FilterField, PastServicesPage};
pub use service_catalog::{CatalogDraft, DraftEdit, ServiceCatalogPage};

use crate::core::PageError;

/// Loading / error part of a page's state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, err: PageError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
