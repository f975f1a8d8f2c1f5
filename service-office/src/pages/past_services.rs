//! Past services: the completed-request log with date and room filters

use service_client::{HttpClient, PastServiceFilter};
use shared::models::ServiceRequest;

use super::LoadState;
use crate::core::PageContext;
use crate::utils::currency::{format_currency, format_opt_currency};

pub const HEADERS: [&str; 7] = ["ID", "Type", "Room", "Booking", "Requested", "Qty", "Charge"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StartDate,
    EndDate,
    RoomNumber,
}

pub struct PastServicesPage<C> {
    ctx: PageContext<C>,
    requests: Vec<ServiceRequest>,
    rooms: Vec<String>,
    filters: PastServiceFilter,
    state: LoadState,
}

impl<C: HttpClient> PastServicesPage<C> {
    pub fn new(ctx: PageContext<C>) -> Self {
        Self {
            ctx,
            requests: Vec::new(),
            rooms: Vec::new(),
            filters: PastServiceFilter::default(),
            state: LoadState::default(),
        }
    }

    /// Room options plus the unfiltered list
    pub async fn mount(&mut self) {
        self.load_room_options().await;
        self.load().await;
    }

    /// Fetch completed requests matching the current filters
    pub async fn load(&mut self) {
        self.state.begin();
        match self.ctx.api.list_past_services(&self.filters).await {
            Ok(requests) => {
                tracing::debug!(count = requests.len(), filtered = !self.filters.is_empty(), "past services loaded");
                self.requests = requests;
                self.state.succeed();
            }
            Err(e) => {
                let err = self.ctx.load_failed(&e, "Failed to load past services");
                self.state.fail(err);
            }
        }
    }

    /// Room filter choices. Failure leaves the list empty and is only logged.
    pub async fn load_room_options(&mut self) {
        match self.ctx.api.list_past_service_rooms().await {
            Ok(rooms) => self.rooms = rooms,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load room numbers");
                self.rooms.clear();
            }
        }
    }

    /// Edit a filter field; nothing is fetched until filters are applied.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::StartDate => self.filters.start_date = value,
            FilterField::EndDate => self.filters.end_date = value,
            FilterField::RoomNumber => self.filters.room_number = value,
        }
    }

    pub async fn apply_filters(&mut self) {
        self.load().await;
    }

    pub async fn clear_filters(&mut self) {
        self.filters.clear();
        self.load().await;
    }

    pub fn filters(&self) -> &PastServiceFilter {
        &self.filters
    }

    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
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

    pub fn total_completed(&self) -> usize {
        self.requests.len()
    }

    /// Entries for the filtered room, counted locally.
    ///
    /// `None` unless a room filter is active.
    pub fn room_count(&self) -> Option<usize> {
        let room = self.filters.room()?;
        Some(self.requests.iter().filter(|r| r.room_number == room).count())
    }

    /// Sum of charges in the list; unpriced entries count as zero
    pub fn total_revenue(&self) -> f64 {
        self.requests.iter().filter_map(|r| r.total_charge).sum()
    }

    pub fn total_revenue_display(&self) -> String {
        format_currency(self.total_revenue())
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
                    format_opt_currency(r.total_charge),
                ]
            })
            .collect()
    }
}
