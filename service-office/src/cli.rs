//! Command-line interface definition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shared::models::Availability;

#[derive(Debug, Parser)]
#[command(
    name = "service-office",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hotel service office: due requests, service history and the service catalog",
    long_about = None
)]
pub struct Cli {
    /// API base URL
    #[arg(global = true, long = "api-url", env = "SERVICE_OFFICE_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding the stored session
    #[arg(global = true, long = "work-dir", env = "SERVICE_OFFICE_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,service_office=debug`
    #[arg(global = true, long = "log-level", env = "SERVICE_OFFICE_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the branch and the page menu
    Dashboard,

    /// Resolve a dashboard path and open that page
    Open {
        /// Path such as /viewdueservices
        path: String,
    },

    /// List open service requests
    Due,

    /// Mark a service request as completed
    Complete {
        /// Service request id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List completed service requests
    Past {
        #[arg(long = "start-date", value_parser = parse_date, help = "From date (YYYY-MM-DD)")]
        start_date: Option<String>,

        #[arg(long = "end-date", value_parser = parse_date, help = "To date (YYYY-MM-DD)")]
        end_date: Option<String>,

        #[arg(long = "room", help = "Room number")]
        room: Option<String>,
    },

    /// List rooms that have completed services
    Rooms,

    /// Show the service catalog
    Catalog,

    /// Change the price or availability of a catalog entry
    CatalogEdit {
        service_type: String,

        #[arg(long = "charge", help = "New unit charge")]
        charge: Option<String>,

        #[arg(long = "availability", help = "Yes or No")]
        availability: Option<Availability>,
    },

    /// Add a service type to the catalog
    CatalogAdd {
        service_type: String,

        charge: String,

        #[arg(long = "availability", default_value = "Yes", help = "Yes or No")]
        availability: Availability,
    },

    /// Show the stored session
    Session,
}

/// Accepts `YYYY-MM-DD` and hands the value on unchanged
pub fn parse_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}
