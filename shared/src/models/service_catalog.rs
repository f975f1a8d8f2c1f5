//! Service Catalog Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a service type can currently be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Yes,
    No,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Badge text shown in catalog tables
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Yes => "Available",
            Self::No => "Unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Self::Yes),
            "no" | "n" | "false" => Ok(Self::No),
            other => Err(format!("availability must be Yes or No, got {other:?}")),
        }
    }
}

/// Configured service type with its unit price (keyed by `service_type`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    pub service_type: String,
    #[serde(deserialize_with = "crate::util::de_amount")]
    pub unit_quantity_charges: f64,
    #[serde(default)]
    pub availability: Availability,
}

/// Update catalog entry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalogUpdate {
    pub unit_quantity_charges: f64,
    pub availability: Availability,
}

/// Create catalog entry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalogCreate {
    pub service_type: String,
    pub unit_quantity_charges: f64,
    pub availability: Availability,
}
