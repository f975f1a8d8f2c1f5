//! Service Request Model

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Request status as reported by the server
///
/// Only two values have ever been observed; anything else is preserved
/// verbatim instead of failing deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    RequestPlaced,
    Completed,
    Other(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RequestPlaced => "Request Placed",
            Self::Completed => "Completed",
            Self::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<&str> for ServiceStatus {
    fn from(value: &str) -> Self {
        match value {
            "Request Placed" => Self::RequestPlaced,
            "Completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Guest service request (客房服务请求)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub service_request_id: i64,
    pub request_type: String,
    #[serde(deserialize_with = "crate::util::de_string_or_number")]
    pub room_number: String,
    pub booking_id: i64,
    /// Creation timestamp exactly as the server sent it
    pub date_time: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: ServiceStatus,
    /// Filled in once the request is completed
    #[serde(default, deserialize_with = "crate::util::de_opt_amount")]
    pub total_charge: Option<f64>,
}

impl ServiceRequest {
    /// Parse `date_time` into local time.
    ///
    /// Accepts RFC 3339 and the bare `YYYY-MM-DD HH:MM:SS` form.
    pub fn created_at(&self) -> Option<DateTime<Local>> {
        let raw = self.date_time.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local));
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    }

    /// Display form of `date_time`, falling back to the raw server text
    pub fn display_date_time(&self) -> String {
        self.created_at()
            .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|| self.date_time.clone())
    }
}
