//! Client-side session types
//!
//! The session is written by the login flow (outside this workspace) and
//! only ever read here.

use serde::{Deserialize, Serialize};

/// Stored staff profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Branch the staff member belongs to. Display only; scoping happens
    /// server-side from the bearer token.
    #[serde(default, deserialize_with = "crate::util::de_opt_string_or_number")]
    pub branch_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Authentication token plus profile, as persisted by the login flow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Session with neither token nor profile
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the bearer token if one was stored.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Branch label for page headers; blank when no profile is stored.
    pub fn branch_label(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.branch_id.as_deref())
            .unwrap_or("")
    }
}
