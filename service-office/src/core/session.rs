//! Session providers
//!
//! The login flow persists `{"token": "...", "user": {...}}` in the work
//! directory. Pages never read it themselves: the binary loads it once and
//! hands the [`Session`] to each page.

use std::path::{Path, PathBuf};

use serde_json::Value;
use shared::{Session, UserInfo};

/// Source of the current session
pub trait SessionProvider: Send + Sync {
    /// Never fails: missing pieces are simply absent.
    fn load(&self) -> Session;
}

/// Fixed session, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticSession(pub Session);

impl SessionProvider for StaticSession {
    fn load(&self) -> Session {
        self.0.clone()
    }
}

/// Session file written by the login flow: `{work_dir}/session.json`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub const FILE_NAME: &'static str = "session.json";

    pub fn new(work_dir: &Path) -> Self {
        Self {
            path: work_dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Option<Value> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no stored session");
            return None;
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file is not valid JSON");
                None
            }
        }
    }
}

impl SessionProvider for FileSessionStore {
    fn load(&self) -> Session {
        let Some(stored) = self.read() else {
            return Session::anonymous();
        };
        let token = stored
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_string);
        let user = stored.get("user").and_then(parse_user);
        if user.is_none() {
            tracing::debug!("stored session has no usable user profile");
        }
        Session { token, user }
    }
}

/// The profile may be stored as an object or as a JSON-encoded string.
fn parse_user(value: &Value) -> Option<UserInfo> {
    match value {
        Value::String(encoded) => serde_json::from_str(encoded).ok(),
        Value::Object(_) => serde_json::from_value(value.clone()).ok(),
        _ => None,
    }
}
