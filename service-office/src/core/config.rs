use std::path::PathBuf;
use std::time::Duration;

use service_client::ClientConfig;
use service_client::config::DEFAULT_BASE_URL;

use super::context::RedirectPolicy;
use super::navigation::Route;

/// Dashboard configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SERVICE_OFFICE_API_URL | http://localhost:5000 | API base URL |
/// | SERVICE_OFFICE_WORK_DIR | ./.service-office | Directory holding `session.json` |
/// | SERVICE_OFFICE_REDIRECT_DELAY_MS | 2000 | Delay before the session-expired redirect |
/// | SERVICE_OFFICE_TIMEOUT_SECS | 30 | HTTP timeout |
/// | SERVICE_OFFICE_LOG_DIR | (unset) | Enables daily rolling log files |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub work_dir: PathBuf,
    pub redirect_delay: Duration,
    pub timeout_secs: u64,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            work_dir: PathBuf::from(".service-office"),
            redirect_delay: Duration::from_millis(2000),
            timeout_secs: 30,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("SERVICE_OFFICE_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_url),
            work_dir: lookup("SERVICE_OFFICE_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
            redirect_delay: lookup("SERVICE_OFFICE_REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.redirect_delay),
            timeout_secs: lookup("SERVICE_OFFICE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            log_dir: lookup("SERVICE_OFFICE_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn client_config(&self, token: Option<&str>) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_optional_token(token)
            .with_timeout(self.timeout_secs)
    }

    pub fn redirect_policy(&self) -> RedirectPolicy {
        RedirectPolicy {
            login_route: Route::Login,
            delay: self.redirect_delay,
        }
    }
}
