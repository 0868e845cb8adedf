use std::env;
use std::time::Duration;

use crate::error::{ClockifyError, Result};

/// Host used by [`ClientConfig::from_env`] when `CLOCKIFY_API_HOST` is unset.
pub const DEFAULT_HOST: &str = "api.clockify.me/v1";

/// Settings shared by every transport a [`crate::Clockify`] builds.
///
/// The raw `host` yields two base URLs: `https://global.<host>` for resource
/// calls and `https://reports.<host>` for reports. Either can be overridden,
/// which is how tests point the client at a local server.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub host: String,
    pub global_url: Option<String>,
    pub reports_url: Option<String>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
            global_url: None,
            reports_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Load settings from the environment.
    ///
    /// * `CLOCKIFY_API_KEY` (required)
    /// * `CLOCKIFY_API_HOST` (defaults to [`DEFAULT_HOST`])
    /// * `CLOCKIFY_GLOBAL_URL`, `CLOCKIFY_REPORTS_URL` (base URL overrides)
    /// * `CLOCKIFY_TIMEOUT_SECS` (request timeout in whole seconds)
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("CLOCKIFY_API_KEY")
            .map_err(|_| ClockifyError::Config("CLOCKIFY_API_KEY is not set".into()))?;
        let host = env::var("CLOCKIFY_API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let mut config = Self::new(api_key, host);
        config.global_url = env::var("CLOCKIFY_GLOBAL_URL").ok();
        config.reports_url = env::var("CLOCKIFY_REPORTS_URL").ok();

        if let Ok(raw) = env::var("CLOCKIFY_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                ClockifyError::Config(format!("Invalid CLOCKIFY_TIMEOUT_SECS '{raw}': {e}"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_global_url(mut self, url: impl Into<String>) -> Self {
        self.global_url = Some(url.into());
        self
    }

    pub fn with_reports_url(mut self, url: impl Into<String>) -> Self {
        self.reports_url = Some(url.into());
        self
    }

    /// Point both the global and the reports transport at the same server.
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_global_url(url.clone()).with_reports_url(url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn global_base_url(&self) -> String {
        self.base_url("global", self.global_url.as_deref())
    }

    pub fn reports_base_url(&self) -> String {
        self.base_url("reports", self.reports_url.as_deref())
    }

    fn base_url(&self, subdomain: &str, overridden: Option<&str>) -> String {
        match overridden {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{subdomain}.{}", self.host.trim_matches('/')),
        }
    }
}
