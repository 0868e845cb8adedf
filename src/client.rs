use once_cell::sync::OnceCell;

use crate::api::{
    ClientsClient, ProjectsClient, ReportsClient, TagsClient, TasksClient, TimeEntriesClient,
    UsersClient, WorkspacesClient,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::Transport;

static SHARED: OnceCell<Clockify> = OnceCell::new();

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for the Clockify API.
///
/// Holds one transport for the global host and one for the reports host and
/// hands out a borrowed client per resource.
///
/// ```no_run
/// use clockify_client::Clockify;
///
/// let clockify = Clockify::new("my-api-key", "api.clockify.me/v1").unwrap();
/// let workspaces = clockify.workspaces().get_workspaces().unwrap().unwrap_or_default();
/// for ws in &workspaces {
///     println!("{}: {}", ws.id, ws.name);
/// }
/// ```
#[derive(Debug)]
pub struct Clockify {
    config: ClientConfig,
    global: Transport,
    reports: Transport,
}

impl Clockify {
    /// Create an independent client.
    ///
    /// * `api_key` – sent as `X-Api-Key` on every request
    /// * `host`    – raw API host, e.g. `api.clockify.me/v1`
    pub fn new(api_key: &str, host: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key, host))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let global = Transport::global(&config)?;
        let reports = Transport::reports(&config)?;
        Ok(Self {
            config,
            global,
            reports,
        })
    }

    /// The process-wide instance, created from `config` on the first call.
    ///
    /// Every later call returns that same instance and ignores its argument,
    /// even if the API key or host differ. Prefer [`Clockify::new`] unless a
    /// single shared client is really wanted.
    pub fn shared(config: ClientConfig) -> Result<&'static Clockify> {
        if let Some(existing) = SHARED.get() {
            if existing.config != config {
                tracing::debug!(
                    host = %config.host,
                    "shared Clockify client already initialized, ignoring new configuration"
                );
            }
            return Ok(existing);
        }
        SHARED.get_or_try_init(|| Clockify::with_config(config))
    }

    /// The shared instance, if [`Clockify::shared`] has succeeded before.
    pub fn shared_instance() -> Option<&'static Clockify> {
        SHARED.get()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_key(&self) -> &str {
        self.global.api_key()
    }

    /// Transport for resource endpoints.
    pub fn global_transport(&self) -> &Transport {
        &self.global
    }

    /// Transport for report endpoints.
    pub fn reports_transport(&self) -> &Transport {
        &self.reports
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn workspaces(&self) -> WorkspacesClient<'_> {
        WorkspacesClient::new(&self.global)
    }

    pub fn clients(&self) -> ClientsClient<'_> {
        ClientsClient::new(&self.global)
    }

    pub fn projects(&self) -> ProjectsClient<'_> {
        ProjectsClient::new(&self.global)
    }

    pub fn tags(&self) -> TagsClient<'_> {
        TagsClient::new(&self.global)
    }

    pub fn tasks(&self) -> TasksClient<'_> {
        TasksClient::new(&self.global)
    }

    pub fn time_entries(&self) -> TimeEntriesClient<'_> {
        TimeEntriesClient::new(&self.global)
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.global)
    }

    pub fn reports(&self) -> ReportsClient<'_> {
        ReportsClient::new(&self.reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn client_is_send_and_sync() {
        assert_send_sync::<Clockify>();
        assert_send_sync::<Transport>();
    }

    #[test]
    fn transports_use_distinct_hosts() {
        let clockify = Clockify::new("apikey", "baz.co").unwrap();
        assert_eq!(clockify.global_transport().base_url(), "https://global.baz.co");
        assert_eq!(clockify.reports_transport().base_url(), "https://reports.baz.co");
        assert_eq!(clockify.api_key(), "apikey");
    }

    #[test]
    fn fresh_instances_are_independent() {
        let a = Clockify::new("key-a", "a.example").unwrap();
        let b = Clockify::new("key-b", "b.example").unwrap();
        assert_eq!(a.api_key(), "key-a");
        assert_eq!(b.api_key(), "key-b");
        assert_ne!(a.config(), b.config());
    }
}
