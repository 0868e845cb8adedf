//! Workspace endpoints.

use crate::error::Result;
use crate::models::Workspace;
use crate::transport::Transport;

/// Operations on workspaces.
pub struct WorkspacesClient<'a> {
    transport: &'a Transport,
}

impl<'a> WorkspacesClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List every workspace the API key's user belongs to.
    pub fn get_workspaces(&self) -> Result<Option<Vec<Workspace>>> {
        self.transport.get_as("/workspaces/")
    }

    /// Get a single workspace by id.
    pub fn get_workspace(&self, workspace_id: &str) -> Result<Option<Workspace>> {
        self.transport.get_as(&format!("/workspaces/{workspace_id}"))
    }
}
