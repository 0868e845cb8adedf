//! Client endpoints.

use crate::error::Result;
use crate::models::{AddClientRequest, Client, ClientFilter, UpdateClientRequest};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace clients.
pub struct ClientsClient<'a> {
    transport: &'a Transport,
}

impl<'a> ClientsClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List clients of a workspace, optionally filtered.
    pub fn get_clients(
        &self,
        workspace_id: &str,
        filter: Option<&ClientFilter>,
    ) -> Result<Option<Vec<Client>>> {
        let path = filtered_path(&format!("/workspaces/{workspace_id}/clients"), filter)?;
        self.transport.get_as(&path)
    }

    /// Get a single client by id.
    pub fn get_client(&self, workspace_id: &str, client_id: &str) -> Result<Option<Client>> {
        self.transport
            .get_as(&format!("/workspaces/{workspace_id}/clients/{client_id}"))
    }

    /// Create a client in the workspace.
    pub fn add_client(
        &self,
        workspace_id: &str,
        request: &AddClientRequest,
    ) -> Result<Option<Client>> {
        self.transport
            .post_as(&format!("/workspaces/{workspace_id}/clients/"), request)
    }

    /// Update a client. Only set fields are sent.
    pub fn update_client(
        &self,
        workspace_id: &str,
        client_id: &str,
        request: &UpdateClientRequest,
    ) -> Result<Option<Client>> {
        self.transport.put_as(
            &format!("/workspaces/{workspace_id}/clients/{client_id}"),
            Some(request),
        )
    }

    /// Delete a client.
    pub fn delete_client(&self, workspace_id: &str, client_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/workspaces/{workspace_id}/clients/{client_id}"))?;
        Ok(())
    }
}
