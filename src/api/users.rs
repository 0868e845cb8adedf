//! User endpoints.

use crate::error::Result;
use crate::models::{
    AddUserRequest, UpdateUserStatusRequest, User, UserFilter, UserStatus, Workspace,
};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace users.
pub struct UsersClient<'a> {
    transport: &'a Transport,
}

impl<'a> UsersClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// The user the API key belongs to.
    pub fn get_current_user(&self) -> Result<Option<User>> {
        self.transport.get_as("/user/")
    }

    /// List the workspace users, optionally filtered.
    pub fn get_users(
        &self,
        workspace_id: &str,
        filter: Option<&UserFilter>,
    ) -> Result<Option<Vec<User>>> {
        let path = filtered_path(&format!("/workspaces/{workspace_id}/users"), filter)?;
        self.transport.get_as(&path)
    }

    /// Invite a user by email. Returns the updated workspace.
    pub fn add_user(&self, workspace_id: &str, email: &str) -> Result<Option<Workspace>> {
        let body = AddUserRequest {
            email: email.to_string(),
        };
        self.transport
            .post_as(&format!("/workspaces/{workspace_id}/users/"), &body)
    }

    /// Activate or deactivate a user. Only `status` is sent.
    pub fn update_user(
        &self,
        workspace_id: &str,
        user_id: &str,
        status: UserStatus,
    ) -> Result<Option<Workspace>> {
        let body = UpdateUserStatusRequest { status };
        self.transport.put_as(
            &format!("/workspaces/{workspace_id}/users/{user_id}"),
            Some(&body),
        )
    }

    /// Remove a user from the workspace.
    pub fn remove_user(&self, workspace_id: &str, user_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/workspaces/{workspace_id}/users/{user_id}"))?;
        Ok(())
    }
}
