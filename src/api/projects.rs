//! Project endpoints.

use crate::error::Result;
use crate::models::{AddProjectRequest, Project, ProjectFilter, UpdateProjectRequest};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace projects.
pub struct ProjectsClient<'a> {
    transport: &'a Transport,
}

impl<'a> ProjectsClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List projects of a workspace. Filters such as `clients` expand to
    /// repeated query keys.
    pub fn get_projects(
        &self,
        workspace_id: &str,
        filter: Option<&ProjectFilter>,
    ) -> Result<Option<Vec<Project>>> {
        let path = filtered_path(&format!("/workspaces/{workspace_id}/projects"), filter)?;
        self.transport.get_as(&path)
    }

    /// Get a single project by id.
    pub fn get_project(&self, workspace_id: &str, project_id: &str) -> Result<Option<Project>> {
        self.transport
            .get_as(&format!("/workspaces/{workspace_id}/projects/{project_id}"))
    }

    /// Create a project in the workspace.
    pub fn add_project(
        &self,
        workspace_id: &str,
        request: &AddProjectRequest,
    ) -> Result<Option<Project>> {
        self.transport
            .post_as(&format!("/workspaces/{workspace_id}/projects/"), request)
    }

    /// Update a project. Only set fields are sent.
    pub fn update_project(
        &self,
        workspace_id: &str,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        self.transport.put_as(
            &format!("/workspaces/{workspace_id}/projects/{project_id}"),
            Some(request),
        )
    }

    /// The API only deletes archived projects.
    pub fn delete_project(&self, workspace_id: &str, project_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/workspaces/{workspace_id}/projects/{project_id}"))?;
        Ok(())
    }
}
