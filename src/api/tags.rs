//! Tag endpoints.

use crate::error::Result;
use crate::models::{AddTagRequest, Tag, TagFilter, UpdateTagRequest};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace tags.
pub struct TagsClient<'a> {
    transport: &'a Transport,
}

impl<'a> TagsClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List the workspace tags, optionally filtered.
    pub fn get_tags(
        &self,
        workspace_id: &str,
        filter: Option<&TagFilter>,
    ) -> Result<Option<Vec<Tag>>> {
        let path = filtered_path(&format!("/workspaces/{workspace_id}/tags"), filter)?;
        self.transport.get_as(&path)
    }

    /// Get a single tag by id.
    pub fn get_tag(&self, workspace_id: &str, tag_id: &str) -> Result<Option<Tag>> {
        self.transport
            .get_as(&format!("/workspaces/{workspace_id}/tags/{tag_id}"))
    }

    /// Create a tag.
    pub fn add_tag(&self, workspace_id: &str, request: &AddTagRequest) -> Result<Option<Tag>> {
        self.transport
            .post_as(&format!("/workspaces/{workspace_id}/tags/"), request)
    }

    /// Update a tag. Only set fields are sent.
    pub fn update_tag(
        &self,
        workspace_id: &str,
        tag_id: &str,
        request: &UpdateTagRequest,
    ) -> Result<Option<Tag>> {
        self.transport.put_as(
            &format!("/workspaces/{workspace_id}/tags/{tag_id}"),
            Some(request),
        )
    }

    /// Delete a tag.
    pub fn delete_tag(&self, workspace_id: &str, tag_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/workspaces/{workspace_id}/tags/{tag_id}"))?;
        Ok(())
    }
}
