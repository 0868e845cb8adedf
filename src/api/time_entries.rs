//! Time entry endpoints.

use crate::error::Result;
use crate::models::{AddTimeEntryRequest, TimeEntry, TimeEntryFilter, UpdateTimeEntryRequest};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace time entries.
pub struct TimeEntriesClient<'a> {
    transport: &'a Transport,
}

impl<'a> TimeEntriesClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List a user's time entries in a workspace.
    pub fn get_time_entries(
        &self,
        workspace_id: &str,
        user_id: &str,
        filter: Option<&TimeEntryFilter>,
    ) -> Result<Option<Vec<TimeEntry>>> {
        let path = filtered_path(
            &format!("/workspaces/{workspace_id}/user/{user_id}/time-entries"),
            filter,
        )?;
        self.transport.get_as(&path)
    }

    /// Get a single time entry by id.
    pub fn get_time_entry(&self, workspace_id: &str, entry_id: &str) -> Result<Option<TimeEntry>> {
        self.transport
            .get_as(&format!("/workspaces/{workspace_id}/time-entries/{entry_id}"))
    }

    /// Add a time entry for another user. Requires a paid workspace.
    pub fn add_time_entry(
        &self,
        workspace_id: &str,
        user_id: &str,
        request: &AddTimeEntryRequest,
    ) -> Result<Option<TimeEntry>> {
        self.transport.post_as(
            &format!("/workspaces/{workspace_id}/user/{user_id}/time-entries/"),
            request,
        )
    }

    /// Update a time entry. Only set fields are sent.
    pub fn update_time_entry(
        &self,
        workspace_id: &str,
        entry_id: &str,
        request: &UpdateTimeEntryRequest,
    ) -> Result<Option<TimeEntry>> {
        self.transport.put_as(
            &format!("/workspaces/{workspace_id}/time-entries/{entry_id}"),
            Some(request),
        )
    }

    /// Delete a time entry.
    pub fn delete_time_entry(&self, workspace_id: &str, entry_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/workspaces/{workspace_id}/time-entries/{entry_id}"))?;
        Ok(())
    }
}
