//! Task endpoints.

use serde_json::{Map, Value};

use crate::error::{ClockifyError, Result};
use crate::models::{Task, TaskFields, TaskFilter};
use crate::query::filtered_path;
use crate::transport::Transport;

/// Operations on workspace tasks.
pub struct TasksClient<'a> {
    transport: &'a Transport,
}

impl<'a> TasksClient<'a> {
    /// Wrap a transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List the tasks of a project, optionally filtered.
    pub fn get_tasks(
        &self,
        workspace_id: &str,
        project_id: &str,
        filter: Option<&TaskFilter>,
    ) -> Result<Option<Vec<Task>>> {
        let path = filtered_path(
            &format!("/workspaces/{workspace_id}/projects/{project_id}/tasks"),
            filter,
        )?;
        self.transport.get_as(&path)
    }

    /// Get a single task by id.
    pub fn get_task(
        &self,
        workspace_id: &str,
        project_id: &str,
        task_id: &str,
    ) -> Result<Option<Task>> {
        self.transport.get_as(&task_path(workspace_id, project_id, task_id))
    }

    /// Create a task. The body is `{name, projectId}` with any set `fields`
    /// laid over it; a field in `fields` replaces the base value.
    pub fn add_task(
        &self,
        workspace_id: &str,
        project_id: &str,
        name: &str,
        fields: Option<&TaskFields>,
    ) -> Result<Option<Task>> {
        let payload = task_payload(name, project_id, fields)?;
        self.transport.post_as(
            &format!("/workspaces/{workspace_id}/projects/{project_id}/tasks/"),
            &payload,
        )
    }

    /// Update a task. With `fields` set to `None` the PUT carries no body.
    pub fn update_task(
        &self,
        workspace_id: &str,
        project_id: &str,
        task_id: &str,
        fields: Option<&TaskFields>,
    ) -> Result<Option<Task>> {
        self.transport
            .put_as(&task_path(workspace_id, project_id, task_id), fields)
    }

    /// Delete a task.
    pub fn delete_task(&self, workspace_id: &str, project_id: &str, task_id: &str) -> Result<()> {
        self.transport
            .delete(&task_path(workspace_id, project_id, task_id))?;
        Ok(())
    }
}

fn task_path(workspace_id: &str, project_id: &str, task_id: &str) -> String {
    format!("/workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}")
}

fn task_payload(name: &str, project_id: &str, fields: Option<&TaskFields>) -> Result<Value> {
    let mut payload = Map::new();
    payload.insert("name".into(), Value::String(name.to_string()));
    payload.insert("projectId".into(), Value::String(project_id.to_string()));

    if let Some(fields) = fields {
        let extra = serde_json::to_value(fields)
            .map_err(|e| ClockifyError::invalid_field("task", e.to_string()))?;
        if let Value::Object(extra) = extra {
            payload.extend(extra);
        }
    }
    Ok(Value::Object(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Patch, TaskStatus};
    use serde_json::json;

    #[test]
    fn payload_without_fields_is_name_and_project() {
        let payload = task_payload("Bugfixing", "345", None).unwrap();
        assert_eq!(payload, json!({"name": "Bugfixing", "projectId": "345"}));
    }

    #[test]
    fn caller_fields_are_merged_on_top() {
        let fields = TaskFields {
            status: TaskStatus::Done.into(),
            ..Default::default()
        };
        let payload = task_payload("Bugfixing", "345", Some(&fields)).unwrap();
        assert_eq!(
            payload,
            json!({"name": "Bugfixing", "projectId": "345", "status": "DONE"})
        );
    }

    #[test]
    fn caller_wins_on_conflict() {
        let fields = TaskFields {
            name: "Renamed".to_string().into(),
            assignee_id: Patch::Null,
            ..Default::default()
        };
        let payload = task_payload("Bugfixing", "345", Some(&fields)).unwrap();
        assert_eq!(
            payload,
            json!({"name": "Renamed", "projectId": "345", "assigneeId": null})
        );
    }

    #[test]
    fn task_path_includes_project() {
        assert_eq!(
            task_path("123", "345", "789"),
            "/workspaces/123/projects/345/tasks/789"
        );
    }
}
