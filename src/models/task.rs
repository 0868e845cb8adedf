use serde::{Deserialize, Serialize};

use super::common::{CostRateRequest, HourlyRateRequest, Patch, Rate, SortOrder};
use super::duration::IsoDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Active,
    Done,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assignee_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_estimate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub user_group_ids: Vec<String>,
}

/// Caller-supplied task fields for create and update.
///
/// On create they are merged over the `{name, projectId}` base payload, so a
/// field set here wins. Unset fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub project_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub assignee_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub assignee_ids: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub billable: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub budget_estimate: Patch<i64>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub cost_rate: Patch<CostRateRequest>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub estimate: Patch<IsoDuration>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub hourly_rate: Patch<HourlyRateRequest>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub status: Patch<TaskStatus>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub user_group_ids: Patch<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_name_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
