use serde::{Deserialize, Serialize};

use super::common::{
    CostRateRequest, HourlyRateRequest, Membership, MembershipRequest, MembershipStatus, Patch,
    Rate, SortOrder,
};
use super::duration::IsoDuration;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateType {
    Auto,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub template: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<IsoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Estimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_estimate: Option<BudgetEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<TimeEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_reset: Option<EstimateReset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Rate>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

/// Project estimate as returned by the API. The duration is validated on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub estimate: IsoDuration,
    #[serde(rename = "type")]
    pub estimate_type: EstimateType,
}

/// Money budget; `estimate` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub active: bool,
    pub estimate: i64,
    #[serde(default)]
    pub include_expenses: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_option: Option<String>,
    #[serde(rename = "type")]
    pub estimate_type: EstimateType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimate {
    pub active: bool,
    pub estimate: IsoDuration,
    #[serde(default)]
    pub include_non_billable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_option: Option<String>,
    #[serde(rename = "type")]
    pub estimate_type: EstimateType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<IsoDuration>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub estimate_type: Option<EstimateType>,
}

impl EstimateRequest {
    /// Fails with `InvalidField` when `estimate` is not an ISO-8601 duration.
    pub fn new(estimate: &str, estimate_type: EstimateType) -> Result<Self> {
        Ok(Self {
            estimate: Some(IsoDuration::parse(estimate)?),
            estimate_type: Some(estimate_type),
        })
    }
}

/// A task created together with its project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<CostRateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<IsoDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_group_ids: Option<Vec<String>>,
}

impl ProjectTaskRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            project_id: None,
            assignee_id: None,
            assignee_ids: None,
            billable: None,
            budget_estimate: None,
            cost_rate: None,
            estimate: None,
            hourly_rate: None,
            status: None,
            user_group_ids: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberships: Option<Vec<MembershipRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<ProjectTaskRequest>>,
}

impl AddProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_id: None,
            is_public: None,
            billable: None,
            color: None,
            note: None,
            estimate: None,
            hourly_rate: None,
            memberships: None,
            tasks: None,
        }
    }

    pub fn client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    pub fn estimate(mut self, estimate: EstimateRequest) -> Self {
        self.estimate = Some(estimate);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub billable: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub client_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub color: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub cost_rate: Patch<CostRateRequest>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub hourly_rate: Patch<HourlyRateRequest>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub is_public: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub note: Patch<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainsFilter {
    Contains,
    DoesNotContain,
    ContainsOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectSortColumn {
    Id,
    Name,
    ClientName,
    Duration,
    Budget,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectAccess {
    Public,
    Private,
}

/// Query filters for listing projects. `clients` and `users` expand to one
/// repeated key per id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_name_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_client: Option<ContainsFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_user: Option<ContainsFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<MembershipStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<ProjectSortColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<ProjectAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<String>,
}
