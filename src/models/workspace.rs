use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{DayOfWeek, Membership, Rate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Rate>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_subscription_type: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<Subdomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_settings: Option<WorkspaceSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub id: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subdomain {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Workspace-wide settings.
///
/// The commonly used switches are typed; everything else the API returns is
/// kept in `other` so nothing is lost on a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_lock: Option<AutomaticLock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_description: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_tags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_tasks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_tracking_mode: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticLock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_day: Option<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day: Option<DayOfWeek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub older_than_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub older_than_value: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub lock_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSettings {
    pub minutes: String,
    pub round: String,
}
