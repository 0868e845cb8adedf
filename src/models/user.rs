use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{DayOfWeek, Membership, MembershipStatus, SortOrder};

/// Workspace status of a user, the only field `update_user` sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_workspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_workspace: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<UserCustomFieldValue>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCustomFieldValue {
    pub custom_field_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_type: Option<CustomFieldType>,
    pub user_id: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomFieldType {
    Txt,
    Number,
    DropdownSingle,
    DropdownMultiple,
    Checkbox,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    Dark,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFormat {
    Hour12,
    Hour24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardSelection {
    Me,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardViewType {
    Project,
    Billability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReportSettings {
    pub group: String,
    pub subgroup: String,
}

/// Per-user preferences. The display-related fields are typed, the rest of
/// the (large, frequently extended) settings object lands in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_selection: Option<DashboardSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_view_type: Option<DashboardViewType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_start_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_report_settings: Option<SummaryReportSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<TimeFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<DayOfWeek>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddUserRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateUserStatusRequest {
    pub status: UserStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserSortColumn {
    Id,
    Email,
    Name,
    NameLowercase,
    AccessRole,
    HourlyRate,
    CostRate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MembershipStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_statuses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<UserSortColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memberships: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_roles: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_filters;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "activeWorkspace": "64a687e29ae1f428e7ebe303",
            "customFields": [{
                "customFieldId": "5e4117fe8c625f38930d57b7",
                "customFieldName": "TIN",
                "customFieldType": "TXT",
                "userId": "5a0ab5acb07987125438b60f",
                "value": "20231211-12345"
            }],
            "defaultWorkspace": "123",
            "email": "johndoe@example.com",
            "id": "007",
            "memberships": [],
            "name": "John Doe",
            "profilePicture": "https://www.url.com/profile-picture1234567890.png",
            "settings": {
                "alerts": true,
                "dashboardSelection": "ME",
                "dashboardViewType": "BILLABILITY",
                "dateFormat": "MM/DD/YYYY",
                "lang": "en",
                "myStartOfDay": "09:00",
                "projectListCollapse": 15,
                "summaryReportSettings": {"group": "PROJECT", "subgroup": "CLIENT"},
                "theme": "DARK",
                "timeFormat": "HOUR24",
                "timeZone": "Asia/Aden",
                "weekStart": "MONDAY"
            },
            "status": "ACTIVE"
        })
    }

    #[test]
    fn decodes_and_round_trips() {
        let user: User = serde_json::from_value(sample()).unwrap();
        let settings = user.settings.as_ref().unwrap();
        assert_eq!(settings.theme, Some(Theme::Dark));
        assert_eq!(settings.week_start, Some(DayOfWeek::Monday));
        assert_eq!(settings.other["projectListCollapse"], json!(15));
        let again: User = serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
        assert_eq!(user, again);
    }

    #[test]
    fn unknown_theme_fails_decoding() {
        let mut value = sample();
        value["settings"]["theme"] = json!("SOLARIZED");
        assert!(serde_json::from_value::<User>(value).is_err());
    }

    #[test]
    fn status_request_body() {
        let body = UpdateUserStatusRequest {
            status: UserStatus::Inactive,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"status": "INACTIVE"}));
    }

    #[test]
    fn filter_uses_kebab_case_keys() {
        let filter = UserFilter {
            project_id: Some("123".into()),
            include_roles: Some(true),
            page_size: Some(2),
            ..Default::default()
        };
        assert_eq!(
            encode_filters(&filter).unwrap(),
            vec![
                ("project-id".to_string(), "123".to_string()),
                ("page-size".to_string(), "2".to_string()),
                ("include-roles".to_string(), "true".to_string()),
            ]
        );
    }
}
