use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Patch, Rate};
use super::duration::IsoDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeEntryType {
    Regular,
    Break,
    Holiday,
    TimeOff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub workspace_id: String,
    pub time_interval: TimeInterval,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kiosk_id: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub custom_field_values: Vec<CustomFieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Rate>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<TimeEntryType>,
}

/// `end` and `duration` are absent while a timer is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<IsoDuration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub custom_field_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_entry_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub value: Value,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomAttributeRequest {
    pub name: String,
    pub namespace: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldRequest {
    pub custom_field_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    pub value: Value,
}

/// Body of `add_time_entry`. Creating entries for a user requires a paid
/// workspace; the API answers with an HTTP error otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTimeEntryRequest {
    pub billable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<CustomAttributeRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldRequest>>,
    pub description: String,
    pub end: DateTime<Utc>,
    pub project_id: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: TimeEntryType,
}

impl AddTimeEntryRequest {
    pub fn new(
        project_id: impl Into<String>,
        description: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            billable: false,
            custom_attributes: None,
            custom_fields: None,
            description: description.into(),
            end,
            project_id: project_id.into(),
            start,
            tag_ids: None,
            task_id: None,
            entry_type: TimeEntryType::Regular,
        }
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = billable;
        self
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn tags(mut self, tag_ids: Vec<String>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn entry_type(mut self, entry_type: TimeEntryType) -> Self {
        self.entry_type = entry_type;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub billable: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub custom_attributes: Patch<Vec<CustomAttributeRequest>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub custom_fields: Patch<Vec<CustomFieldRequest>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub end: Patch<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub project_id: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub start: Patch<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub tag_ids: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub task_id: Patch<String>,
    #[serde(rename = "type", skip_serializing_if = "Patch::is_unset")]
    pub entry_type: Patch<TimeEntryType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimeEntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_week_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "billable": true,
            "costRate": {"amount": 10500, "currency": "USD"},
            "customFieldValues": [{
                "customFieldId": "5e4117fe8c625f38930d57b7",
                "name": "TIN",
                "timeEntryId": "64c777ddd3fcab07cfbb210c",
                "type": "WORKSPACE",
                "value": "20231211-12345"
            }],
            "description": "This is a sample time entry description.",
            "hourlyRate": {"amount": 10500, "currency": "USD"},
            "id": "64c777ddd3fcab07cfbb210c",
            "isLocked": false,
            "kioskId": "94c777ddd3fcab07cfbb210d",
            "projectId": "25b687e29ae1f428e7ebe123",
            "tagIds": ["321r77ddd3fcab07cfbb567y", "44x777ddd3fcab07cfbb88f"],
            "taskId": "54m377ddd3fcab07cfbb432w",
            "timeInterval": {
                "duration": "PT30M",
                "end": "2021-01-01T00:00:00Z",
                "start": "2020-01-01T00:00:00Z"
            },
            "type": "BREAK",
            "userId": "007",
            "workspaceId": "123"
        })
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn decodes_and_round_trips() {
        let entry: TimeEntry = serde_json::from_value(sample()).unwrap();
        assert_eq!(entry.entry_type, Some(TimeEntryType::Break));
        assert_eq!(entry.time_interval.start, utc(2020, 1, 1));
        assert_eq!(entry.time_interval.end, Some(utc(2021, 1, 1)));
        let again: TimeEntry =
            serde_json::from_value(serde_json::to_value(&entry).unwrap()).unwrap();
        assert_eq!(entry, again);
    }

    #[test]
    fn running_entry_has_no_end() {
        let mut value = sample();
        value["timeInterval"] = json!({"start": "2020-01-01T00:00:00Z", "end": null, "duration": null});
        let entry: TimeEntry = serde_json::from_value(value).unwrap();
        assert!(entry.time_interval.end.is_none());
        assert!(entry.time_interval.duration.is_none());
    }

    #[test]
    fn malformed_timestamp_fails_decoding() {
        let mut value = sample();
        value["timeInterval"]["start"] = json!("yesterday");
        assert!(serde_json::from_value::<TimeEntry>(value).is_err());
    }

    #[test]
    fn malformed_duration_fails_decoding() {
        let mut value = sample();
        value["timeInterval"]["duration"] = json!("30 minutes");
        assert!(serde_json::from_value::<TimeEntry>(value).is_err());
    }

    #[test]
    fn add_request_serializes_required_fields() {
        let req = AddTimeEntryRequest::new(
            "25b687e29ae1f428e7ebe123",
            "Standup",
            utc(2020, 1, 1),
            utc(2021, 1, 1),
        )
        .billable(true);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "billable": true,
                "description": "Standup",
                "end": "2021-01-01T00:00:00Z",
                "projectId": "25b687e29ae1f428e7ebe123",
                "start": "2020-01-01T00:00:00Z",
                "type": "REGULAR"
            })
        );
    }

    #[test]
    fn update_request_sends_only_start() {
        let req = UpdateTimeEntryRequest {
            start: utc(2020, 1, 1).into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"start": "2020-01-01T00:00:00Z"})
        );
    }

    #[test]
    fn update_request_carries_custom_attributes() {
        assert_eq!(
            serde_json::to_value(UpdateTimeEntryRequest::default()).unwrap(),
            json!({})
        );

        let req = UpdateTimeEntryRequest {
            custom_attributes: vec![CustomAttributeRequest {
                name: "race".into(),
                namespace: "user_info".into(),
                value: "Asian".into(),
            }]
            .into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"customAttributes": [{"name": "race", "namespace": "user_info", "value": "Asian"}]})
        );
    }
}
