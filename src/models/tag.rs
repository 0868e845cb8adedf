use serde::{Deserialize, Serialize};

use super::common::{Patch, SortOrder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub archived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddTagRequest {
    pub name: String,
}

impl AddTagRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTagRequest {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived: Patch<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TagFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_name_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl TagFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_and_round_trips() {
        let value = json!({
            "id": "64c777ddd3fcab07cfbb210c",
            "name": "Sprint1",
            "workspaceId": "64a687e29ae1f428e7ebe303",
            "archived": true
        });
        let tag: Tag = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(tag.name, "Sprint1");
        assert!(tag.archived);
        assert_eq!(serde_json::to_value(&tag).unwrap(), value);
    }

    #[test]
    fn missing_archived_defaults_to_false() {
        let tag: Tag =
            serde_json::from_value(json!({"id": "t1", "name": "urgent", "workspaceId": "123"})).unwrap();
        assert!(!tag.archived);
    }

    #[test]
    fn missing_workspace_id_is_rejected() {
        assert!(serde_json::from_value::<Tag>(json!({"id": "t1", "name": "urgent"})).is_err());
    }

    #[test]
    fn update_request_sends_only_set_fields() {
        assert_eq!(
            serde_json::to_value(AddTagRequest::new("urgent")).unwrap(),
            json!({"name": "urgent"})
        );

        let req = UpdateTagRequest {
            archived: true.into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"archived": true}));
    }
}
