use serde::{Deserialize, Serialize};

use super::common::{Patch, SortOrder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub workspace_id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClientRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AddClientRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: None,
            note: None,
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub address: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub email: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub note: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub archived: Patch<bool>,
}

/// Query filters for listing clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_name_search: Option<bool>,
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

impl ClientFilter {
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
        let client: Client = serde_json::from_value(json!({
            "id": "44a687e29ae1f428e7ebe305",
            "name": "Client X",
            "workspaceId": "64a687e29ae1f428e7ebe303",
            "archived": false,
            "address": null,
            "email": "clientx@example.com",
            "note": "This is a sample note for the client."
        }))
        .unwrap();
        assert_eq!(client.address, None);
        assert_eq!(client.email.as_deref(), Some("clientx@example.com"));

        let back: Client = serde_json::from_value(serde_json::to_value(&client).unwrap()).unwrap();
        assert_eq!(back, client);
        assert!(serde_json::to_value(&client).unwrap().get("address").is_none());
    }

    #[test]
    fn add_request_omits_unset_optionals() {
        let req = AddClientRequest::new("Acme");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"name": "Acme"}));
    }

    #[test]
    fn add_request_keeps_explicit_empty_string() {
        let req = AddClientRequest::new("Acme").note("").email("ops@acme.test");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Acme", "note": "", "email": "ops@acme.test"})
        );
    }

    #[test]
    fn update_request_sends_only_touched_fields() {
        let req = UpdateClientRequest {
            archived: true.into(),
            note: Patch::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"note": null, "archived": true})
        );
    }
}
