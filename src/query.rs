//! Path and query-string construction shared by every resource client.
//!
//! Collection paths end in `/` when unfiltered. With filters the trailing `/`
//! is dropped and the encoded query follows `?`:
//!
//! ```text
//! /workspaces/234/clients/
//! /workspaces/234/clients?name=Sally
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClockifyError, Result};

/// Ordered query pairs. Repeated keys are allowed and kept in order.
pub type QueryPairs = Vec<(String, String)>;

/// Join a collection path (without trailing slash) with its query.
pub fn collection_path(base: &str, query: &[(String, String)]) -> String {
    let base = base.trim_end_matches('/');
    if query.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}?{}", encode_query(query))
    }
}

/// Collection path for an optional typed filter.
pub fn filtered_path<F: Serialize>(base: &str, filters: Option<&F>) -> Result<String> {
    let query = match filters {
        Some(f) => encode_filters(f)?,
        None => Vec::new(),
    };
    Ok(collection_path(base, &query))
}

/// Flatten a filter struct (or map) into query pairs.
///
/// `null` values are dropped, arrays become one pair per element, and scalar
/// values are rendered the way the API expects (`true`, `42`, plain strings).
pub fn encode_filters<F: Serialize + ?Sized>(filters: &F) -> Result<QueryPairs> {
    let value = serde_json::to_value(filters)
        .map_err(|e| ClockifyError::invalid_field("filters", e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ClockifyError::invalid_field(
                "filters",
                format!("expected a map of parameters, got {other}"),
            ))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(v) = scalar(&key, item)? {
                        pairs.push((key.clone(), v));
                    }
                }
            }
            other => {
                if let Some(v) = scalar(&key, other)? {
                    pairs.push((key, v));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(ClockifyError::invalid_field(
            key,
            "query values must be scalars or lists of scalars",
        )),
    }
}

/// `application/x-www-form-urlencoded` encoding of the pairs, joined by `&`.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "kebab-case")]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        page_size: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        archived: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn unfiltered_collection_keeps_trailing_slash() {
        assert_eq!(collection_path("/workspaces/234/clients", &[]), "/workspaces/234/clients/");
        assert_eq!(collection_path("/workspaces/234/clients/", &[]), "/workspaces/234/clients/");
    }

    #[test]
    fn filtered_collection_drops_trailing_slash() {
        let query = vec![("name".to_string(), "Sally".to_string())];
        assert_eq!(
            collection_path("/workspaces/234/clients", &query),
            "/workspaces/234/clients?name=Sally"
        );
    }

    #[test]
    fn typed_filters_keep_declaration_order() {
        let f = Filter {
            page: Some(1),
            page_size: Some(1),
            ..Default::default()
        };
        assert_eq!(
            filtered_path("/workspaces/345/projects", Some(&f)).unwrap(),
            "/workspaces/345/projects?page=1&page-size=1"
        );
    }

    #[test]
    fn list_values_repeat_the_key_in_order() {
        let f = Filter {
            tags: Some(vec!["b".into(), "a".into(), "c".into()]),
            archived: Some(false),
            ..Default::default()
        };
        let pairs = encode_filters(&f).unwrap();
        assert_eq!(encode_query(&pairs), "archived=false&tags=b&tags=a&tags=c");
    }

    #[test]
    fn empty_filter_is_no_filter() {
        let empty = Filter::default();
        assert_eq!(
            filtered_path("/workspaces/1/tags", Some(&empty)).unwrap(),
            "/workspaces/1/tags/"
        );
        assert_eq!(
            filtered_path::<Filter>("/workspaces/1/tags", None).unwrap(),
            "/workspaces/1/tags/"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let mut map = BTreeMap::new();
        map.insert("name", "My Project & co");
        let pairs = encode_filters(&map).unwrap();
        assert_eq!(encode_query(&pairs), "name=My+Project+%26+co");
    }

    #[test]
    fn nested_objects_are_rejected() {
        let value = serde_json::json!({"filter": {"nested": true}});
        let err = encode_filters(&value).unwrap_err();
        assert!(matches!(err, ClockifyError::InvalidField { ref field, .. } if field == "filter"));
    }

    #[test]
    fn non_map_filters_are_rejected() {
        assert!(encode_filters(&vec![1, 2]).is_err());
    }

    #[test]
    fn same_filters_give_same_path() {
        let f = Filter {
            name: Some("Bugfixing".into()),
            ..Default::default()
        };
        let first = filtered_path("/workspaces/1/projects/2/tasks", Some(&f)).unwrap();
        let second = filtered_path("/workspaces/1/projects/2/tasks", Some(&f)).unwrap();
        assert_eq!(first, second);
    }
}
