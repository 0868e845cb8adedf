use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::common::SortOrder;

/// The three report endpoints served from the reports host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Summary,
    Detailed,
    Weekly,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::Detailed => "detailed",
            ReportKind::Weekly => "weekly",
        }
    }
}

/// Body of a report request.
///
/// Grouping, filtering and paging keys differ per report kind; put them in
/// `extra` and they are sent alongside the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_range_start: DateTime<Utc>,
    pub date_range_end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_shown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReportRequest {
    pub fn new(date_range_start: DateTime<Utc>, date_range_end: DateTime<Utc>) -> Self {
        Self {
            date_range_start,
            date_range_end,
            date_range_type: None,
            sort_order: None,
            amount_shown: None,
            export_type: None,
            extra: Map::new(),
        }
    }

    /// Adds an arbitrary report option, e.g. `summaryFilter`.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
