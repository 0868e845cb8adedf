//! Report endpoints.

use serde_json::Value;

use crate::error::Result;
use crate::models::{ReportKind, ReportRequest};
use crate::transport::Transport;

/// Report endpoints. Must be built on the reports transport, not the
/// global one.
pub struct ReportsClient<'a> {
    transport: &'a Transport,
}

impl<'a> ReportsClient<'a> {
    /// Wrap a transport pointed at the reports host.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Generate a summary report.
    pub fn get_summary_report(
        &self,
        workspace_id: &str,
        request: &ReportRequest,
    ) -> Result<Option<Value>> {
        self.get_report(workspace_id, ReportKind::Summary, request)
    }

    /// Generate a detailed report.
    pub fn get_detailed_report(
        &self,
        workspace_id: &str,
        request: &ReportRequest,
    ) -> Result<Option<Value>> {
        self.get_report(workspace_id, ReportKind::Detailed, request)
    }

    /// Generate a weekly report.
    pub fn get_weekly_report(
        &self,
        workspace_id: &str,
        request: &ReportRequest,
    ) -> Result<Option<Value>> {
        self.get_report(workspace_id, ReportKind::Weekly, request)
    }

    /// Generate a report of the given kind. The body shape depends on the
    /// grouping requested, so it is returned untyped.
    pub fn get_report(
        &self,
        workspace_id: &str,
        kind: ReportKind,
        request: &ReportRequest,
    ) -> Result<Option<Value>> {
        let path = format!("/workspaces/{workspace_id}/reports/{}/", kind.as_str());
        self.transport.post(&path, request)
    }
}
