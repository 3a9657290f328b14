//! Report API methods for [`ModeClient`].
//!
//! Direct lookups of a report, one of its queries or one of its runs by
//! token. Everything else about a report lives on [`Report`].

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::{QueryData, ReportData, ReportRunData};
use crate::resources::{Query, Report, ReportRun, resource_path};

impl ModeClient {
    /// Fetch one report by token.
    pub async fn get_report(&self, report_token: &str) -> Result<Report<'_>> {
        let path = resource_path(&[("reports", report_token)]);
        let data: ReportData = self.transport.get_json(&path, &[]).await?;
        Ok(Report::new(&self.transport, data))
    }

    /// Fetch one query of a report.
    pub async fn get_query(&self, report_token: &str, query_token: &str) -> Result<Query<'_>> {
        let path = resource_path(&[("reports", report_token), ("queries", query_token)]);
        let data: QueryData = self.transport.get_json(&path, &[]).await?;
        Ok(Query::new(&self.transport, report_token.to_string(), data))
    }

    /// Fetch one run of a report.
    pub async fn get_report_run(
        &self,
        report_token: &str,
        run_token: &str,
    ) -> Result<ReportRun<'_>> {
        let path = resource_path(&[("reports", report_token), ("runs", run_token)]);
        let data: ReportRunData = self.transport.get_json(&path, &[]).await?;
        Ok(ReportRun::new(&self.transport, report_token.to_string(), data))
    }
}
