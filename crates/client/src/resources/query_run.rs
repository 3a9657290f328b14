//! Query run resource.

use super::resource_path;
use crate::error::Result;
use crate::models::{QueryRunData, ResultFormat, RunState};
use crate::transport::Transport;

/// One query executed inside a report run.
#[derive(Debug, Clone)]
pub struct QueryRun<'a> {
    transport: &'a Transport,
    report_token: String,
    report_run_token: String,
    data: QueryRunData,
}

impl<'a> QueryRun<'a> {
    pub(crate) fn new(
        transport: &'a Transport,
        report_token: String,
        report_run_token: String,
        data: QueryRunData,
    ) -> Self {
        Self {
            transport,
            report_token,
            report_run_token,
            data,
        }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn report_token(&self) -> &str {
        &self.report_token
    }

    pub fn report_run_token(&self) -> &str {
        &self.report_run_token
    }

    pub fn state(&self) -> RunState {
        self.data.state.unwrap_or_default()
    }

    pub fn data(&self) -> &QueryRunData {
        &self.data
    }

    /// Download this query's result set as `csv` or `json` text.
    pub async fn results(&self, format: &str) -> Result<String> {
        let format: ResultFormat = format.parse()?;
        let path = format!(
            "{}/results/content.{}",
            resource_path(&[
                ("reports", &self.report_token),
                ("runs", &self.report_run_token),
                ("query_runs", &self.data.token),
            ]),
            format.extension()
        );
        self.transport.get_text(&path).await
    }
}
