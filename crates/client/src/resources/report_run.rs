//! Report run resource.

use reqwest::{Method, StatusCode};
use tracing::debug;

use super::{QueryRun, resource_path};
use crate::error::Result;
use crate::models::{QueryRunData, ReportRunData, ResultFormat, RunState};
use crate::transport::{Transport, pagination, request};

/// One execution of a report.
#[derive(Debug, Clone)]
pub struct ReportRun<'a> {
    transport: &'a Transport,
    report_token: String,
    data: ReportRunData,
}

impl<'a> ReportRun<'a> {
    pub(crate) fn new(transport: &'a Transport, report_token: String, data: ReportRunData) -> Self {
        Self {
            transport,
            report_token,
            data,
        }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    /// Report this run belongs to. Fixed at construction.
    pub fn report_token(&self) -> &str {
        &self.report_token
    }

    pub fn state(&self) -> RunState {
        self.data.state.unwrap_or_default()
    }

    /// Whether the run reached a terminal state as of the last fetch.
    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }

    pub fn data(&self) -> &ReportRunData {
        &self.data
    }

    fn path(&self) -> String {
        resource_path(&[("reports", &self.report_token), ("runs", &self.data.token)])
    }

    /// Query runs executed as part of this report run.
    pub async fn query_runs(&self) -> Result<Vec<QueryRun<'a>>> {
        let path = format!("{}/query_runs", self.path());
        let records = pagination::fetch_all(self.transport, &path, "query_runs", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| self.query_run(data))
            .collect())
    }

    pub async fn get_query_run(&self, query_run_token: &str) -> Result<QueryRun<'a>> {
        let path = format!(
            "{}/{}",
            self.path(),
            resource_path(&[("query_runs", query_run_token)])
        );
        let data: QueryRunData = self.transport.get_json(&path, &[]).await?;
        Ok(self.query_run(data))
    }

    fn query_run(&self, data: QueryRunData) -> QueryRun<'a> {
        QueryRun::new(
            self.transport,
            self.report_token.clone(),
            self.data.token.clone(),
            data,
        )
    }

    /// Re-run with the same parameters. The server answers `202 Accepted`.
    pub async fn clone_run(&self) -> Result<ReportRun<'a>> {
        let path = format!("{}/clone", self.path());
        let response = self
            .transport
            .send_expecting(Method::POST, &path, None, StatusCode::ACCEPTED)
            .await?;
        let data: ReportRunData = request::decode_json(response).await?;
        debug!(report = %self.report_token, source = %self.data.token, run = %data.token, "Report run cloned");
        Ok(ReportRun::new(self.transport, self.report_token.clone(), data))
    }

    /// Download the run's result set as `csv` or `json` text.
    ///
    /// Any other format fails with a validation error before a request is sent.
    pub async fn results(&self, format: &str) -> Result<String> {
        let format: ResultFormat = format.parse()?;
        let path = format!("{}/results/content.{}", self.path(), format.extension());
        self.transport.get_text(&path).await
    }

    /// Download the rendered PDF export of this run.
    pub async fn pdf(&self) -> Result<Vec<u8>> {
        let path = format!(
            "{}/exports/{}/pdf/download",
            resource_path(&[("reports", &self.report_token)]),
            resource_path(&[("runs", &self.data.token)])
        );
        self.transport.get_bytes(&path).await
    }

    /// Re-read the run from the server, e.g. to observe a state change.
    pub async fn refresh(&mut self) -> Result<()> {
        self.data = self.transport.get_json(&self.path(), &[]).await?;
        Ok(())
    }
}
