//! Report resource.

use reqwest::{Method, StatusCode};
use serde_json::json;
use tracing::debug;

use super::{Query, ReportRun, resource_path};
use crate::error::Result;
use crate::models::{
    CreateQueryParams, MutationOutcome, QueryData, ReportData, ReportRunData, ReportUpdate,
};
use crate::transport::{Transport, pagination, request};

/// A report and its scoped operations.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    transport: &'a Transport,
    data: ReportData,
}

impl<'a> Report<'a> {
    pub(crate) fn new(transport: &'a Transport, data: ReportData) -> Self {
        Self { transport, data }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn space_token(&self) -> Option<&str> {
        self.data.space_token.as_deref()
    }

    /// `true` only when the server reported the report as archived.
    pub fn is_archived(&self) -> bool {
        self.data.archived == Some(true)
    }

    pub fn is_shared(&self) -> bool {
        self.data.shared == Some(true)
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    fn path(&self) -> String {
        resource_path(&[("reports", &self.data.token)])
    }

    /// Queries in this report.
    pub async fn queries(&self) -> Result<Vec<Query<'a>>> {
        let path = format!("{}/queries", self.path());
        let records = pagination::fetch_all(self.transport, &path, "queries", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| Query::new(self.transport, self.token().to_string(), data))
            .collect())
    }

    /// Runs of this report.
    pub async fn runs(&self) -> Result<Vec<ReportRun<'a>>> {
        let path = format!("{}/runs", self.path());
        let records = pagination::fetch_all(self.transport, &path, "report_runs", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| ReportRun::new(self.transport, self.token().to_string(), data))
            .collect())
    }

    /// One run of this report.
    pub async fn get_run(&self, run_token: &str) -> Result<ReportRun<'a>> {
        let path = resource_path(&[("reports", self.token()), ("runs", run_token)]);
        let data: ReportRunData = self.transport.get_json(&path, &[]).await?;
        Ok(ReportRun::new(self.transport, self.token().to_string(), data))
    }

    /// Start a new run. The server queues it and answers `202 Accepted`.
    ///
    /// `parameters` are sent as `{"parameters": {...}}` when given.
    pub async fn run(&self, parameters: Option<serde_json::Value>) -> Result<ReportRun<'a>> {
        let path = format!("{}/runs", self.path());
        let body = parameters.map(|p| json!({ "parameters": p }));
        let response = self
            .transport
            .send_expecting(Method::POST, &path, body.as_ref(), StatusCode::ACCEPTED)
            .await?;
        let data: ReportRunData = request::decode_json(response).await?;
        debug!(report = %self.data.token, run = %data.token, "Report run queued");
        Ok(ReportRun::new(self.transport, self.token().to_string(), data))
    }

    /// Add a query to this report.
    pub async fn create_query(
        &self,
        data_source_id: u64,
        raw_query: impl Into<String>,
        name: Option<String>,
    ) -> Result<Query<'a>> {
        let params = CreateQueryParams {
            data_source_id,
            raw_query: raw_query.into(),
            name,
        };
        let path = format!("{}/queries", self.path());
        let body = json!({ "query": params });
        let data: QueryData = self
            .transport
            .send_json(Method::POST, &path, &body)
            .await?;
        Ok(Query::new(self.transport, self.token().to_string(), data))
    }

    pub async fn archive(&mut self) -> Result<MutationOutcome> {
        self.set_archived(true).await
    }

    pub async fn unarchive(&mut self) -> Result<MutationOutcome> {
        self.set_archived(false).await
    }

    async fn set_archived(&mut self, archived: bool) -> Result<MutationOutcome> {
        if self.data.archived == Some(archived) {
            debug!(report = %self.data.token, archived, "Report already in requested archive state");
            return Ok(MutationOutcome::Skipped);
        }

        let action = if archived { "archive" } else { "unarchive" };
        let path = format!("{}/{action}", self.path());
        self.transport
            .send_expecting(Method::PATCH, &path, None, StatusCode::OK)
            .await?;
        self.data.archived = Some(archived);
        Ok(MutationOutcome::Applied)
    }

    pub async fn update_name(&mut self, name: impl Into<String>) -> Result<MutationOutcome> {
        let name = name.into();
        self.update("name", |u| u.name = Some(name)).await
    }

    pub async fn update_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<MutationOutcome> {
        let description = description.into();
        self.update("description", |u| u.description = Some(description))
            .await
    }

    /// Move the report into another space.
    pub async fn move_to_space(&mut self, space_token: impl Into<String>) -> Result<MutationOutcome> {
        let space_token = space_token.into();
        self.update("space_token", |u| u.space_token = Some(space_token))
            .await
    }

    pub async fn set_shared(&mut self, shared: bool) -> Result<MutationOutcome> {
        self.update("shared", |u| u.shared = Some(shared)).await
    }

    async fn update(
        &mut self,
        field: &'static str,
        change: impl FnOnce(&mut ReportUpdate),
    ) -> Result<MutationOutcome> {
        let current = self.data.editable();
        let mut next = current.clone();
        change(&mut next);

        if next == current {
            debug!(report = %self.data.token, field, "Report update skipped; value already current");
            return Ok(MutationOutcome::Skipped);
        }

        let body = json!({ "report": next });
        self.transport
            .send_expecting(Method::PATCH, &self.path(), Some(&body), StatusCode::OK)
            .await?;
        self.data.apply(next);
        Ok(MutationOutcome::Applied)
    }

    /// Delete the report.
    pub async fn delete(self) -> Result<()> {
        self.transport
            .send(Method::DELETE, &self.path(), &[], None)
            .await?;
        Ok(())
    }
}
