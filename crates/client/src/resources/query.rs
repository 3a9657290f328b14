//! Query resource.

use reqwest::{Method, StatusCode};
use serde_json::json;
use tracing::debug;

use super::{Chart, resource_path};
use crate::error::Result;
use crate::models::{MutationOutcome, QueryData, QueryUpdate};
use crate::transport::{Transport, pagination};

/// A SQL query inside a report.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    transport: &'a Transport,
    report_token: String,
    data: QueryData,
}

impl<'a> Query<'a> {
    pub(crate) fn new(transport: &'a Transport, report_token: String, data: QueryData) -> Self {
        Self {
            transport,
            report_token,
            data,
        }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    /// Report this query belongs to. Fixed at construction.
    pub fn report_token(&self) -> &str {
        &self.report_token
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.data.raw_query.as_deref()
    }

    pub fn data_source_id(&self) -> Option<u64> {
        self.data.data_source_id
    }

    pub fn data(&self) -> &QueryData {
        &self.data
    }

    fn path(&self) -> String {
        resource_path(&[("reports", &self.report_token), ("queries", &self.data.token)])
    }

    /// Charts built on this query.
    pub async fn charts(&self) -> Result<Vec<Chart<'a>>> {
        let path = format!("{}/charts", self.path());
        let records = pagination::fetch_all(self.transport, &path, "charts", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| {
                Chart::new(
                    self.transport,
                    self.report_token.clone(),
                    self.data.token.clone(),
                    data,
                )
            })
            .collect())
    }

    pub async fn update_name(&mut self, name: impl Into<String>) -> Result<MutationOutcome> {
        let name = name.into();
        self.update("name", |u| u.name = Some(name)).await
    }

    pub async fn update_raw_query(&mut self, raw_query: impl Into<String>) -> Result<MutationOutcome> {
        let raw_query = raw_query.into();
        self.update("raw_query", |u| u.raw_query = Some(raw_query))
            .await
    }

    /// Point the query at another data source.
    pub async fn update_data_source(&mut self, data_source_id: u64) -> Result<MutationOutcome> {
        self.update("data_source_id", |u| u.data_source_id = Some(data_source_id))
            .await
    }

    async fn update(
        &mut self,
        field: &'static str,
        change: impl FnOnce(&mut QueryUpdate),
    ) -> Result<MutationOutcome> {
        let current = self.data.editable();
        let mut next = current.clone();
        change(&mut next);

        if next == current {
            debug!(query = %self.data.token, field, "Query update skipped; value already current");
            return Ok(MutationOutcome::Skipped);
        }

        let body = json!({ "query": next });
        self.transport
            .send_expecting(Method::PATCH, &self.path(), Some(&body), StatusCode::OK)
            .await?;
        self.data.apply(next);
        Ok(MutationOutcome::Applied)
    }

    pub async fn delete(self) -> Result<()> {
        self.transport
            .send(Method::DELETE, &self.path(), &[], None)
            .await?;
        Ok(())
    }
}
