//! Definition resource.

use reqwest::{Method, StatusCode};
use serde_json::json;
use tracing::debug;

use super::resource_path;
use crate::error::Result;
use crate::models::{DefinitionData, DefinitionUpdate, MutationOutcome};
use crate::transport::Transport;

/// A reusable SQL snippet shared across reports.
#[derive(Debug, Clone)]
pub struct Definition<'a> {
    transport: &'a Transport,
    data: DefinitionData,
}

impl<'a> Definition<'a> {
    pub(crate) fn new(transport: &'a Transport, data: DefinitionData) -> Self {
        Self { transport, data }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.data.source.as_deref()
    }

    pub fn data_source_id(&self) -> Option<u64> {
        self.data.data_source_id
    }

    pub fn data(&self) -> &DefinitionData {
        &self.data
    }

    fn path(&self) -> String {
        resource_path(&[("definitions", &self.data.token)])
    }

    /// Replace the definition's SQL.
    pub async fn update_source(&mut self, source: impl Into<String>) -> Result<MutationOutcome> {
        let source = source.into();
        self.update("source", |u| u.source = Some(source)).await
    }

    pub async fn update_data_source(&mut self, data_source_id: u64) -> Result<MutationOutcome> {
        self.update("data_source_id", |u| u.data_source_id = Some(data_source_id))
            .await
    }

    async fn update(
        &mut self,
        field: &'static str,
        change: impl FnOnce(&mut DefinitionUpdate),
    ) -> Result<MutationOutcome> {
        let current = self.data.editable();
        let mut next = current.clone();
        change(&mut next);

        if next == current {
            debug!(definition = %self.data.token, field, "Definition update skipped; value already current");
            return Ok(MutationOutcome::Skipped);
        }

        let body = json!({ "definition": next });
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
