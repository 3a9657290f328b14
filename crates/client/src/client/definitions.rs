//! Definition API methods for [`ModeClient`].
//!
//! # What this module handles:
//! - Listing and fetching definitions
//! - Creating definitions
//!
//! # What this module does NOT handle:
//! - Updating or deleting a definition (on [`Definition`])

use reqwest::Method;
use serde_json::json;

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::{CreateDefinitionParams, DefinitionData};
use crate::resources::{Definition, resource_path};
use crate::transport::pagination;

impl ModeClient {
    /// List all definitions of the organization.
    pub async fn list_definitions(&self) -> Result<Vec<Definition<'_>>> {
        let records =
            pagination::fetch_all(&self.transport, "definitions", "definitions", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| Definition::new(&self.transport, data))
            .collect())
    }

    pub async fn get_definition(&self, definition_token: &str) -> Result<Definition<'_>> {
        let path = resource_path(&[("definitions", definition_token)]);
        let data: DefinitionData = self.transport.get_json(&path, &[]).await?;
        Ok(Definition::new(&self.transport, data))
    }

    /// Create a definition.
    pub async fn create_definition(&self, params: &CreateDefinitionParams) -> Result<Definition<'_>> {
        let body = json!({ "definition": params });
        let data: DefinitionData = self
            .transport
            .send_json(Method::POST, "definitions", &body)
            .await?;
        Ok(Definition::new(&self.transport, data))
    }
}
