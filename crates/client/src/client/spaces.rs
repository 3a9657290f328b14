//! Space API methods for [`ModeClient`].
//!
//! # What this module handles:
//! - Listing spaces (paginated, filtered)
//! - Fetching and creating spaces
//! - Listing the reports of a space by token
//!
//! # What this module does NOT handle:
//! - Updating or deleting a space (on [`Space`])

use reqwest::Method;
use serde_json::json;

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::{CreateSpaceParams, SpaceData, SpaceFilter};
use crate::resources::{Report, Space, resource_path};
use crate::transport::pagination;

impl ModeClient {
    /// List spaces visible to the credentials.
    pub async fn list_spaces(&self, filter: SpaceFilter) -> Result<Vec<Space<'_>>> {
        let params = [("filter", filter.as_str().to_string())];
        let records = pagination::fetch_all(&self.transport, "spaces", "spaces", &params).await?;
        Ok(records
            .into_iter()
            .map(|data| Space::new(&self.transport, data))
            .collect())
    }

    /// Fetch one space by token.
    pub async fn get_space(&self, space_token: &str) -> Result<Space<'_>> {
        let path = resource_path(&[("spaces", space_token)]);
        let data: SpaceData = self.transport.get_json(&path, &[]).await?;
        Ok(Space::new(&self.transport, data))
    }

    /// Create a space.
    pub async fn create_space(
        &self,
        space_type: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Space<'_>> {
        let params = CreateSpaceParams {
            space_type: space_type.into(),
            name: name.into(),
            description,
        };
        let body = json!({ "space": params });
        let data: SpaceData = self
            .transport
            .send_json(Method::POST, "spaces", &body)
            .await?;
        Ok(Space::new(&self.transport, data))
    }

    /// List every report in a space without fetching the space first.
    pub async fn list_reports(&self, space_token: &str) -> Result<Vec<Report<'_>>> {
        let path = format!("{}/reports", resource_path(&[("spaces", space_token)]));
        let records = pagination::fetch_all(&self.transport, &path, "reports", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| Report::new(&self.transport, data))
            .collect())
    }
}
