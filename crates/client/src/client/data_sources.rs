//! Data source API methods for [`ModeClient`].

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::DataSourceData;
use crate::resources::{DataSource, resource_path};
use crate::transport::pagination;

impl ModeClient {
    /// List all data sources of the organization.
    pub async fn list_data_sources(&self) -> Result<Vec<DataSource<'_>>> {
        let records =
            pagination::fetch_all(&self.transport, "data_sources", "data_sources", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| DataSource::new(&self.transport, data))
            .collect())
    }

    pub async fn get_data_source(&self, data_source_token: &str) -> Result<DataSource<'_>> {
        let path = resource_path(&[("data_sources", data_source_token)]);
        let data: DataSourceData = self.transport.get_json(&path, &[]).await?;
        Ok(DataSource::new(&self.transport, data))
    }
}
