//! Data source resource.

use super::resource_path;
use crate::error::Result;
use crate::models::DataSourceData;
use crate::transport::Transport;

/// A warehouse connection queries run against.
#[derive(Debug, Clone)]
pub struct DataSource<'a> {
    transport: &'a Transport,
    data: DataSourceData,
}

impl<'a> DataSource<'a> {
    pub(crate) fn new(transport: &'a Transport, data: DataSourceData) -> Self {
        Self { transport, data }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    /// Numeric id, used by queries and definitions to reference this source.
    pub fn id(&self) -> Option<u64> {
        self.data.id
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn adapter(&self) -> Option<&str> {
        self.data.adapter.as_deref()
    }

    pub fn data(&self) -> &DataSourceData {
        &self.data
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let path = resource_path(&[("data_sources", &self.data.token)]);
        self.data = self.transport.get_json(&path, &[]).await?;
        Ok(())
    }
}
