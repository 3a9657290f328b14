//! Chart resource.

use super::resource_path;
use crate::error::Result;
use crate::models::ChartData;
use crate::transport::Transport;

/// A chart drawn from a query's results.
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    transport: &'a Transport,
    report_token: String,
    query_token: String,
    data: ChartData,
}

impl<'a> Chart<'a> {
    pub(crate) fn new(
        transport: &'a Transport,
        report_token: String,
        query_token: String,
        data: ChartData,
    ) -> Self {
        Self {
            transport,
            report_token,
            query_token,
            data,
        }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn report_token(&self) -> &str {
        &self.report_token
    }

    pub fn query_token(&self) -> &str {
        &self.query_token
    }

    pub fn chart_type(&self) -> Option<&str> {
        self.data.chart_type()
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let path = resource_path(&[
            ("reports", &self.report_token),
            ("queries", &self.query_token),
            ("charts", &self.data.token),
        ]);
        self.data = self.transport.get_json(&path, &[]).await?;
        Ok(())
    }
}
