//! Query and chart models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Parameters for creating a query inside a report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateQueryParams {
    /// Data source the query runs against (required).
    pub data_source_id: u64,
    /// SQL text (required).
    pub raw_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub name: Option<String>,
    pub raw_query: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub data_source_id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub last_run_id: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

/// Editable subset of a query, sent as the full `{"query": {...}}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<u64>,
}

impl QueryData {
    /// Current editable representation.
    pub fn editable(&self) -> QueryUpdate {
        QueryUpdate {
            name: self.name.clone(),
            raw_query: self.raw_query.clone(),
            data_source_id: self.data_source_id,
        }
    }

    pub(crate) fn apply(&mut self, update: QueryUpdate) {
        self.name = update.name;
        self.raw_query = update.raw_query;
        self.data_source_id = update.data_source_id;
    }
}

/// Chart record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub token: String,
    pub view: Option<serde_json::Value>,
    pub view_version: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

impl ChartData {
    /// Chart type selected in the view, e.g. `bar` or `line`.
    pub fn chart_type(&self) -> Option<&str> {
        self.view.as_ref()?.get("selectedChart")?.as_str()
    }
}
