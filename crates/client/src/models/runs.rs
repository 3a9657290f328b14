//! Report run and query run models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::RunState;
use super::hal::Links;

/// Report run record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRunData {
    pub token: String,
    pub state: Option<RunState>,
    pub parameters: Option<serde_json::Value>,
    pub is_latest_report_run: Option<bool>,
    pub is_latest_successful_report_run: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub purge_started_at: Option<DateTime<Utc>>,
    pub purge_completed_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

/// Query run record (one per query executed inside a report run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRunData {
    pub token: String,
    pub state: Option<RunState>,
    pub query_token: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub data_source_id: Option<u64>,
    pub raw_source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

impl QueryRunData {
    /// Token of the query this run executed, from the record or its `query` link.
    pub fn query_token(&self) -> Option<&str> {
        self.query_token
            .as_deref()
            .or_else(|| self.links.last_segment("query"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_run_state_and_parameters() {
        let run: ReportRunData = serde_json::from_value(json!({
            "token": "run1",
            "state": "enqueued",
            "parameters": { "region": "emea" },
        }))
        .unwrap();

        assert_eq!(run.state, Some(RunState::Enqueued));
        assert_eq!(run.parameters, Some(json!({ "region": "emea" })));
    }

    #[test]
    fn test_query_run_token_falls_back_to_link() {
        let run: QueryRunData = serde_json::from_value(json!({
            "token": "qr1",
            "_links": { "query": { "href": "/api/acme/reports/r1/queries/q7" } }
        }))
        .unwrap();
        assert_eq!(run.query_token(), Some("q7"));
    }
}
