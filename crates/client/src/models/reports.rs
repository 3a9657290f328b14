//! Report models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub archived: Option<bool>,
    pub space_token: Option<String>,
    pub shared: Option<bool>,
    pub public: Option<bool>,
    pub layout: Option<String>,
    pub full_width: Option<bool>,
    pub manual_run_disabled: Option<bool>,
    pub run_privately: Option<bool>,
    pub is_embedded: Option<bool>,
    pub is_signed: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub theme_id: Option<u64>,
    pub expected_runtime: Option<f64>,
    pub account_username: Option<String>,
    pub last_successful_run_token: Option<String>,
    pub web_preview_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub edited_at: Option<DateTime<Utc>>,
    pub last_run_at: Option<DateTime<Utc>>,
    pub last_successfully_run_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

/// Editable subset of a report, sent as the full `{"report": {...}}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

impl ReportData {
    /// Current editable representation.
    pub fn editable(&self) -> ReportUpdate {
        ReportUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            space_token: self.space_token.clone(),
            shared: self.shared,
        }
    }

    pub(crate) fn apply(&mut self, update: ReportUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.space_token = update.space_token;
        self.shared = update.shared;
    }
}
