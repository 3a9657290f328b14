//! Data source models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Data source (warehouse connection) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub adapter: Option<String>,
    pub database: Option<String>,
    pub host: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub port: Option<String>,
    pub ssl: Option<bool>,
    pub username: Option<String>,
    pub provider: Option<String>,
    pub vendor: Option<String>,
    pub warehouse: Option<String>,
    pub ldap: Option<bool>,
    pub public: Option<bool>,
    pub queryable: Option<bool>,
    pub asleep: Option<bool>,
    pub bridged: Option<bool>,
    pub default: Option<bool>,
    pub has_expensive_schema_updates: Option<bool>,
    pub account_username: Option<String>,
    pub organization_token: Option<String>,
    pub custom_attributes: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}
