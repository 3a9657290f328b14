//! Definition models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Parameters for creating a definition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDefinitionParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: String,
    pub data_source_id: u64,
}

/// Definition (reusable SQL snippet) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub data_source_id: Option<u64>,
    pub sync_state: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

/// Editable subset of a definition, sent as the full `{"definition": {...}}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<u64>,
}

impl DefinitionData {
    /// Current editable representation.
    pub fn editable(&self) -> DefinitionUpdate {
        DefinitionUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            source: self.source.clone(),
            data_source_id: self.data_source_id,
        }
    }

    pub(crate) fn apply(&mut self, update: DefinitionUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.source = update.source;
        self.data_source_id = update.data_source_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_sync_state() {
        let def: DefinitionData = serde_json::from_value(json!({
            "token": "d1",
            "source": "select * from users",
            "data_source_id": 3,
            "sync_state": "synced",
        }))
        .unwrap();

        assert_eq!(def.sync_state.as_deref(), Some("synced"));
        assert_eq!(def.editable().data_source_id, Some(3));
    }
}
