//! Space models.

use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Parameters for creating a new space.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSpaceParams {
    /// Space type, e.g. `custom` (required).
    pub space_type: String,
    /// Display name (required).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Space record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub space_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub restricted: Option<bool>,
    pub free_default: Option<bool>,
    pub default_access_level: Option<String>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

/// Editable subset of a space, sent as the full `{"space": {...}}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SpaceData {
    /// Current editable representation.
    pub fn editable(&self) -> SpaceUpdate {
        SpaceUpdate {
            space_type: self.space_type.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    pub(crate) fn apply(&mut self, update: SpaceUpdate) {
        self.space_type = update.space_type;
        self.name = update.name;
        self.description = update.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_space_missing_fields_decode_to_none() {
        let space: SpaceData = serde_json::from_value(json!({ "token": "s1" })).unwrap();
        assert_eq!(space.token, "s1");
        assert_eq!(space.name, None);
        assert_eq!(space.restricted, None);
    }

    #[test]
    fn test_space_update_skips_absent_fields() {
        let space: SpaceData =
            serde_json::from_value(json!({ "token": "s1", "name": "Ops", "space_type": "custom" }))
                .unwrap();
        let payload = serde_json::to_value(space.editable()).unwrap();
        assert_eq!(payload, json!({ "space_type": "custom", "name": "Ops" }));
    }
}
