//! Common types shared across Mode resources.
//!
//! Outcome and argument types used by several resource modules. It does NOT
//! contain resource-specific records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Result of a state-changing operation that completed without error.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The write request was sent and the server confirmed it.
    Applied,
    /// The object was already in the requested state; nothing was sent.
    Skipped,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    pub fn is_skipped(self) -> bool {
        self == Self::Skipped
    }
}

/// File format for report-run and query-run result downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormat {
    Csv,
    Json,
}

impl ResultFormat {
    /// File extension used in the `content.<ext>` endpoint.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ResultFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ClientError::Validation {
                field: "format",
                message: format!("must be either 'csv' or 'json' (got '{other}')"),
            }),
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Kind of member a space membership grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberType {
    User,
    UserGroup,
}

impl MemberType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::UserGroup => "UserGroup",
        }
    }
}

impl FromStr for MemberType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Self::User),
            "UserGroup" => Ok(Self::UserGroup),
            other => Err(ClientError::Validation {
                field: "member_type",
                message: format!("must be either 'User' or 'UserGroup' (got '{other}')"),
            }),
        }
    }
}

/// Which spaces `list_spaces` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceFilter {
    /// Every space visible to the credentials.
    All,
    /// Only custom (non-personal) spaces.
    #[default]
    Custom,
}

impl SpaceFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Custom => "custom",
        }
    }
}

/// Lifecycle state of a report run or query run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Pending,
    Enqueued,
    Running,
    Succeeded,
    Completed,
    Failed,
    Cancelled,
    /// Unknown or unrecognized state.
    #[serde(other)]
    #[default]
    Unknown,
}

impl RunState {
    /// Whether the run has stopped and will not change state again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::Completed | Self::Failed | Self::Cancelled
        )
    }

    /// Whether the run finished with results available.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded | Self::Completed)
    }
}

/// Error body Mode returns with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ModeErrorBody {
    pub id: Option<String>,
    pub message: Option<String>,
}

impl ModeErrorBody {
    /// Human-readable summary, `None` when the body carried neither field.
    pub fn summary(&self) -> Option<String> {
        match (self.id.as_deref(), self.message.as_deref()) {
            (Some(id), Some(message)) => Some(format!("{id}: {message}")),
            (None, Some(message)) => Some(message.to_string()),
            (Some(id), None) => Some(id.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_format_parses_known_values() {
        assert_eq!("csv".parse::<ResultFormat>().unwrap(), ResultFormat::Csv);
        assert_eq!(" JSON ".parse::<ResultFormat>().unwrap(), ResultFormat::Json);
        assert_eq!(ResultFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_result_format_rejects_unknown_values() {
        let err = "xlsx".parse::<ResultFormat>().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("xlsx"));
    }

    #[test]
    fn test_member_type_is_case_sensitive() {
        assert_eq!("UserGroup".parse::<MemberType>().unwrap(), MemberType::UserGroup);
        assert!("user".parse::<MemberType>().is_err());
    }

    #[test]
    fn test_run_state_deserialization() {
        let state: RunState = serde_json::from_str("\"succeeded\"").unwrap();
        assert_eq!(state, RunState::Succeeded);
        assert!(state.is_terminal());

        let state: RunState = serde_json::from_str("\"running\"").unwrap();
        assert!(!state.is_terminal());

        let state: RunState = serde_json::from_str("\"exploded\"").unwrap();
        assert_eq!(state, RunState::Unknown);
    }

    #[test]
    fn test_mode_error_body_summary() {
        let body: ModeErrorBody =
            serde_json::from_str(r#"{"id":"not_found","message":"Report not found"}"#).unwrap();
        assert_eq!(body.summary().as_deref(), Some("not_found: Report not found"));

        let body: ModeErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.summary(), None);
    }

    #[test]
    fn test_mutation_outcome_helpers() {
        assert!(MutationOutcome::Applied.is_applied());
        assert!(MutationOutcome::Skipped.is_skipped());
        assert!(!MutationOutcome::Skipped.is_applied());
    }
}
