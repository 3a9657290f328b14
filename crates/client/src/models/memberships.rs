//! Membership, invite and user models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hal::Links;

/// Membership record. Mode does not return a `token` field for memberships;
/// the identity is carried by the `self` link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipData {
    pub member_username: Option<String>,
    pub member_type: Option<String>,
    pub admin: Option<bool>,
    pub state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

impl MembershipData {
    /// Token from the last segment of the `self` link.
    pub fn token(&self) -> Option<&str> {
        self.links.last_segment("self")
    }

    /// Token of the member, from the `user` (or `member`) link.
    pub fn user_token(&self) -> Option<&str> {
        self.links
            .last_segment("user")
            .or_else(|| self.links.last_segment("member"))
    }
}

/// Parameters for inviting someone to the organization.
///
/// Serializes as `{"invitee": {"email": ...}, "message": ...}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInviteParams {
    pub invitee: Invitee,
    pub message: String,
}

impl CreateInviteParams {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            invitee: Invitee {
                email: email.into(),
            },
            message: message.into(),
        }
    }
}

/// The person an invite is addressed to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Invitee {
    pub email: String,
}

/// User record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub token: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub id: Option<u64>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}
