//! Organization membership API methods for [`ModeClient`].
//!
//! # What this module handles:
//! - Listing and fetching organization memberships
//! - Inviting someone to the organization
//!
//! # What this module does NOT handle:
//! - Space memberships (on [`crate::resources::Space`])

use reqwest::Method;
use serde_json::json;

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::{CreateInviteParams, MembershipData};
use crate::resources::{Membership, resource_path};
use crate::transport::pagination;

impl ModeClient {
    /// List all memberships of the organization.
    pub async fn list_memberships(&self) -> Result<Vec<Membership<'_>>> {
        let records: Vec<MembershipData> =
            pagination::fetch_all(&self.transport, "memberships", "memberships", &[]).await?;
        let url = self.transport.url_for("memberships");
        records
            .into_iter()
            .map(|data| Membership::new(&self.transport, data, None, &url))
            .collect()
    }

    /// Fetch one organization membership by token.
    pub async fn get_membership(&self, membership_token: &str) -> Result<Membership<'_>> {
        let path = resource_path(&[("memberships", membership_token)]);
        let data: MembershipData = self.transport.get_json(&path, &[]).await?;
        let url = self.transport.url_for(&path);
        Membership::new(&self.transport, data, None, &url)
    }

    /// Invite someone to the organization by email. Returns the server's invite record.
    pub async fn create_invite(
        &self,
        invitee_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<serde_json::Value> {
        let params = CreateInviteParams::new(invitee_email, message);
        let body = json!({ "invite": params });
        self.transport
            .send_json(Method::POST, "invites", &body)
            .await
    }
}
