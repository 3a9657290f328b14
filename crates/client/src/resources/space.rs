//! Space resource.

use std::str::FromStr;

use reqwest::{Method, StatusCode};
use serde_json::json;
use tracing::debug;

use super::{Membership, Report, resource_path};
use crate::error::Result;
use crate::models::{MemberType, MembershipData, MutationOutcome, SpaceData, SpaceUpdate};
use crate::transport::{Transport, pagination};

/// A space (collection of reports) and its scoped operations.
#[derive(Debug, Clone)]
pub struct Space<'a> {
    transport: &'a Transport,
    data: SpaceData,
}

impl<'a> Space<'a> {
    pub(crate) fn new(transport: &'a Transport, data: SpaceData) -> Self {
        Self { transport, data }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn space_type(&self) -> Option<&str> {
        self.data.space_type.as_deref()
    }

    pub fn data(&self) -> &SpaceData {
        &self.data
    }

    fn path(&self) -> String {
        resource_path(&[("spaces", &self.data.token)])
    }

    /// All reports in this space.
    pub async fn reports(&self) -> Result<Vec<Report<'a>>> {
        let path = format!("{}/reports", self.path());
        let records = pagination::fetch_all(self.transport, &path, "reports", &[]).await?;
        Ok(records
            .into_iter()
            .map(|data| Report::new(self.transport, data))
            .collect())
    }

    /// All memberships granting access to this space.
    pub async fn memberships(&self) -> Result<Vec<Membership<'a>>> {
        let path = format!("{}/memberships", self.path());
        let records: Vec<MembershipData> =
            pagination::fetch_all(self.transport, &path, "memberships", &[]).await?;
        let url = self.transport.url_for(&path);
        records
            .into_iter()
            .map(|data| Membership::new(self.transport, data, Some(self.token().to_string()), &url))
            .collect()
    }

    /// One membership of this space.
    pub async fn get_membership(&self, membership_token: &str) -> Result<Membership<'a>> {
        let path = format!(
            "{}/{}",
            self.path(),
            resource_path(&[("memberships", membership_token)])
        );
        let data: MembershipData = self.transport.get_json(&path, &[]).await?;
        let url = self.transport.url_for(&path);
        Membership::new(self.transport, data, Some(self.token().to_string()), &url)
    }

    /// Grant a user or user group access to this space.
    ///
    /// `member_type` must be exactly `User` or `UserGroup`; anything else fails
    /// with [`ClientError::Validation`](crate::ClientError::Validation) before
    /// a request is sent.
    pub async fn add_membership(
        &self,
        member_type: &str,
        member_token: &str,
    ) -> Result<Membership<'a>> {
        let member_type = MemberType::from_str(member_type)?;
        let path = format!("{}/memberships", self.path());
        let body = json!({
            "membership": {
                "member_type": member_type.as_str(),
                "member_token": member_token,
            }
        });
        let data: MembershipData = self
            .transport
            .send_json(Method::POST, &path, &body)
            .await?;
        let url = self.transport.url_for(&path);
        Membership::new(self.transport, data, Some(self.token().to_string()), &url)
    }

    pub async fn update_name(&mut self, name: impl Into<String>) -> Result<MutationOutcome> {
        let name = name.into();
        self.update("name", |u| u.name = Some(name)).await
    }

    pub async fn update_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<MutationOutcome> {
        let description = description.into();
        self.update("description", |u| u.description = Some(description))
            .await
    }

    async fn update(
        &mut self,
        field: &'static str,
        change: impl FnOnce(&mut SpaceUpdate),
    ) -> Result<MutationOutcome> {
        let current = self.data.editable();
        let mut next = current.clone();
        change(&mut next);

        if next == current {
            debug!(space = %self.data.token, field, "Space update skipped; value already current");
            return Ok(MutationOutcome::Skipped);
        }

        let body = json!({ "space": next });
        self.transport
            .send_expecting(Method::PATCH, &self.path(), Some(&body), StatusCode::OK)
            .await?;
        self.data.apply(next);
        Ok(MutationOutcome::Applied)
    }

    /// Delete the space. The object is consumed either way.
    pub async fn delete(self) -> Result<()> {
        self.transport
            .send(Method::DELETE, &self.path(), &[], None)
            .await?;
        Ok(())
    }
}
