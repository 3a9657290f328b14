//! Membership resource (organization or space membership).

use reqwest::Method;

use super::{User, resource_path};
use crate::error::{ClientError, Result};
use crate::models::{MembershipData, UserData};
use crate::transport::{Transport, encode_path_segment};

/// Grants a member access to the organization or, when `space_token` is set, to one space.
///
/// Mode sends no `token` attribute for memberships; it is taken from the
/// last segment of the `self` link when the object is built.
#[derive(Debug, Clone)]
pub struct Membership<'a> {
    transport: &'a Transport,
    token: String,
    space_token: Option<String>,
    data: MembershipData,
}

impl<'a> Membership<'a> {
    /// Fails with [`ClientError::MissingField`] when the record has no `self` link.
    pub(crate) fn new(
        transport: &'a Transport,
        data: MembershipData,
        space_token: Option<String>,
        url: &str,
    ) -> Result<Self> {
        let token = data
            .token()
            .ok_or_else(|| ClientError::MissingField {
                field: "_links.self.href".to_string(),
                url: url.to_string(),
            })?
            .to_string();

        Ok(Self {
            transport,
            token,
            space_token,
            data,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Space this membership belongs to; `None` for organization memberships.
    pub fn space_token(&self) -> Option<&str> {
        self.space_token.as_deref()
    }

    pub fn member_username(&self) -> Option<&str> {
        self.data.member_username.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.data.admin == Some(true)
    }

    pub fn data(&self) -> &MembershipData {
        &self.data
    }

    fn path(&self) -> String {
        match &self.space_token {
            Some(space) => resource_path(&[("spaces", space), ("memberships", &self.token)]),
            None => resource_path(&[("memberships", &self.token)]),
        }
    }

    /// Fetch the member's user record.
    pub async fn user(&self) -> Result<User<'a>> {
        let username =
            self.member_username()
                .ok_or_else(|| ClientError::MissingField {
                    field: "member_username".to_string(),
                    url: self.transport.url_for(&self.path()),
                })?;
        let data: UserData = self
            .transport
            .get_root_json(&encode_path_segment(username))
            .await?;
        Ok(User::new(self.transport, data))
    }

    /// Revoke the membership.
    pub async fn delete(self) -> Result<()> {
        self.transport
            .send(Method::DELETE, &self.path(), &[], None)
            .await?;
        Ok(())
    }
}
