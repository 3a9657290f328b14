//! User resource.

use crate::error::{ClientError, Result};
use crate::models::UserData;
use crate::transport::{Transport, encode_path_segment};

/// A Mode user. Users live outside the organization scope (`/api/{username}`).
#[derive(Debug, Clone)]
pub struct User<'a> {
    transport: &'a Transport,
    data: UserData,
}

impl<'a> User<'a> {
    pub(crate) fn new(transport: &'a Transport, data: UserData) -> Self {
        Self { transport, data }
    }

    pub fn token(&self) -> &str {
        &self.data.token
    }

    pub fn username(&self) -> Option<&str> {
        self.data.username.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.data.email.as_deref()
    }

    pub fn data(&self) -> &UserData {
        &self.data
    }

    /// Re-read the user by username.
    pub async fn refresh(&mut self) -> Result<()> {
        let username = self
            .data
            .username
            .as_deref()
            .ok_or_else(|| ClientError::MissingField {
                field: "username".to_string(),
                url: self.transport.api_url().to_string(),
            })?;
        self.data = self
            .transport
            .get_root_json(&encode_path_segment(username))
            .await?;
        Ok(())
    }
}
