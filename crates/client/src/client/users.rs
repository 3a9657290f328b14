//! User API methods for [`ModeClient`].

use crate::client::ModeClient;
use crate::error::Result;
use crate::models::UserData;
use crate::resources::User;
use crate::transport::encode_path_segment;

impl ModeClient {
    /// Fetch a user by username. Users are addressed from the API root, not the organization.
    pub async fn get_user(&self, username: &str) -> Result<User<'_>> {
        let data: UserData = self
            .transport
            .get_root_json(&encode_path_segment(username))
            .await?;
        Ok(User::new(&self.transport, data))
    }
}
