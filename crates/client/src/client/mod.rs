//! Main Mode REST API client and top-level API methods.
//!
//! [`ModeClient`] owns the [`Transport`]; every resource object it returns
//! borrows that transport, so resources cannot outlive the client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `spaces`: Space and report lookups
//! - `reports`: Report, query and report-run lookups
//! - `memberships`: Organization memberships and invites
//! - `data_sources`: Data source lookups
//! - `definitions`: Definition lookups and creation
//! - `users`: User lookup
//!
//! # What this module does NOT handle:
//! - HTTP execution and response mapping (delegated to [`crate::transport`])
//! - Operations scoped to one entity (on the objects in [`crate::resources`])
//!
//! # Invariants
//! - Every method issues its requests sequentially and awaits each response
//! - No method retries; the first error is returned

pub mod builder;

mod data_sources;
mod definitions;
mod memberships;
mod reports;
mod spaces;
mod users;

use crate::transport::Transport;

/// Mode REST API client scoped to one organization.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use mode_client::ModeClient;
///
/// # fn main() -> mode_client::Result<()> {
/// let client = ModeClient::builder()
///     .organization("acme")
///     .token("api-token")
///     .password("api-password")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ModeClient {
    pub(crate) transport: Transport,
}

impl ModeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ModeClientBuilder {
        builder::ModeClientBuilder::new()
    }

    /// The transport shared by all resource objects from this client.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Organization the client is scoped to.
    pub fn organization(&self) -> &str {
        self.transport.organization()
    }

    /// Organization-scoped base URL.
    pub fn base_url(&self) -> &str {
        self.transport.org_url()
    }
}
