//! Mode Analytics REST API client.
//!
//! This crate provides a typed client for the Mode REST API. Responses are
//! HAL+JSON; collections are fetched page by page until the server's
//! pagination descriptor says there is nothing left. Entities come back as
//! resource objects ([`Space`], [`Report`], [`Query`], ...) that borrow the
//! client's [`Transport`](transport::Transport) and expose the operations
//! scoped to them. Mutations report a [`MutationOutcome`] and never change
//! local state unless the server confirmed the write.
//!
//! ```rust,no_run
//! use mode_client::{ModeClient, MutationOutcome, SpaceFilter};
//!
//! # async fn run() -> mode_client::Result<()> {
//! let client = ModeClient::builder()
//!     .organization("acme")
//!     .token("api-token")
//!     .password("api-password")
//!     .build()?;
//!
//! for space in client.list_spaces(SpaceFilter::Custom).await? {
//!     for mut report in space.reports().await? {
//!         if report.name() == Some("Old dashboard") {
//!             match report.archive().await? {
//!                 MutationOutcome::Applied => println!("archived {}", report.token()),
//!                 MutationOutcome::Skipped => println!("{} was already archived", report.token()),
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
pub mod resources;
mod serde_helpers;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::ModeClient;
pub use client::builder::ModeClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    ChartData, CreateDefinitionParams, CreateInviteParams, CreateQueryParams, CreateSpaceParams,
    DataSourceData, DefinitionData, DefinitionUpdate, Invitee, MemberType, MembershipData,
    MutationOutcome, QueryData, QueryRunData, QueryUpdate, ReportData, ReportRunData,
    ReportUpdate, ResultFormat, RunState, SpaceData, SpaceFilter, SpaceUpdate, UserData,
};
pub use resources::{
    Chart, DataSource, Definition, Membership, Query, QueryRun, Report, ReportRun, Space, User,
};
