//! Data models for Mode API responses.
//!
//! Each resource has a plain `serde` record (`*Data`) holding one field per
//! documented attribute. Absent or `null` fields decode to `None`; only the
//! identity token is required. Records are wrapped by the resource objects in
//! [`crate::resources`], which add the operations.

pub mod common;
pub mod data_sources;
pub mod definitions;
pub mod hal;
pub mod memberships;
pub mod queries;
pub mod reports;
pub mod runs;
pub mod spaces;

pub use common::{MemberType, ModeErrorBody, MutationOutcome, ResultFormat, RunState, SpaceFilter};
pub use data_sources::DataSourceData;
pub use definitions::{CreateDefinitionParams, DefinitionData, DefinitionUpdate};
pub use hal::{HalPage, Link, LinkEntry, Links, Pagination};
pub use memberships::{CreateInviteParams, Invitee, MembershipData, UserData};
pub use queries::{ChartData, CreateQueryParams, QueryData, QueryUpdate};
pub use reports::{ReportData, ReportUpdate};
pub use runs::{QueryRunData, ReportRunData};
pub use spaces::{CreateSpaceParams, SpaceData, SpaceUpdate};
