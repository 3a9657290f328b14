//! Resource objects: one in-memory server entity plus the operations scoped to it.
//!
//! Every resource borrows the [`Transport`](crate::transport::Transport) it was
//! fetched with and never owns it. Mutations follow one protocol:
//! - requested state equal to the current state returns
//!   [`MutationOutcome::Skipped`](crate::MutationOutcome::Skipped) without a request
//! - otherwise exactly one write request is sent
//! - in-memory state changes only after the endpoint's success status
//!
//! A failed mutation leaves the object as it was.

mod chart;
mod data_source;
mod definition;
mod membership;
mod query;
mod query_run;
mod report;
mod report_run;
mod space;
mod user;

pub use chart::Chart;
pub use data_source::DataSource;
pub use definition::Definition;
pub use membership::Membership;
pub use query::Query;
pub use query_run::QueryRun;
pub use report::Report;
pub use report_run::ReportRun;
pub use space::Space;
pub use user::User;

use crate::transport::encode_path_segment;

/// Join already-known path parts, percent-encoding each token.
pub(crate) fn resource_path(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .map(|(collection, token)| format!("{collection}/{}", encode_path_segment(token)))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_joins_and_encodes() {
        assert_eq!(
            resource_path(&[("reports", "r1"), ("runs", "a b")]),
            "reports/r1/runs/a%20b"
        );
        assert_eq!(resource_path(&[("spaces", "s1")]), "spaces/s1");
    }
}
