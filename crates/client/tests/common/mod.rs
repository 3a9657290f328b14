//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Mode client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//! - Clients built here point at `<mock server>/api` with organization `acme`
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from mode-client
#[allow(unused_imports)]
pub use mode_client::testing::generators::{HalPageBuilder, membership_records, records};
#[allow(unused_imports)]
pub use mode_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use mode_client::{ClientError, ModeClient, MutationOutcome};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ORG: &str = "acme";
pub const TOKEN: &str = "test-token";
pub const PASSWORD: &str = "test-password";

/// Organization-scoped path on the mock server, e.g. `org_path("reports/r1")`.
#[allow(dead_code)]
pub fn org_path(resource: &str) -> String {
    format!("/api/{ORG}/{resource}")
}

/// Client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ModeClient {
    ModeClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .organization(ORG)
        .token(TOKEN)
        .password(PASSWORD)
        .build()
        .expect("client should build")
}
