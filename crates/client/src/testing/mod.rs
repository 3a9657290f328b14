//! Testing utilities for Mode client tests.
//!
//! This module provides helper functions for loading test fixtures and
//! building paginated HAL responses. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use mode_client::testing::{load_fixture, generators::HalPageBuilder};
//!
//! // Load a static fixture
//! let fixture = load_fixture("reports/get_report.json");
//!
//! // Build page 2 of 3 holding ten generated reports
//! let page = HalPageBuilder::new("reports")
//!     .with_items(generators::records("r", 10, 10))
//!     .with_pagination(2, 3)
//!     .build();
//! ```

pub mod generators;

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "spaces/list_spaces.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
