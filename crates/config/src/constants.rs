//! Centralized constants for the Mode client workspace.
//!
//! Default values shared by the config loader and the client builder.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default API root. Organization paths are appended below it.
pub const DEFAULT_BASE_URL: &str = "https://app.mode.com/api";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum number of redirects followed by the HTTP client.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Profile File
// =============================================================================

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "mode-client";

/// File name of the profile file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";
