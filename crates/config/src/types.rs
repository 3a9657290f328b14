//! Configuration types for the Mode client.
//!
//! Responsibilities:
//! - Define the resolved `Config` (connection and credentials).
//! - Define the on-disk JSON profile file shape.
//!
//! Does NOT handle:
//! - Loading from files or the environment (see `loader` module).
//! - Building HTTP clients (see the client crate).
//!
//! Invariants:
//! - The API password is only ever held as a `SecretString`.
//! - Profile `Debug` output never includes the password.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Connection settings for a Mode workspace.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// API root, e.g. `https://app.mode.com/api`.
    pub base_url: String,
    /// Organization (workspace) username.
    pub organization: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// API credentials sent as HTTP Basic auth.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// API token, used as the Basic auth username.
    pub token: String,
    /// API password, used as the Basic auth password.
    pub password: SecretString,
}

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(
        organization: impl Into<String>,
        token: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                organization: organization.into(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                token: token.into(),
                password,
            },
        }
    }
}

/// One named profile in the profile file. Every field is optional.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_url: Option<String>,
    pub organization: Option<String>,
    pub api_token: Option<String>,
    pub api_password: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl fmt::Debug for ProfileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileConfig")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("api_token", &self.api_token)
            .field(
                "api_password",
                &self.api_password.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// The JSON profile file: `{"profiles": {"<name>": {...}}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_new_uses_defaults() {
        let config = Config::new("acme", "tok", SecretString::from("pw".to_string()));

        assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.connection.organization, "acme");
        assert_eq!(
            config.connection.timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(config.auth.token, "tok");
        assert_eq!(config.auth.password.expose_secret(), "pw");
    }

    #[test]
    fn test_config_debug_hides_password() {
        let config = Config::new("acme", "tok", SecretString::from("hunter2".to_string()));
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn test_profile_file_parses_partial_profiles() {
        let file: ProfileFile = serde_json::from_str(
            r#"{
                "profiles": {
                    "work": { "organization": "acme", "api_password": "hunter2" },
                    "empty": {}
                }
            }"#,
        )
        .unwrap();

        let work = &file.profiles["work"];
        assert_eq!(work.organization.as_deref(), Some("acme"));
        assert!(work.base_url.is_none());
        assert!(!format!("{work:?}").contains("hunter2"));
        assert!(file.profiles["empty"].timeout_seconds.is_none());
    }
}
