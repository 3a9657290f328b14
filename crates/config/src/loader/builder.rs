//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Keep explicit, environment and profile values in separate layers.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Environment variable parsing (delegated to env.rs).
//! - Profile file reading (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Layers merge as explicit > environment > profile > defaults, regardless of call order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use super::env::apply_env;
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// One source of configuration values.
#[derive(Debug, Default)]
pub(crate) struct Layer {
    pub(crate) base_url: Option<String>,
    pub(crate) organization: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) password: Option<SecretString>,
    pub(crate) timeout: Option<Duration>,
}

impl Layer {
    /// Fill every unset field from `lower`.
    fn or(self, lower: Layer) -> Layer {
        Layer {
            base_url: self.base_url.or(lower.base_url),
            organization: self.organization.or(lower.organization),
            token: self.token.or(lower.token),
            password: self.password.or(lower.password),
            timeout: self.timeout.or(lower.timeout),
        }
    }

    fn has_credentials(&self) -> bool {
        self.organization.is_some() && self.token.is_some() && self.password.is_some()
    }
}

/// Configuration loader that builds config from explicit values, environment variables and profiles.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    explicit: Layer,
    env: Layer,
    profile: Layer,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `true` or `1`. A missing
    /// `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the profile to read from the profile file.
    pub fn with_profile_name(mut self, name: impl Into<String>) -> Self {
        self.profile_name = Some(name.into());
        self
    }

    /// Override the profile file path.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read the selected profile from the profile file.
    ///
    /// The profile name comes from [`with_profile_name`](Self::with_profile_name)
    /// or `MODE_PROFILE`; without one this is a no-op. A missing profile is
    /// reported by [`build`](Self::build) unless credentials are complete
    /// from other sources.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from `MODE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API root URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.explicit.base_url = Some(url.into());
        self
    }

    /// Set the organization username.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.explicit.organization = Some(organization.into());
        self
    }

    /// Set the API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.explicit.token = Some(token.into());
        self
    }

    /// Set the API password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.explicit.password = Some(SecretString::from(password.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.explicit.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let merged = self.explicit.or(self.env).or(self.profile);

        if let Some(profile_name) = self.profile_missing
            && !merged.has_credentials()
        {
            return Err(ConfigError::ProfileNotFound(profile_name));
        }

        let base_url = validate_and_normalize_base_url(
            merged.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let organization = merged
            .organization
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .ok_or(ConfigError::MissingOrganization)?;
        let token = merged
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let password = merged.password.ok_or(ConfigError::MissingPassword)?;

        let timeout = merged
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                organization,
                timeout,
            },
            auth: AuthConfig { token, password },
        })
    }

    pub(crate) fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_profile_name(&mut self, name: Option<String>) {
        self.profile_name = name;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_profile_missing(&mut self, name: Option<String>) {
        self.profile_missing = name;
    }

    pub(crate) fn env_layer_mut(&mut self) -> &mut Layer {
        &mut self.env
    }

    pub(crate) fn profile_layer_mut(&mut self) -> &mut Layer {
        &mut self.profile
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// The URL must be absolute, use http or https, and have a host. A trailing
/// slash is stripped.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://app.mode.com/api): {e}"
        ),
    })?;

    match parsed.scheme() {
        "https" => {}
        "http" => warn!(
            base_url = %trimmed,
            "Base URL uses plain http; credentials will be sent unencrypted"
        ),
        scheme => {
            return Err(ConfigError::InvalidValue {
                var: "base_url".into(),
                message: format!("scheme must be http or https, got: {scheme}"),
            });
        }
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://app.mode.com/api)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
