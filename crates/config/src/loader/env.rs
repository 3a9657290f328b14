//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `MODE_*` connection and credential variables.
//! - Fill the loader's environment layer.
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub(crate) const BASE_URL_VAR: &str = "MODE_BASE_URL";
pub(crate) const ORGANIZATION_VAR: &str = "MODE_ORGANIZATION";
pub(crate) const TOKEN_VAR: &str = "MODE_API_TOKEN";
pub(crate) const PASSWORD_VAR: &str = "MODE_API_PASSWORD";
pub(crate) const TIMEOUT_VAR: &str = "MODE_TIMEOUT";
pub(crate) const CONFIG_PATH_VAR: &str = "MODE_CONFIG_PATH";
pub(crate) const PROFILE_VAR: &str = "MODE_PROFILE";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let layer = loader.env_layer_mut();

    if let Some(url) = env_var_or_none(BASE_URL_VAR) {
        layer.base_url = Some(url);
    }
    if let Some(organization) = env_var_or_none(ORGANIZATION_VAR) {
        layer.organization = Some(organization);
    }
    if let Some(token) = env_var_or_none(TOKEN_VAR) {
        layer.token = Some(token);
    }
    if let Some(password) = env_var_or_none(PASSWORD_VAR) {
        layer.password = Some(SecretString::from(password));
    }
    if let Some(timeout) = env_var_or_none(TIMEOUT_VAR) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: TIMEOUT_VAR.to_string(),
            message: "must be a whole number of seconds".to_string(),
        })?;
        layer.timeout = Some(Duration::from_secs(secs));
    }

    // Only fill profile selection that was not set explicitly.
    if loader.config_path().is_none() {
        loader.set_config_path(env_var_or_none(CONFIG_PATH_VAR).map(Into::into));
    }
    if loader.profile_name().is_none() {
        loader.set_profile_name(env_var_or_none(PROFILE_VAR));
    }

    Ok(())
}
