//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profile file path and profile name.
//! - Read the JSON profile file and fill the loader's profile layer.
//!
//! Does NOT handle:
//! - Environment variable credentials (see env.rs).
//! - Writing profile files.
//!
//! Invariants:
//! - Without a profile name nothing is read.
//! - A missing file or profile is recorded for `build()`, not reported here.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use super::builder::ConfigLoader;
use super::env::{CONFIG_PATH_VAR, PROFILE_VAR, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::{ProfileConfig, ProfileFile};

/// Returns the default profile file location.
///
/// - Linux: `~/.config/mode-client/config.json`
/// - macOS: `~/Library/Application Support/mode-client/config.json`
/// - Windows: `%AppData%\mode-client\config\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_NAME)
        .ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Apply the selected profile to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader
        .profile_name()
        .cloned()
        .or_else(|| env_var_or_none(PROFILE_VAR))
    {
        Some(name) => name,
        None => return Ok(()),
    };

    let config_path = match loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none(CONFIG_PATH_VAR).map(PathBuf::from))
    {
        Some(path) => path,
        None => default_config_path()?,
    };

    if !config_path.exists() {
        debug!(path = %config_path.display(), "Profile file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let contents =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ConfigFileRead {
            path: config_path.clone(),
            source,
        })?;
    let file: ProfileFile =
        serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
            path: config_path.clone(),
            source,
        })?;

    match file.profiles.get(&profile_name) {
        Some(profile) => {
            debug!(profile = %profile_name, path = %config_path.display(), "Loaded profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }
    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    let layer = loader.profile_layer_mut();
    if let Some(url) = &profile.base_url {
        layer.base_url = Some(url.clone());
    }
    if let Some(organization) = &profile.organization {
        layer.organization = Some(organization.clone());
    }
    if let Some(token) = &profile.api_token {
        layer.token = Some(token.clone());
    }
    if let Some(password) = &profile.api_password {
        layer.password = Some(SecretString::from(password.clone()));
    }
    if let Some(secs) = profile.timeout_seconds {
        layer.timeout = Some(Duration::from_secs(secs));
    }
}
