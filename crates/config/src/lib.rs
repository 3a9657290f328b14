//! Configuration management for the Mode Analytics client.
//!
//! This crate provides types and loaders for building Mode connection
//! settings from `.env` files, environment variables and JSON profile files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, ProfileConfig, ProfileFile};
