//! Client builder for constructing [`ModeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (organization, API token and password)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (headers, timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ModeClient`] methods and [`crate::resources`])
//! - Loading settings from files or the environment (handled by `mode-config`)
//!
//! # Invariants
//! - `organization`, `token` and `password` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - Every request carries `Accept: application/hal+json`

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::client::ModeClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::transport::{Transport, encode_path_segment};
use mode_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

const HAL_JSON: &str = "application/hal+json";

/// Builder for creating a new [`ModeClient`].
///
/// Everything except the organization and the API credentials has a default.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use mode_client::ModeClient;
///
/// # fn main() -> mode_client::Result<()> {
/// let client = ModeClient::builder()
///     .organization("acme")
///     .token("api-token")
///     .password("api-password")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ModeClientBuilder {
    base_url: String,
    organization: Option<String>,
    token: Option<String>,
    password: Option<SecretString>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for ModeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            token: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl ModeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root, e.g. `https://app.mode.com/api`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the organization (workspace) name every resource path is scoped to.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Set the API token, sent as the Basic auth username.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the API password, sent as the Basic auth password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Set the API password from an existing secret.
    pub fn password_secret(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for request tracking.
    ///
    /// When set, the client records request latency, request counts and
    /// categorized errors through the `metrics` facade.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,no_run
    /// use mode_client::ModeClient;
    /// use mode_config::ConfigLoader;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = ModeClient::builder().from_config(&config).build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.organization = Some(config.connection.organization.clone());
        self.token = Some(config.auth.token.clone());
        self.password = Some(config.auth.password.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://app.mode.com/api/"` -> `"https://app.mode.com/api"`
    /// - `"https://app.mode.com/api//"` -> `"https://app.mode.com/api"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn user_agent() -> String {
        format!(
            "mode-client/{} ({}/{})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    /// Build the [`ModeClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse as
    /// http(s) or no organization was provided.
    /// Returns [`ClientError::AuthFailed`] if the token or password is missing or blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ModeClient> {
        let api_url = Self::normalize_base_url(&self.base_url);
        let parsed = Url::parse(&api_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{api_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{api_url}: scheme must be http or https"
            )));
        }

        let organization = self
            .organization
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("organization is required".to_string()))?;

        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClientError::AuthFailed("API token is required".to_string()))?;

        let password = self
            .password
            .filter(|p| !p.expose_secret().trim().is_empty())
            .ok_or_else(|| ClientError::AuthFailed("API password is required".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(HAL_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(Self::user_agent())
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let org_url = format!("{api_url}/{}", encode_path_segment(&organization));

        Ok(ModeClient {
            transport: Transport {
                http,
                api_url,
                org_url,
                organization,
                token,
                password,
                metrics: self.metrics,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ModeClientBuilder {
        ModeClient::builder()
            .organization("acme")
            .token("tok")
            .password("pw")
    }

    #[test]
    fn test_build_with_defaults() {
        let client = builder().build().unwrap();
        assert_eq!(client.organization(), "acme");
        assert_eq!(client.base_url(), "https://app.mode.com/api/acme");
        assert_eq!(client.transport().api_url(), "https://app.mode.com/api");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::new("acme", "tok", SecretString::from("pw".to_string()));
        config.connection.base_url = "https://mode.internal/api/".to_string();
        config.connection.timeout = Duration::from_secs(120);

        let builder = ModeClient::builder().from_config(&config);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.organization.as_deref(), Some("acme"));

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), "https://mode.internal/api/acme");
    }

    #[test]
    fn test_missing_organization_is_invalid_url() {
        let err = ModeClient::builder()
            .token("tok")
            .password("pw")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_blank_credentials_are_auth_errors() {
        let err = ModeClient::builder()
            .organization("acme")
            .token("  ")
            .password("pw")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));

        let err = ModeClient::builder()
            .organization("acme")
            .token("tok")
            .build()
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = builder().base_url("ftp://mode.example").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        assert_eq!(
            ModeClientBuilder::normalize_base_url("https://app.mode.com/api/"),
            "https://app.mode.com/api"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            ModeClientBuilder::normalize_base_url("https://app.mode.com/api//"),
            "https://app.mode.com/api"
        );
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(ModeClientBuilder::user_agent().starts_with("mode-client/"));
    }
}
