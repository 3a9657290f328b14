//! Authenticated HTTP transport for the Mode REST API.
//!
//! # What this module handles:
//! - Building organization-scoped URLs (`<api>/<organization>/<resource>`)
//! - Attaching HTTP Basic credentials to every request
//! - Mapping non-2xx responses to [`ClientError::ApiError`](crate::ClientError::ApiError)
//! - Walking paginated HAL collections ([`pagination`])
//!
//! # What this module does NOT handle:
//! - Resource semantics (see [`crate::resources`])
//! - Client construction (see [`crate::client::builder`])
//!
//! # Invariants
//! - One call issues exactly one HTTP request; nothing is retried
//! - `Transport` is immutable after construction, so resource objects may share it by reference

pub mod pagination;
pub(crate) mod request;
pub mod url_encoding;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::metrics::MetricsCollector;

pub use url_encoding::encode_path_segment;

/// Query parameters for a request, in order.
pub type QueryParams<'q> = [(&'q str, String)];

/// One authenticated connection to a Mode organization.
///
/// Resource objects hold a `&Transport`; they never own it.
#[derive(Debug)]
pub struct Transport {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) org_url: String,
    pub(crate) organization: String,
    pub(crate) token: String,
    pub(crate) password: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl Transport {
    /// Organization the transport is scoped to.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// API root, e.g. `https://app.mode.com/api`.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Organization-scoped base URL, e.g. `https://app.mode.com/api/acme`.
    pub fn org_url(&self) -> &str {
        &self.org_url
    }

    /// Full URL for an organization-scoped resource path.
    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.org_url, resource.trim_start_matches('/'))
    }

    fn request(
        &self,
        method: Method,
        url: &str,
        query: &QueryParams<'_>,
        body: Option<&serde_json::Value>,
    ) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .basic_auth(&self.token, Some(self.password.expose_secret()));

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder
    }

    /// Issue one request against an organization-scoped resource.
    pub(crate) async fn send(
        &self,
        method: Method,
        resource: &str,
        query: &QueryParams<'_>,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = self.url_for(resource);
        let label = method.as_str().to_string();
        let builder = self.request(method, &url, query, body);
        request::send_request(builder, resource, &label, self.metrics.as_ref()).await
    }

    /// Issue one write request and require `expected` as the success status.
    pub(crate) async fn send_expecting(
        &self,
        method: Method,
        resource: &str,
        body: Option<&serde_json::Value>,
        expected: StatusCode,
    ) -> Result<Response> {
        let response = self.send(method, resource, &[], body).await?;
        request::expect_status(response, expected)
    }

    /// GET an organization-scoped resource and decode its JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &QueryParams<'_>,
    ) -> Result<T> {
        let response = self.send(Method::GET, resource, query, None).await?;
        request::decode_json(response).await
    }

    /// Send a JSON body and decode the JSON answer.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        resource: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let response = self.send(method, resource, &[], Some(body)).await?;
        request::decode_json(response).await
    }

    /// GET a path relative to the API root rather than the organization.
    pub(crate) async fn get_root_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        let builder = self.request(Method::GET, &url, &[], None);
        let response =
            request::send_request(builder, path, Method::GET.as_str(), self.metrics.as_ref())
                .await?;
        request::decode_json(response).await
    }

    /// GET a resource and return its body as text (CSV / JSON result files).
    pub(crate) async fn get_text(&self, resource: &str) -> Result<String> {
        let response = self.send(Method::GET, resource, &[], None).await?;
        Ok(response.text().await?)
    }

    /// GET a resource and return its raw body (PDF exports).
    pub(crate) async fn get_bytes(&self, resource: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, resource, &[], None).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
