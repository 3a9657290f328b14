//! Single-request execution and response mapping.
//!
//! This module sends one prepared `reqwest::RequestBuilder` and turns the
//! outcome into either a 2xx [`Response`] or a [`ClientError`]:
//! - non-2xx status → [`ClientError::ApiError`] with Mode's `{id, message}` summary
//! - 2xx other than a write endpoint's completion status → [`ClientError::UnexpectedStatus`]
//! - undecodable body → [`ClientError::Decode`]
//!
//! Nothing is retried; every error reaches the caller.

use std::time::Instant;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ModeErrorBody;

/// Path segments after which the next segment is an opaque token.
const COLLECTIONS: &[&str] = &[
    "charts",
    "data_sources",
    "definitions",
    "invites",
    "memberships",
    "queries",
    "query_runs",
    "reports",
    "runs",
    "spaces",
];

/// Sends a request once and maps non-2xx responses to [`ClientError::ApiError`].
pub(crate) async fn send_request(
    builder: RequestBuilder,
    resource: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let endpoint = endpoint_label(resource);

    if let Some(m) = metrics {
        m.record_request(&endpoint, method);
    }

    let started = Instant::now();
    let result = builder.send().await;
    let elapsed = started.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            debug!(method, endpoint = %endpoint, error = %e, "Mode API request failed");
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(&endpoint, method, elapsed, None);
                m.record_client_error(&endpoint, method, &err);
            }
            return Err(err);
        }
    };

    let status = response.status();
    debug!(
        method,
        endpoint = %endpoint,
        status = status.as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Mode API request completed"
    );

    if let Some(m) = metrics {
        m.record_request_duration(&endpoint, method, elapsed, Some(status.as_u16()));
    }

    if status.is_success() {
        return Ok(response);
    }

    let err = api_error(response).await;
    if let Some(m) = metrics {
        m.record_client_error(&endpoint, method, &err);
    }
    Err(err)
}

/// Builds an [`ClientError::ApiError`] from a non-2xx response.
async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ModeErrorBody>(&body)
        .ok()
        .and_then(|b| b.summary())
        .unwrap_or(body);

    ClientError::ApiError {
        status,
        url,
        message,
    }
}

/// Require the exact status a write endpoint signals completion with.
pub(crate) fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    if response.status() == expected {
        Ok(response)
    } else {
        Err(ClientError::UnexpectedStatus {
            status: response.status().as_u16(),
            expected: expected.as_u16(),
            url: response.url().to_string(),
        })
    }
}

/// Decode a JSON body, reporting failures as [`ClientError::Decode`].
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode { url, source })
}

/// Metric/log label for a resource path with tokens replaced by `{token}`.
///
/// `reports/4f8e/runs/9a1c/clone` becomes `reports/{token}/runs/{token}/clone`.
pub(crate) fn endpoint_label(resource: &str) -> String {
    let mut previous: Option<&str> = None;
    let mut parts = Vec::new();
    for segment in resource.split('/').filter(|s| !s.is_empty()) {
        if previous.is_some_and(|p| COLLECTIONS.contains(&p)) {
            parts.push("{token}");
        } else {
            parts.push(segment);
        }
        previous = Some(segment);
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_label_replaces_tokens() {
        assert_eq!(
            endpoint_label("reports/4f8e/runs/9a1c/clone"),
            "reports/{token}/runs/{token}/clone"
        );
        assert_eq!(endpoint_label("spaces"), "spaces");
        assert_eq!(endpoint_label("spaces/s1/reports"), "spaces/{token}/reports");
    }

    #[test]
    fn test_endpoint_label_keeps_file_names() {
        assert_eq!(
            endpoint_label("reports/r1/runs/x/results/content.csv"),
            "reports/{token}/runs/{token}/results/content.csv"
        );
    }

    #[test]
    fn test_endpoint_label_for_user_lookup() {
        assert_eq!(endpoint_label("jane"), "jane");
    }
}
