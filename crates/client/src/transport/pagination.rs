//! Descriptor-driven walk over paginated HAL collections.
//!
//! Every request carries `page=N`. The walk continues while the server's
//! `pagination.total_pages` is greater than the client's own page counter;
//! a response without a descriptor ends the walk after that single page.
//! Item counts never decide completion.

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{QueryParams, Transport, request};
use crate::error::Result;
use crate::models::HalPage;

/// First page number Mode accepts.
pub const FIRST_PAGE: u32 = 1;

/// Fetch every page of `resource` and concatenate the items under `_embedded.<key>`.
///
/// `params` are sent on every page request alongside `page`.
pub async fn fetch_all<T: DeserializeOwned>(
    transport: &Transport,
    resource: &str,
    key: &str,
    params: &QueryParams<'_>,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut page = FIRST_PAGE;

    loop {
        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("page", page.to_string()));

        let response = transport
            .send(Method::GET, resource, &query, None)
            .await?;
        let url = response.url().to_string();
        let mut hal: HalPage = request::decode_json(response).await?;
        let batch: Vec<T> = hal.take_items(key, &url)?;

        debug!(
            resource,
            page,
            total_pages = ?hal.pagination.and_then(|p| p.total_pages),
            items = batch.len(),
            "Fetched collection page"
        );
        if let Some(m) = transport.metrics.as_ref() {
            m.record_page(&request::endpoint_label(resource));
        }

        items.extend(batch);

        match hal.pagination {
            Some(p) if p.has_more_after(page) => page += 1,
            _ => break,
        }
    }

    Ok(items)
}
