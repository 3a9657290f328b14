//! Test data generators for HAL collections.
//!
//! [`HalPageBuilder`] assembles one page of a collection the way Mode returns
//! it. [`records`] produces minimal records with predictable tokens so tests
//! can assert ordering across pages. The [`strategies`] submodule offers
//! `proptest` strategies for page layouts.

use serde_json::{Value, json};

/// Builds one page of a HAL collection.
#[derive(Debug, Clone)]
pub struct HalPageBuilder {
    key: String,
    items: Vec<Value>,
    pagination: Option<(u32, u32)>,
    self_href: Option<String>,
}

impl HalPageBuilder {
    /// Start a page whose items live under `_embedded.<key>`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
            pagination: None,
            self_href: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.items = items;
        self
    }

    /// Attach a `{page, total_pages}` descriptor.
    pub fn with_pagination(mut self, page: u32, total_pages: u32) -> Self {
        self.pagination = Some((page, total_pages));
        self
    }

    pub fn with_self_href(mut self, href: impl Into<String>) -> Self {
        self.self_href = Some(href.into());
        self
    }

    pub fn build(self) -> Value {
        let mut embedded = serde_json::Map::new();
        embedded.insert(self.key, Value::Array(self.items));
        let mut page = json!({ "_embedded": embedded });
        if let Some((current, total)) = self.pagination {
            page["pagination"] = json!({ "page": current, "total_pages": total });
        }
        if let Some(href) = self.self_href {
            page["_links"] = json!({ "self": { "href": href } });
        }
        page
    }
}

/// `count` records with tokens `<prefix>-<start>`, `<prefix>-<start+1>`, ...
pub fn records(prefix: &str, start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| json!({ "token": format!("{prefix}-{i}"), "name": format!("{prefix} {i}") }))
        .collect()
}

/// Membership records identified only through their `self` link.
pub fn membership_records(start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| {
            json!({
                "member_username": format!("user{i}"),
                "admin": false,
                "_links": {
                    "self": { "href": format!("/api/acme/memberships/m-{i}") },
                    "user": { "href": format!("/api/user{i}") }
                }
            })
        })
        .collect()
}

/// `proptest` strategies for pagination scenarios.
pub mod strategies {
    use proptest::prelude::*;

    /// Per-page item counts for a collection of 1..=`max_pages` pages.
    ///
    /// Pages may be empty; completion must never be inferred from counts.
    pub fn page_sizes(max_pages: usize, max_items: usize) -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..=max_items, 1..=max_pages)
    }
}
