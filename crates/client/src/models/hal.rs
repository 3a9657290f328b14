//! HAL envelope types shared by every Mode response.
//!
//! Mode wraps collections as `{"_embedded": {"<plural>": [...]}, "pagination": {...}}`
//! and attaches `_links` to every record. This module does NOT contain
//! resource-specific models.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ClientError, Result};

/// One HAL link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: Option<String>,
    #[serde(default)]
    pub templated: bool,
}

/// A `_links` value: a single link, a list of links, or something we do not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    One(Link),
    Many(Vec<Link>),
    Other(serde_json::Value),
}

/// The `_links` object of a HAL record, keyed by relation name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, LinkEntry>);

impl Links {
    /// First `href` for a relation.
    pub fn href(&self, rel: &str) -> Option<&str> {
        match self.0.get(rel)? {
            LinkEntry::One(link) => link.href.as_deref(),
            LinkEntry::Many(links) => links.iter().find_map(|l| l.href.as_deref()),
            LinkEntry::Other(_) => None,
        }
    }

    /// Last non-empty path segment of a relation's `href`, ignoring any query string.
    ///
    /// `/api/acme/memberships/0a1b2c?embed=user` yields `0a1b2c`.
    pub fn last_segment(&self, rel: &str) -> Option<&str> {
        let href = self.href(rel)?;
        let path = href.split(['?', '#']).next().unwrap_or(href);
        path.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
    }

    /// Relation names present on this record.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Server-provided pagination descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub page: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub total_pages: Option<u32>,
}

impl Pagination {
    /// Whether pages remain after `page` according to this descriptor.
    ///
    /// Only the page-count comparison is trusted; item counts are ignored.
    pub fn has_more_after(&self, page: u32) -> bool {
        self.total_pages.is_some_and(|total| page < total)
    }
}

/// One page of a HAL collection.
#[derive(Debug, Clone, Deserialize)]
pub struct HalPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: Links,
}

impl HalPage {
    /// Remove and decode the embedded collection stored under `key`.
    ///
    /// Fails with [`ClientError::MissingField`] when `_embedded` or the key is
    /// absent, and with [`ClientError::Decode`] when an item does not decode.
    pub fn take_items<T: DeserializeOwned>(&mut self, key: &str, url: &str) -> Result<Vec<T>> {
        let embedded = self
            .embedded
            .as_mut()
            .ok_or_else(|| ClientError::MissingField {
                field: "_embedded".to_string(),
                url: url.to_string(),
            })?;

        let raw = embedded
            .remove(key)
            .ok_or_else(|| ClientError::MissingField {
                field: format!("_embedded.{key}"),
                url: url.to_string(),
            })?;

        serde_json::from_value(raw).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
