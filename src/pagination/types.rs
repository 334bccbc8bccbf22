//! Pagination types and traits
//!
//! Defines the page envelope returned by the service and the `PageSource`
//! abstraction the collection fetcher drives.

use crate::error::{Error, Result};
use crate::types::RawRecord;
use async_trait::async_trait;
use serde::Deserialize;

/// Pagination metadata attached to a page
///
/// `last_page` is the authoritative page count for the query. It is kept as
/// a signed integer so a misbehaving server can be detected instead of
/// silently wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of records matching the query
    #[serde(rename = "count", alias = "totalCount", default)]
    pub total_count: i64,
    /// 1-based number of this page
    #[serde(default)]
    pub current_page: i64,
    /// Page size used by the server
    #[serde(default)]
    pub per_page: i64,
    /// Previous page number, if any
    #[serde(rename = "prevPage", alias = "previousPage", default)]
    pub previous_page: Option<i64>,
    /// Next page number, if any
    #[serde(default)]
    pub next_page: Option<i64>,
    /// Final valid page number
    pub last_page: i64,
}

impl PageInfo {
    /// Number of pages to fetch, validated as a usable loop bound
    pub fn page_count(&self) -> Result<u32> {
        if self.last_page < 0 {
            return Err(Error::invalid_pagination(format!(
                "lastPage must not be negative, got {}",
                self.last_page
            )));
        }
        u32::try_from(self.last_page).map_err(|_| {
            Error::invalid_pagination(format!("lastPage {} is out of range", self.last_page))
        })
    }
}

/// One decoded page: its raw records and pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageEnvelope {
    /// Undecoded records on this page
    #[serde(rename = "data")]
    pub records: Vec<RawRecord>,
    /// Pagination metadata; only required on the first page
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}

impl PageEnvelope {
    /// Parse a response body into an envelope
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("invalid page envelope: {e}")))
    }

    /// Pagination metadata, failing when the server omitted it
    pub fn page_info(&self) -> Result<&PageInfo> {
        self.pagination
            .as_ref()
            .ok_or_else(|| Error::decode("page envelope is missing pagination metadata"))
    }
}

/// A source of pages for a resource
///
/// Implemented over HTTP by `PageFetcher`; the collection fetcher only
/// depends on this trait.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode one 1-based page of `resource`
    async fn fetch_page(&self, resource: &str, filter: Option<&str>, page: u32)
        -> Result<PageEnvelope>;
}
