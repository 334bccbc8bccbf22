//! Pagination module
//!
//! # Overview
//!
//! The service returns collections in numbered pages of at most `limit`
//! records, each carrying a `pagination` block whose `lastPage` tells how
//! many pages exist. This module provides:
//! - `PageEnvelope` / `PageInfo` - one decoded page
//! - `PageSource` - anything that can produce a page
//! - `PageFetcher` - `PageSource` over the HTTP transport
//! - `CollectionFetcher` - fetches all pages of a resource concurrently

mod collector;
mod fetcher;
mod types;

pub use collector::CollectionFetcher;
pub use fetcher::PageFetcher;
pub use types::{PageEnvelope, PageInfo, PageSource};
