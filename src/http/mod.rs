//! HTTP transport module
//!
//! Provides the authenticated page transport used by the page fetcher.
//!
//! # Features
//!
//! - **Static credential**: every request carries the `x-api-key` header
//! - **Fixed page size**: `page` and `limit` are always sent
//! - **Structured errors**: non-2xx bodies become `Error::Api`
//! - **Optional request quota**: shared governor token bucket

mod client;
mod throttle;

pub use client::HttpClient;
pub use throttle::{RequestQuota, Throttle};
