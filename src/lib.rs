//! # mopub-pm
//!
//! A read-only client for the MoPub Publisher Management API.
//!
//! The API lists line items and ad units as paged JSON collections. This
//! crate fetches every page of a collection, decodes the records into typed
//! entities, and either returns the complete collection or an error. It never
//! returns a partial one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mopub_pm::{Client, Manager, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-api-key")?;
//!
//!     let line_items = client.get_all_line_items().await?;
//!     let ad_units = client.get_all_ad_units().await?;
//!     println!("{} line items, {} ad units", line_items.len(), ad_units.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Client / Manager     get_all_line_items  get_all_ad_units│
//! └───────────────────────────────────────────────────────────┘
//!          │                                   ▲
//!          ▼                                   │ typed entities
//! ┌──────────────────────┐          ┌──────────────────────┐
//! │  CollectionFetcher   │─records─▶│  decode::decode_all  │
//! │  page 1, then 2..=N  │          └──────────────────────┘
//! │  paced + concurrent  │
//! └──────────────────────┘
//!          │
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  PageFetcher         │──▶│  HttpClient          │
//! │  envelope decoding   │   │  GET + x-api-key     │
//! └──────────────────────┘   └──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Page envelopes and the collection fetcher
pub mod pagination;

/// Raw record to entity decoding
pub mod decode;

/// Entity schemas
pub mod models;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, Manager};
pub use config::{ClientConfig, ConfigFile};
pub use error::{ApiMessage, Error, Result};
pub use models::{AdUnit, Entity, LineItem};
pub use types::RawRecord;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
