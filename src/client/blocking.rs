//! Blocking wrapper around the async client
//!
//! Owns a Tokio runtime and drives the async client on it. Must not be used
//! from inside an async context; `block_on` panics there.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{AdUnit, Entity, LineItem};
use crate::types::RawRecord;
use tokio::runtime::{Builder, Runtime};

/// Synchronous client for the Publisher Management API
#[derive(Debug)]
pub struct Client {
    inner: super::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a client for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key)?)
    }

    /// Create a client for a custom endpoint
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder()
            .api_key(api_key)
            .base_url(base_url)
            .build()?;
        Self::with_config(config)
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread().enable_all().build()?;
        let inner = super::Client::with_config(config)?;
        Ok(Self { inner, runtime })
    }

    /// Every line item of the account
    pub fn get_all_line_items(&self) -> Result<Vec<LineItem>> {
        self.get_all()
    }

    /// Every ad unit of the account
    pub fn get_all_ad_units(&self) -> Result<Vec<AdUnit>> {
        self.get_all()
    }

    /// Every entity of type `T`
    pub fn get_all<T: Entity>(&self) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.get_all())
    }

    /// Every raw record of an arbitrary resource
    pub fn fetch_all_raw(&self, resource: &str, filter: Option<&str>) -> Result<Vec<RawRecord>> {
        self.runtime
            .block_on(self.inner.fetch_all_raw(resource, filter))
    }
}
