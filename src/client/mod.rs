//! Publisher Management API client
//!
//! `Client` ties the transport, the collection fetcher and the entity
//! decoder together. `Manager` is the narrow interface most callers need;
//! `blocking::Client` offers the same operations to synchronous code.

pub mod blocking;

use crate::config::ClientConfig;
use crate::decode::decode_all;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{AdUnit, Entity, LineItem};
use crate::pagination::{CollectionFetcher, PageFetcher};
use crate::types::RawRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Read access to the Publisher Management API
#[async_trait]
pub trait Manager: Send + Sync {
    /// Every line item of the account
    async fn get_all_line_items(&self) -> Result<Vec<LineItem>>;

    /// Every ad unit of the account
    async fn get_all_ad_units(&self) -> Result<Vec<AdUnit>>;
}

/// Async client for the Publisher Management API
#[derive(Debug, Clone)]
pub struct Client {
    fetcher: CollectionFetcher<PageFetcher>,
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
        let http = HttpClient::new(&config)?;
        let fetcher = CollectionFetcher::with_pacing(Arc::new(PageFetcher::new(http)), config.pacing);
        Ok(Self { fetcher })
    }

    /// Every entity of type `T`
    pub async fn get_all<T: Entity>(&self) -> Result<Vec<T>> {
        self.get_all_filtered(None).await
    }

    /// Every entity of type `T` matching a raw query-string filter
    pub async fn get_all_filtered<T: Entity>(&self, filter: Option<&str>) -> Result<Vec<T>> {
        let records = self.fetch_all_raw(T::RESOURCE, filter).await?;
        let entities: Vec<T> = decode_all(records)?;
        info!("{}: decoded {} entities", T::RESOURCE, entities.len());
        Ok(entities)
    }

    /// Every raw record of an arbitrary resource
    pub async fn fetch_all_raw(
        &self,
        resource: &str,
        filter: Option<&str>,
    ) -> Result<Vec<RawRecord>> {
        self.fetcher.fetch_all(resource, filter).await
    }
}

#[async_trait]
impl Manager for Client {
    async fn get_all_line_items(&self) -> Result<Vec<LineItem>> {
        self.get_all().await
    }

    async fn get_all_ad_units(&self) -> Result<Vec<AdUnit>> {
        self.get_all().await
    }
}
