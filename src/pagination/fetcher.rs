//! Page fetcher over the HTTP transport

use super::types::{PageEnvelope, PageSource};
use crate::error::Result;
use crate::http::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Fetches one page over HTTP and decodes its envelope
#[derive(Debug)]
pub struct PageFetcher {
    http: HttpClient,
}

impl PageFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetch page `page` of `resource` and decode it
    pub async fn fetch_page_envelope(
        &self,
        resource: &str,
        filter: Option<&str>,
        page: u32,
    ) -> Result<PageEnvelope> {
        let body = self.http.fetch_page(resource, filter, page).await?;
        let envelope = PageEnvelope::from_json(&body)?;
        debug!(
            "{} page {}: {} records",
            resource,
            page,
            envelope.records.len()
        );
        Ok(envelope)
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(
        &self,
        resource: &str,
        filter: Option<&str>,
        page: u32,
    ) -> Result<PageEnvelope> {
        self.fetch_page_envelope(resource, filter, page).await
    }
}
