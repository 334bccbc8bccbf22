//! HTTP transport for the Publisher Management API
//!
//! Issues one authenticated GET per page and hands back the raw body.
//! Non-success statuses are turned into `Error::Api` here, so nothing above
//! this layer ever sees an error body as data.

use super::throttle::Throttle;
use crate::config::ClientConfig;
use crate::error::{ApiMessage, Error, Result};
use crate::types::{API_KEY_HEADER, PAGE_SIZE};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Error envelope returned by the service on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "statusCode", default)]
    status_code: Option<u16>,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

/// Authenticated page transport
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    throttle: Option<Throttle>,
}

impl HttpClient {
    /// Create a transport from a validated client config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            throttle: config.quota.map(Throttle::new),
        })
    }

    /// Whether requests are held to a `RequestQuota`
    pub fn is_throttled(&self) -> bool {
        self.throttle.is_some()
    }

    /// Fetch one page of `resource` and return the raw response body
    ///
    /// `filter` is a raw query string appended verbatim before the paging
    /// parameters.
    pub async fn fetch_page(&self, resource: &str, filter: Option<&str>, page: u32) -> Result<String> {
        if let Some(ref throttle) = self.throttle {
            throttle.acquire().await;
        }

        let url = self.build_url(resource, filter);
        debug!("GET {} page={} limit={}", url, page, PAGE_SIZE);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page.to_string()), ("limit", PAGE_SIZE.to_string())])
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} page {} failed with status {}", resource, page, status.as_u16());
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(body)
    }

    /// Build the request URL for a resource, without paging parameters
    pub fn build_url(&self, resource: &str, filter: Option<&str>) -> String {
        let resource = resource.trim_matches('/');
        let filter = filter
            .map(|f| f.trim_start_matches(['?', '&']))
            .filter(|f| !f.is_empty());

        match filter {
            Some(filter) => format!("{}/{resource}?{filter}", self.base_url),
            None => format!("{}/{resource}", self.base_url),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("throttled", &self.throttle.is_some())
            .finish_non_exhaustive()
    }
}

/// Turn a non-success response into an API error
///
/// Bodies that do not match the error envelope keep the HTTP status and carry
/// the raw text as a single "Unparsed" message.
pub(crate) fn api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => {
            Error::api(parsed.status_code.unwrap_or(status), parsed.errors)
        }
        _ => {
            let text = body.trim();
            let text = if text.is_empty() { "<empty body>" } else { text };
            Error::api(status, vec![ApiMessage::new("Unparsed", text)])
        }
    }
}
