//! Client configuration
//!
//! `ClientConfig` carries everything a `Client` needs: the credential, the
//! endpoint, the pacing delay, and transport settings. It is
//! built either programmatically through `ClientConfigBuilder` or from a
//! YAML/JSON file through `ConfigFile`.

use crate::error::{Error, Result};
use crate::http::RequestQuota;
use crate::types::{DEFAULT_BASE_URL, DEFAULT_PACING, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Client Config
// ============================================================================

/// Validated configuration for a client
#[derive(Clone)]
pub struct ClientConfig {
    /// Static API key sent with every request
    pub api_key: String,
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Delay before launching each page fetch after the first
    pub pacing: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Optional cap on request rate shared by all page fetches
    pub quota: Option<RequestQuota>,
}

impl ClientConfig {
    /// Create a config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load a config from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ConfigFile::load(path)?.into_builder()?.build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("pacing", &self.pacing)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("quota", &self.quota)
            .finish()
    }
}

/// Builder for `ClientConfig`
#[derive(Clone, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    pacing: Option<Duration>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    quota: Option<RequestQuota>,
}

impl ClientConfigBuilder {
    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the pacing delay
    #[must_use]
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Cap the request rate
    #[must_use]
    pub fn quota(mut self, quota: RequestQuota) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(ClientConfig {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            pacing: self.pacing.unwrap_or(DEFAULT_PACING),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("mopub-pm/{}", env!("CARGO_PKG_VERSION"))),
            quota: self.quota,
        })
    }
}

// ============================================================================
// Config File
// ============================================================================

/// On-disk configuration, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub pacing_ms: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl ConfigFile {
    /// Read a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Convert into a builder so callers can layer overrides on top
    pub fn into_builder(self) -> Result<ClientConfigBuilder> {
        let mut builder = ClientConfig::builder();
        if let Some(key) = self.api_key {
            builder = builder.api_key(key);
        }
        if let Some(url) = self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(ms) = self.pacing_ms {
            builder = builder.pacing(Duration::from_millis(ms));
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(rps) = self.requests_per_second {
            builder = builder.quota(RequestQuota::per_second(rps)?);
        }
        Ok(builder)
    }
}
