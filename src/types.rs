//! Common types used throughout the client
//!
//! Shared type aliases and constants used across multiple modules.

use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One undecoded record as returned by the service
pub type RawRecord = JsonValue;

// ============================================================================
// Defaults
// ============================================================================

/// Production endpoint of the Publisher Management API
pub const DEFAULT_BASE_URL: &str = "https://api.mopub.com/v2";

/// Records requested per page, always sent as `limit`
pub const PAGE_SIZE: u32 = 500;

/// Delay inserted before launching each page fetch after the first
pub const DEFAULT_PACING: Duration = Duration::from_millis(300);

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

// ============================================================================
// Resources
// ============================================================================

/// Resource path for line items
pub const LINE_ITEMS_RESOURCE: &str = "line-items";

/// Resource path for ad units
pub const AD_UNITS_RESOURCE: &str = "adunits";
