//! Line item schema

use super::Entity;
use crate::types::LINE_ITEMS_RESOURCE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line item: one bid/targeting configuration inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub key: String,
    pub name: String,

    #[serde(default, deserialize_with = "super::nullable")]
    pub order_key: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub order_name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub advertiser: String,
    #[serde(default, deserialize_with = "super::nullable", rename = "type")]
    pub line_item_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub priority: i64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub ad_unit_keys: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub keywords: Vec<String>,

    // Pricing and budget
    #[serde(default, deserialize_with = "super::nullable")]
    pub bid: f64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub auto_cpm: f64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub disallow_auto_cpm: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub allocation_percentage: f64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub budget: f64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub budget_strategy: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub budget_type: String,

    // Flight and delivery
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub refresh_interval: i64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub day_parts: Vec<DayPart>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub day_part_targeting: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub frequency_caps: Vec<FrequencyCap>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub frequency_caps_enabled: bool,

    // Device targeting
    #[serde(default, deserialize_with = "super::nullable")]
    pub device_targeting: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub target_android: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub target_ios: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub target_iphone: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub target_ipad: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub target_ipod: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub min_android_version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub max_android_version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub min_ios_version: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub max_ios_version: String,

    // Geo, connectivity and app targeting
    #[serde(default, deserialize_with = "super::nullable")]
    pub include_geo_targeting: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub targeted_countries: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub targeted_regions: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub targeted_cities: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub targeted_zip_codes: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub include_connectivity_targeting: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub targeted_carriers: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub user_apps_targeting: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub user_apps_targeting_list: Vec<String>,

    // Network overrides
    #[serde(default, deserialize_with = "super::nullable")]
    pub enable_overrides: bool,
    #[serde(default, deserialize_with = "super::nullable")]
    pub override_fields: OverrideFields,
}

impl Entity for LineItem {
    const RESOURCE: &'static str = LINE_ITEMS_RESOURCE;
}

/// A weekly time window during which the line item serves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPart {
    #[serde(default, deserialize_with = "super::nullable")]
    pub days: Vec<String>,
    /// Minutes from midnight
    #[serde(default, deserialize_with = "super::nullable")]
    pub start_time: i64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub end_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyCap {
    #[serde(default, deserialize_with = "super::nullable")]
    pub cap: i64,
    /// Unit of the window, e.g. "hour" or "day"
    #[serde(default, deserialize_with = "super::nullable")]
    pub duration: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub num_duration: i64,
}

/// Third-party network identifiers; the service uses snake_case here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideFields {
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_app_id: String,
    #[serde(default, deserialize_with = "super::nullable", rename = "network_adunit_id")]
    pub network_ad_unit_id: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub network_account_id: String,
}
