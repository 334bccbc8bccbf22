//! Ad unit schema

use super::Entity;
use crate::types::AD_UNITS_RESOURCE;
use serde::{Deserialize, Serialize};

/// An ad unit: one placement inside a publisher app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUnit {
    pub key: String,
    pub name: String,

    #[serde(default, deserialize_with = "super::nullable")]
    pub app_key: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub app_name: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub app_type: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub active: bool,
    /// "banner", "native", "rewarded_video", ...
    #[serde(default, deserialize_with = "super::nullable")]
    pub format: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub daily_impression_cap: i64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub hourly_impression_cap: i64,

    // Banner
    #[serde(default, deserialize_with = "super::nullable")]
    pub refresh_interval: i64,

    // Native
    #[serde(default, deserialize_with = "super::nullable", rename = "native_placement")]
    pub native_placement: String,
    #[serde(default, deserialize_with = "super::nullable", rename = "native_positioning_data")]
    pub native_positioning: NativePositioning,

    // Rewarded
    #[serde(default, deserialize_with = "super::nullable")]
    pub reward_callback_url: String,
    #[serde(default, deserialize_with = "super::nullable")]
    pub rewards: Vec<Reward>,
}

impl Entity for AdUnit {
    const RESOURCE: &'static str = AD_UNITS_RESOURCE;
}

/// Where native ads are inserted in a feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativePositioning {
    #[serde(default, deserialize_with = "super::nullable")]
    pub fixed: Vec<FixedPosition>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub repeating: RepeatingPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPosition {
    #[serde(default, deserialize_with = "super::nullable")]
    pub position: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatingPosition {
    #[serde(default, deserialize_with = "super::nullable")]
    pub interval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(default, deserialize_with = "super::nullable")]
    pub amount: i64,
    #[serde(default, deserialize_with = "super::nullable")]
    pub currency_name: String,
}
