//! Typed entity schemas
//!
//! Each entity knows the resource path it is listed under, so the client can
//! fetch and decode any of them through one generic operation.

mod ad_unit;
mod line_item;

pub use ad_unit::{AdUnit, FixedPosition, NativePositioning, RepeatingPosition, Reward};
pub use line_item::{DayPart, FrequencyCap, LineItem, OverrideFields};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A record type listed by the API
pub trait Entity: DeserializeOwned + Send + 'static {
    /// Resource path segment, e.g. "line-items"
    const RESOURCE: &'static str;
}

/// Decode an explicit `null` as the field's default
///
/// The service sends `null` for fields that do not apply to a record;
/// `#[serde(default)]` alone only covers absent fields.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_resources() {
        assert_eq!(LineItem::RESOURCE, "line-items");
        assert_eq!(AdUnit::RESOURCE, "adunits");
    }

    #[test]
    fn test_line_item_full_record() {
        let item: LineItem = serde_json::from_value(json!({
            "key": "li-1",
            "name": "Brand Q3",
            "orderKey": "o-1",
            "orderName": "Q3 orders",
            "type": "gtee",
            "priority": 6,
            "bid": 2.5,
            "adUnitKeys": ["au-1", "au-2"],
            "start": "2020-07-01T00:00:00Z",
            "end": null,
            "dayParts": [{"days": ["mon", "tue"], "startTime": 60, "endTime": 600}],
            "frequencyCaps": [{"cap": 3, "duration": "day", "numDuration": 1}],
            "targetedCountries": ["US"],
            "overrideFields": {
                "network_app_id": "app",
                "network_adunit_id": "unit",
                "network_account_id": "acct"
            }
        }))
        .unwrap();

        assert_eq!(item.key, "li-1");
        assert_eq!(item.line_item_type, "gtee");
        assert_eq!(item.priority, 6);
        assert!((item.bid - 2.5).abs() < f64::EPSILON);
        assert_eq!(item.ad_unit_keys, vec!["au-1", "au-2"]);
        assert_eq!(
            item.start,
            Some(Utc.with_ymd_and_hms(2020, 7, 1, 0, 0, 0).unwrap())
        );
        assert!(item.end.is_none());
        assert_eq!(item.day_parts[0].end_time, 600);
        assert_eq!(item.frequency_caps[0].num_duration, 1);
        assert_eq!(item.override_fields.network_ad_unit_id, "unit");
    }

    #[test]
    fn test_line_item_minimal_record_defaults() {
        let item: LineItem =
            serde_json::from_value(json!({"key": "li-2", "name": "Minimal"})).unwrap();
        assert!(item.ad_unit_keys.is_empty());
        assert_eq!(item.override_fields, OverrideFields::default());
        assert!(item.start.is_none());
    }

    #[test]
    fn test_line_item_requires_key() {
        let result: Result<LineItem, _> = serde_json::from_value(json!({"name": "No key"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_line_item_rejects_bad_timestamp() {
        let result: Result<LineItem, _> =
            serde_json::from_value(json!({"key": "k", "name": "n", "start": "yesterday"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_ad_unit_native_and_rewarded() {
        let unit: AdUnit = serde_json::from_value(json!({
            "key": "au-1",
            "name": "Feed",
            "appKey": "app-1",
            "format": "native",
            "active": true,
            "native_placement": "feed",
            "native_positioning_data": {
                "fixed": [{"position": 2}, {"position": 7}],
                "repeating": {"interval": 10}
            },
            "rewardCallbackUrl": "https://example.com/cb",
            "rewards": [{"amount": 5, "currencyName": "coins"}]
        }))
        .unwrap();

        assert!(unit.active);
        assert_eq!(unit.native_placement, "feed");
        assert_eq!(unit.native_positioning.fixed.len(), 2);
        assert_eq!(unit.native_positioning.repeating.interval, 10);
        assert_eq!(unit.reward_callback_url, "https://example.com/cb");
        assert_eq!(unit.rewards[0].currency_name, "coins");
    }

    #[test]
    fn test_line_item_null_fields_default() {
        let item: LineItem = serde_json::from_value(json!({
            "key": "li-3",
            "name": "Sparse",
            "advertiser": null,
            "priority": null,
            "budget": null,
            "disallowAutoCpm": null,
            "adUnitKeys": null,
            "dayParts": [{"days": null, "startTime": null, "endTime": 120}],
            "frequencyCaps": null,
            "start": null,
            "overrideFields": null
        }))
        .unwrap();

        assert_eq!(item.advertiser, "");
        assert_eq!(item.priority, 0);
        assert!(item.budget.abs() < f64::EPSILON);
        assert!(!item.disallow_auto_cpm);
        assert!(item.ad_unit_keys.is_empty());
        assert_eq!(
            item.day_parts,
            vec![DayPart {
                days: Vec::new(),
                start_time: 0,
                end_time: 120,
            }]
        );
        assert!(item.frequency_caps.is_empty());
        assert!(item.start.is_none());
        assert_eq!(item.override_fields, OverrideFields::default());
    }

    #[test]
    fn test_ad_unit_null_fields_default() {
        let unit: AdUnit = serde_json::from_value(json!({
            "key": "au-2",
            "name": "Banner",
            "active": null,
            "dailyImpressionCap": null,
            "native_placement": null,
            "native_positioning_data": {"fixed": null, "repeating": null},
            "rewardCallbackUrl": null,
            "rewards": [{"amount": null, "currencyName": "gems"}]
        }))
        .unwrap();

        assert!(!unit.active);
        assert_eq!(unit.daily_impression_cap, 0);
        assert_eq!(unit.native_placement, "");
        assert_eq!(unit.native_positioning, NativePositioning::default());
        assert_eq!(unit.reward_callback_url, "");
        assert_eq!(unit.rewards[0].amount, 0);
        assert_eq!(unit.rewards[0].currency_name, "gems");
    }

    #[test]
    fn test_null_key_or_name_rejected() {
        let result: Result<LineItem, _> =
            serde_json::from_value(json!({"key": null, "name": "n"}));
        assert!(result.is_err());

        let result: Result<AdUnit, _> = serde_json::from_value(json!({"key": "k", "name": null}));
        assert!(result.is_err());
    }

    #[test]
    fn test_ad_unit_requires_name() {
        let result: Result<AdUnit, _> = serde_json::from_value(json!({"key": "au-1"}));
        assert!(result.is_err());
    }
}
