//! Tests for decoder module

use super::*;
use crate::error::Error;
use crate::models::{AdUnit, LineItem};
use serde_json::json;

#[test]
fn test_decode_all_line_items() {
    let records = vec![
        json!({"key": "a", "name": "First"}),
        json!({"key": "b", "name": "Second", "priority": 12}),
    ];

    let items: Vec<LineItem> = decode_all(records).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].key, "a");
    assert_eq!(items[1].priority, 12);
}

#[test]
fn test_decode_all_accepts_null_optional_fields() {
    let records = vec![
        json!({"key": "a", "name": "n", "budget": null}),
        json!({"key": "b", "name": "n", "adUnitKeys": null, "targetedCountries": ["US"]}),
    ];

    let items: Vec<LineItem> = decode_all(records).unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[1].ad_unit_keys.is_empty());

    let units: Vec<AdUnit> =
        decode_all(vec![json!({"key": "u", "name": "n", "rewardCallbackUrl": null})]).unwrap();
    assert_eq!(units[0].reward_callback_url, "");
}

#[test]
fn test_decode_all_empty() {
    let units: Vec<AdUnit> = decode_all(Vec::new()).unwrap();
    assert!(units.is_empty());
}

#[test]
fn test_decode_all_reports_failing_index() {
    let records = vec![
        json!({"key": "a", "name": "ok"}),
        json!({"key": "b", "name": "ok"}),
        json!({"name": "missing key"}),
        json!({"key": "d", "name": "never reached"}),
    ];

    let err = decode_all::<AdUnit>(records).unwrap_err();

    match err {
        Error::RecordDecode { index, message } => {
            assert_eq!(index, 2);
            assert!(message.contains("key"), "message: {message}");
        }
        other => panic!("expected RecordDecode, got {other:?}"),
    }
}

#[test]
fn test_decode_record_wrong_type() {
    let err = decode_record::<LineItem>(7, json!({"key": "a", "name": "n", "bid": "high"}))
        .unwrap_err();
    assert!(matches!(err, Error::RecordDecode { index: 7, .. }));
    assert!(err.is_decode());
}

#[test]
fn test_decode_record_not_an_object() {
    let err = decode_record::<AdUnit>(0, json!("just a string")).unwrap_err();
    assert!(matches!(err, Error::RecordDecode { index: 0, .. }));
}
