//! JSON wire behaviour through serde derive.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use tristate_core::{Optional, OptionalCollection};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Sample {
    #[serde(default, skip_serializing_if = "Optional::is_undefined")]
    integer: Optional<i32>,
    #[serde(default, skip_serializing_if = "Optional::is_undefined")]
    string: Optional<String>,
    #[serde(default, skip_serializing_if = "OptionalCollection::is_undefined")]
    tags: OptionalCollection<String>,
}

#[test]
fn empty_object_is_all_undefined() {
    let sample: Sample = serde_json::from_str("{}").unwrap();
    assert_eq!(sample, Sample::default());
    assert!(sample.integer.is_undefined());
    assert!(sample.string.is_undefined());
    assert!(sample.tags.is_undefined());
}

#[test]
fn explicit_nulls_are_null() {
    let sample: Sample =
        serde_json::from_str(r#"{"integer":null,"string":null,"tags":null}"#).unwrap();
    assert!(sample.integer.is_null());
    assert!(sample.string.is_null());
    assert!(sample.tags.is_null());
}

#[test]
fn values_are_read() {
    let sample: Sample =
        serde_json::from_str(r#"{"integer":23,"string":"test","tags":[]}"#).unwrap();
    assert_eq!(sample.integer, Optional::new(23));
    assert_eq!(sample.string, Optional::new("test".to_owned()));
    assert_eq!(sample.tags, OptionalCollection::new(vec![]));
}

#[test]
fn undefined_fields_are_omitted() {
    assert_snapshot!(serde_json::to_string(&Sample::default()).unwrap(), @"{}");
}

#[test]
fn null_fields_are_written() {
    let sample = Sample {
        integer: Optional::NULL,
        string: Optional::UNDEFINED,
        tags: OptionalCollection::NULL,
    };
    assert_snapshot!(serde_json::to_string(&sample).unwrap(), @r#"{"integer":null,"tags":null}"#);
}

#[test]
fn values_are_written() {
    let sample = Sample {
        integer: Optional::new(23),
        string: Optional::new("test".to_owned()),
        tags: vec!["a".to_owned(), "b".to_owned()].into(),
    };
    assert_snapshot!(
        serde_json::to_string(&sample).unwrap(),
        @r#"{"integer":23,"string":"test","tags":["a","b"]}"#
    );
}

#[test]
fn collection_field_requires_array() {
    let err = serde_json::from_str::<Sample>(r#"{"tags":"a"}"#).unwrap_err();
    assert!(err.is_data());
}

#[test]
fn round_trip_preserves_state() {
    let original = Sample {
        integer: Optional::NULL,
        string: Optional::new(String::new()),
        tags: OptionalCollection::UNDEFINED,
    };
    let json = serde_json::to_string(&original).unwrap();
    let decoded: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}
