//! Unit tests for cross-format conversion
//!
//! Covers the round-trip property (JSON -> YAML -> JSON preserves structure
//! modulo indentation), the canonical two-space re-indent of JSON output,
//! and the documented failure modes for YAML-only features.

use assert_matches::assert_matches;
use jy::convert::reindent::reindent;
use jy::convert::{json_to_yaml, yaml_to_json};
use jy::{convert_str, JyError};
use pretty_assertions::assert_eq;

#[test]
fn test_json_object_to_yaml() {
    let yaml = convert_str("{\"a\":1,\"b\":[true,null]}").unwrap();

    // Structure, not byte layout: the emitted YAML must reparse to the
    // original value.
    let back: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, serde_json::json!({"a": 1, "b": [true, null]}));
}

#[test]
fn test_yaml_mapping_to_two_space_json() {
    let json = convert_str("a: 1\nb:\n  - 2\n  - 3\n").unwrap();
    assert_eq!(json, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
}

#[test]
fn test_round_trip_preserves_structure() {
    let documents = [
        serde_json::json!({"a": 1, "b": [true, null], "c": {"nested": "yes"}}),
        serde_json::json!([1, 2.5, "three", false, null]),
        serde_json::json!({"empty_obj": {}, "empty_arr": [], "s": ""}),
        serde_json::json!({"unicode": "héllo wörld", "escape": "line\nbreak"}),
    ];

    for original in documents {
        let yaml = json_to_yaml(&original).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let json_text = yaml_to_json(&parsed).unwrap();
        let round_tripped: serde_json::Value = serde_json::from_str(&json_text).unwrap();
        assert_eq!(round_tripped, original, "round trip broke for {}", original);
    }
}

#[test]
fn test_reindent_is_canonical() {
    // Whatever the producing library emitted, the output is two-space.
    let variants = [
        "{\"a\":{\"b\":{\"c\":1}}}",
        "{\n    \"a\": {\n        \"b\": {\n            \"c\": 1\n        }\n    }\n}",
        "{ \"a\" : { \"b\" : { \"c\" : 1 } } }",
    ];
    let expected = "{\n  \"a\": {\n    \"b\": {\n      \"c\": 1\n    }\n  }\n}";
    for input in variants {
        assert_eq!(reindent(input).unwrap(), expected);
    }
}

#[test]
fn test_numbers_survive_conversion() {
    let json = convert_str("int: 7\nneg: -3\nbig: 9007199254740993\nfloat: 1.25\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["int"], serde_json::json!(7));
    assert_eq!(value["neg"], serde_json::json!(-3));
    assert_eq!(value["big"], serde_json::json!(9007199254740993i64));
    assert_eq!(value["float"], serde_json::json!(1.25));
}

#[test]
fn test_non_string_yaml_keys_fail_conversion() {
    let err = convert_str("1: one\ntrue: yes\n").unwrap_err();
    assert_matches!(err, JyError::ConversionFailure { .. });
}

#[test]
fn test_nan_fails_conversion() {
    let err = convert_str("x: .nan\n").unwrap_err();
    assert_matches!(err, JyError::ConversionFailure { .. });
}

#[test]
fn test_yaml_alias_resolves_before_conversion() {
    let json = convert_str("base: &b\n  x: 1\nother: *b\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["base"], value["other"]);
}

#[test]
fn test_quoted_yaml_strings_stay_strings() {
    let json = convert_str("version: '1.20'\nport: \"8080\"\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], serde_json::json!("1.20"));
    assert_eq!(value["port"], serde_json::json!("8080"));
}
