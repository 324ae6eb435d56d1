//! Integration tests for text-level field replacement.

use fieldquill::config::Config;
use fieldquill::document::parser::parse_json;
use fieldquill::nodes::{is_error_payload, replace_field, replace_field_with, try_replace_field};

/// Test that an empty path returns a document structurally equal to the input.
#[test]
fn test_empty_path_round_trip() {
    let inputs = [
        r#"{"name": "Harley", "age": 25, "power": 9.5}"#,
        r#"{"nested": {"deep": [1, [2, {"x": null}]]}, "flag": false}"#,
        r#"[1, "two", 3.0, {"four": [4]}]"#,
        r#""just a string""#,
        "-12",
        r#"{"big": 18446744073709551615, "neg": -9223372036854775808}"#,
        r#"{"unicode": "Готэм \u0001 ☕", "empty": {}, "none": []}"#,
    ];

    for input in inputs {
        let output = replace_field(input, "", "ignored");
        assert!(!is_error_payload(&output), "unexpected error for {}", input);
        assert_eq!(
            parse_json(&output).unwrap(),
            parse_json(input).unwrap(),
            "round trip changed {}",
            input
        );
    }
}

/// Test that the output uses four-space indentation and source key order.
#[test]
fn test_output_is_indented_in_source_order() {
    let output = replace_field(r#"{"z": 1, "a": {"m": true}}"#, "a.n", "null");
    let expected = "{\n    \"z\": 1,\n    \"a\": {\n        \"m\": true,\n        \"n\": null\n    }\n}";
    assert_eq!(output, expected);
}

/// Test the full coercion table as seen through the document output.
#[test]
fn test_value_coercion_in_output() {
    let cases = [
        ("true", "true"),
        ("FALSE", "false"),
        ("null", "null"),
        ("42", "42"),
        ("-7", "-7"),
        ("3.14", "3.14"),
        ("hello", "\"hello\""),
        (" 5 ", "5"),
        ("1e3", "1000.0"),
    ];

    for (raw, rendered) in cases {
        let output = replace_field("{}", "v", raw);
        assert_eq!(
            output,
            format!("{{\n    \"v\": {}\n}}", rendered),
            "coercing {:?}",
            raw
        );
    }
}

/// Test that deep paths create the missing objects.
#[test]
fn test_auto_vivification() {
    let output = replace_field("{}", "a.b.c.d", "test");
    assert_eq!(
        parse_json(&output).unwrap(),
        parse_json(r#"{"a":{"b":{"c":{"d":"test"}}}}"#).unwrap()
    );
}

/// Test that indexing past the end pads the array with empty objects.
#[test]
fn test_array_extension() {
    let output = replace_field(
        r#"{"items":[{"name":"A"},{"name":"B"}]}"#,
        "items.3.name",
        "Z",
    );
    let doc = parse_json(&output).unwrap();
    assert_eq!(
        doc,
        parse_json(r#"{"items":[{"name":"A"},{"name":"B"},{},{"name":"Z"}]}"#).unwrap()
    );
}

/// Test that indexing a number reports a structural error payload.
#[test]
fn test_index_into_non_array() {
    let output = replace_field(r#"{"a": 5}"#, "a.0", "anything");
    assert!(is_error_payload(&output));
    assert!(output.contains("non-array"));

    let err = try_replace_field(&Config::default(), r#"{"a": 5}"#, "a.0", "anything").unwrap_err();
    assert!(err.is_structural());
}

/// Test that an existing scalar on the way to a deeper key is replaced.
#[test]
fn test_scalar_replaced_by_object() {
    let output = replace_field(r#"{"a": "text", "b": 2}"#, "a.inner", "1");
    assert_eq!(
        parse_json(&output).unwrap(),
        parse_json(r#"{"a": {"inner": 1}, "b": 2}"#).unwrap()
    );
}

/// Test that setting the same value twice gives the same document as once.
#[test]
fn test_replace_is_idempotent() {
    let input = r#"{"list": [], "cfg": {"x": 1}}"#;
    let once = replace_field(input, "list.2.cfg.y", "yes");
    let twice = replace_field(&once, "list.2.cfg.y", "yes");
    assert_eq!(once, twice);
}

/// Test that a set value reads back at the same path.
#[test]
fn test_set_value_reads_back() {
    use fieldquill::document::JsonValue;
    use fieldquill::fieldpath::{cast_value, set_by_path, FieldPath};

    let mut doc = parse_json(r#"{"a": {"b": [1, 2]}}"#).unwrap();
    let path = FieldPath::parse("a.b.1");
    set_by_path(&mut doc, &path, cast_value("7.5")).unwrap();

    let b = doc.get_key("a").and_then(|a| a.get_key("b")).unwrap();
    assert_eq!(b.get_index(1), Some(&JsonValue::from(7.5)));
}

/// Test that the configured limit bounds array padding.
#[test]
fn test_extension_limit_from_config() {
    let config = Config {
        max_array_extension: Some(2),
        ..Config::default()
    };
    let ok = replace_field_with(&config, r#"{"a": []}"#, "a.1", "x");
    assert!(!is_error_payload(&ok));

    let err = replace_field_with(&config, r#"{"a": []}"#, "a.5", "x");
    assert!(is_error_payload(&err));
    assert!(err.contains("limit 2"));
}

/// Test that malformed JSON is reported, not panicked on.
#[test]
fn test_malformed_json() {
    for input in ["", "{", "{\"a\": }", "[1,]", "nul"] {
        let output = replace_field(input, "a", "1");
        assert!(
            output.starts_with("[ERROR] Invalid JSON: "),
            "{:?} gave {:?}",
            input,
            output
        );
    }
}

/// Test that padding has no limit unless one is configured.
#[test]
fn test_default_config_pads_large_index() {
    use fieldquill::document::JsonValue;

    let output = try_replace_field(&Config::default(), r#"{"a": []}"#, "a.10000", "1").unwrap();
    let doc = parse_json(&output).unwrap();
    let a = doc.get_key("a").unwrap();
    assert_eq!(a.get_index(9_999), Some(&JsonValue::empty_object()));
    assert_eq!(a.get_index(10_000), Some(&JsonValue::from(1i64)));
    assert!(a.get_index(10_001).is_none());
}

/// Test that an index at the top of the integer range is an error, not a crash.
#[test]
fn test_max_index_is_structural_error() {
    let path = format!("a.{}", usize::MAX);
    let output = replace_field(r#"{"a": []}"#, &path, "1");
    assert!(is_error_payload(&output));

    let root_path = usize::MAX.to_string();
    let err = try_replace_field(&Config::default(), "[]", &root_path, "1").unwrap_err();
    assert!(err.is_structural());
}
