//! Integration tests for the full pipeline at the library level
//!
//! Strip -> Classify -> Convert -> Render against an in-memory sink, the
//! same path the binary takes minus stdin/stdout plumbing.

use assert_matches::assert_matches;
use jy::strip::strip_colors;
use jy::{
    JyError, OutputMode, Pipeline, PipelineConfig, PipelineState, RawDocument,
};
use pretty_assertions::assert_eq;

fn run(bytes: &[u8], config: PipelineConfig) -> Result<String, JyError> {
    let document = RawDocument::from_bytes(bytes.to_vec(), "piped input");
    let mut pipeline = Pipeline::new(config);
    let mut buf = Vec::new();
    pipeline.run(&document, &mut buf)?;
    Ok(String::from_utf8(buf).unwrap())
}

fn plain() -> PipelineConfig {
    PipelineConfig {
        mode: OutputMode::Plain,
        print_only: false,
    }
}

#[test]
fn test_json_document_comes_out_as_yaml() {
    let out = run(b"{\"name\": \"test\", \"count\": 3}", plain()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["name"], serde_yaml::Value::String("test".into()));
    assert!(!out.contains('{'), "YAML output should not be JSON: {}", out);
}

#[test]
fn test_yaml_document_comes_out_as_two_space_json() {
    let out = run(b"name: test\ncount: 3\n", plain()).unwrap();
    assert_eq!(out, "{\n  \"name\": \"test\",\n  \"count\": 3\n}\n");
}

#[test]
fn test_colorized_output_piped_back_in() {
    // First run: colorized YAML from a JSON document.
    let colorized = run(
        b"{\"a\": 1, \"b\": [true, null]}",
        PipelineConfig {
            mode: OutputMode::Colorized,
            print_only: false,
        },
    )
    .unwrap();
    assert!(colorized.contains('\x1b'));

    // Second run: the colorized bytes go back in and must convert exactly
    // like the uncolored document would.
    let from_colorized = run(colorized.as_bytes(), plain()).unwrap();
    let plain_yaml = run(b"{\"a\": 1, \"b\": [true, null]}", plain()).unwrap();
    let from_plain = run(plain_yaml.as_bytes(), plain()).unwrap();
    assert_eq!(from_colorized, from_plain);
}

#[test]
fn test_colorized_and_plain_agree_modulo_escapes() {
    let input = b"{\"k\": \"v\", \"n\": [1, 2]}";
    let plain_out = run(input, plain()).unwrap();
    let color_out = run(
        input,
        PipelineConfig {
            mode: OutputMode::Colorized,
            print_only: false,
        },
    )
    .unwrap();
    let stripped = strip_colors(color_out.as_bytes()).into_owned();
    assert_eq!(String::from_utf8(stripped).unwrap(), plain_out);
}

#[test]
fn test_print_only_renders_own_format() {
    let out = run(
        b"{\"a\":1}",
        PipelineConfig {
            mode: OutputMode::Plain,
            print_only: true,
        },
    )
    .unwrap();
    assert_eq!(out, "{\n  \"a\": 1\n}\n");

    let out = run(
        b"a: 1\n",
        PipelineConfig {
            mode: OutputMode::Plain,
            print_only: true,
        },
    )
    .unwrap();
    assert_eq!(out, "a: 1\n");
}

#[test]
fn test_unknown_input_fails_without_output() {
    let document = RawDocument::from_bytes(b"null".to_vec(), "piped input");
    let mut pipeline = Pipeline::new(plain());
    let mut buf = Vec::new();
    let err = pipeline.run(&document, &mut buf).unwrap_err();

    assert_matches!(err, JyError::UnknownFormat { .. });
    assert_eq!(err.user_message(), "piped input is neither JSON nor YAML");
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert!(buf.is_empty(), "no partial output on failure");
}

#[test]
fn test_double_conversion_round_trips() {
    let original = b"{\"users\": [{\"id\": 1, \"name\": \"a\"}, {\"id\": 2, \"name\": \"b\"}]}";
    let yaml = run(original, plain()).unwrap();
    let json = run(yaml.as_bytes(), plain()).unwrap();

    let a: serde_json::Value = serde_json::from_slice(original).unwrap();
    let b: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}
