//! Cross-format conversion between JSON and YAML
//!
//! Conversion is lossless for the JSON data model (objects, arrays, strings,
//! numbers, booleans, null). YAML-only features are handled explicitly:
//! tagged values lose their tag and convert as the underlying value, aliases
//! are already resolved by the parser, and non-string mapping keys or
//! non-finite floats fail the conversion because JSON cannot represent them.

pub mod reindent;

use crate::classify::{Document, Format};
use crate::error::{JyError, JyResult};
use serde_yaml::Value as Yaml;

/// Text output of a conversion, tagged with its format
#[derive(Debug, Clone)]
pub struct Converted {
    pub format: Format,
    pub text: String,
}

/// Convert a classified document to the opposite format's text form.
pub fn convert(document: &Document) -> JyResult<Converted> {
    match document {
        Document::Json(value) => Ok(Converted {
            format: Format::Yaml,
            text: json_to_yaml(value)?,
        }),
        Document::Yaml(value) => Ok(Converted {
            format: Format::Json,
            text: yaml_to_json(value)?,
        }),
    }
}

/// Render a classified document in its own format's canonical text form,
/// without cross-format conversion (the print-only CLI mode).
pub fn normalize(document: &Document) -> JyResult<Converted> {
    match document {
        Document::Json(value) => Ok(Converted {
            format: Format::Json,
            text: reindent::reindent_value(value)?,
        }),
        Document::Yaml(value) => Ok(Converted {
            format: Format::Yaml,
            text: emit_yaml(value)?,
        }),
    }
}

/// Serialize a JSON value as YAML text
pub fn json_to_yaml(value: &serde_json::Value) -> JyResult<String> {
    emit_yaml(value)
}

/// Convert a YAML value to JSON text with the canonical two-space indent
pub fn yaml_to_json(value: &Yaml) -> JyResult<String> {
    let json = yaml_value_to_json(value)?;
    reindent::reindent_value(&json)
}

fn emit_yaml<T: serde::Serialize>(value: &T) -> JyResult<String> {
    let text = serde_yaml::to_string(value)
        .map_err(|e| JyError::conversion(format!("YAML serialization: {}", e)))?;
    // serde_yaml terminates the document with a newline; the renderer owns
    // line termination.
    Ok(text.trim_end_matches('\n').to_string())
}

/// Map a YAML value onto the JSON data model.
///
/// Mapping keys must be strings and floats must be finite; anything else is
/// a structural incompatibility, reported rather than silently dropped.
pub fn yaml_value_to_json(value: &Yaml) -> JyResult<serde_json::Value> {
    match value {
        Yaml::Null => Ok(serde_json::Value::Null),
        Yaml::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Yaml::Number(n) => yaml_number_to_json(n),
        Yaml::String(s) => Ok(serde_json::Value::String(s.clone())),
        Yaml::Sequence(seq) => {
            let items = seq
                .iter()
                .map(yaml_value_to_json)
                .collect::<JyResult<Vec<_>>>()?;
            Ok(serde_json::Value::Array(items))
        }
        Yaml::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                let key = key.as_str().ok_or_else(|| {
                    JyError::conversion(format!(
                        "non-string mapping key {:?} has no JSON equivalent",
                        key
                    ))
                })?;
                object.insert(key.to_string(), yaml_value_to_json(val)?);
            }
            Ok(serde_json::Value::Object(object))
        }
        // The tag has no JSON representation; the underlying value does.
        Yaml::Tagged(tagged) => yaml_value_to_json(&tagged.value),
    }
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> JyResult<serde_json::Value> {
    if let Some(i) = n.as_i64() {
        return Ok(serde_json::Value::Number(i.into()));
    }
    if let Some(u) = n.as_u64() {
        return Ok(serde_json::Value::Number(u.into()));
    }
    let f = n
        .as_f64()
        .ok_or_else(|| JyError::conversion(format!("unrepresentable number {}", n)))?;
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .ok_or_else(|| JyError::conversion(format!("{} has no JSON representation", f)))
}
