//! Format classification: JSON first, then YAML
//!
//! Every JSON document is also valid YAML, so the order of the attempts is
//! load-bearing: JSON is tried first and the first successful non-null parse
//! wins. A document that parses to null in both attempts (empty input, a
//! bare `null` literal) is indistinguishable from "no value" and is rejected
//! as unknown.

use crate::error::{JyError, JyResult};

/// The two formats the pipeline understands.
///
/// "Unknown" is not a variant; classification failure is an error, not a
/// sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// The conversion target for a document of this format
    pub fn opposite(self) -> Format {
        match self {
            Format::Json => Format::Yaml,
            Format::Yaml => Format::Json,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }
}

/// A parsed document, tagged with the parser that accepted it.
///
/// JSON objects keep insertion order (`serde_json` with `preserve_order`);
/// YAML mappings are ordered natively.
#[derive(Debug, Clone)]
pub enum Document {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
}

/// Result of a successful classification
#[derive(Debug, Clone)]
pub struct Classified {
    pub format: Format,
    pub document: Document,
}

/// Classify `bytes` as JSON or YAML.
///
/// Attempts are destructive and ordered: a strict JSON parse first, then a
/// YAML parse. Each attempt counts only if it yields a non-null value. If
/// both fail the input is unusable and the pipeline must stop;
/// `source_desc` names the input in the resulting error.
pub fn classify(bytes: &[u8], source_desc: &str) -> JyResult<Classified> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
        if !value.is_null() {
            return Ok(Classified {
                format: Format::Json,
                document: Document::Json(value),
            });
        }
    }

    if let Ok(value) = serde_yaml::from_slice::<serde_yaml::Value>(bytes) {
        if !value.is_null() {
            return Ok(Classified {
                format: Format::Yaml,
                document: Document::Yaml(value),
            });
        }
    }

    Err(JyError::unknown_format(source_desc))
}
