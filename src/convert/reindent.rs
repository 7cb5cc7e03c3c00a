//! Canonical two-space re-indentation of JSON text

use crate::error::{JyError, JyResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"  ";

/// Serialize a JSON value with the canonical two-space indent, independent
/// of whatever formatting the producing parser or emitter used.
pub fn reindent_value(value: &serde_json::Value) -> JyResult<String> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| JyError::conversion(format!("JSON serialization: {}", e)))?;
    String::from_utf8(buf).map_err(|e| JyError::conversion(format!("non-UTF-8 output: {}", e)))
}

/// Reformat JSON text to the canonical two-space-indented form.
pub fn reindent(text: &str) -> JyResult<String> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| JyError::conversion(format!("JSON reparse during reindent: {}", e)))?;
    reindent_value(&value)
}
