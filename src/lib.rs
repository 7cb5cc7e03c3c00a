//! jy — JSON|YAML converter
//!
//! Auto-detects whether input is JSON or YAML and converts it to the other
//! format. JSON is checked first because JSON is a syntactic subset of YAML;
//! the first successful non-null parse wins. Output is optionally rendered
//! with syntax coloring, and previously colorized output piped back in is
//! stripped of its escape sequences before classification.

pub mod classify;
pub mod cli;
pub mod convert;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod strip;

// Re-export commonly used types
pub use classify::{classify, Classified, Document, Format};
pub use convert::{convert, Converted};
pub use error::{JyError, JyResult};
pub use input::{InputSource, RawDocument};
pub use pipeline::{AppInfo, Pipeline, PipelineConfig, PipelineState};
pub use render::{OutputMode, Renderer};

/// Convert a JSON or YAML string to the other format's plain text form.
pub fn convert_str(input: &str) -> JyResult<String> {
    let stripped = strip::strip_colors(input.as_bytes());
    let classified = classify::classify(&stripped, "input")?;
    let converted = convert::convert(&classified.document)?;
    Ok(converted.text)
}
