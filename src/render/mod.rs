//! Output rendering, with optional syntax coloring

pub mod highlight;

use crate::classify::Format;
use crate::error::{JyError, JyResult};
use std::borrow::Cow;
use std::io::Write;

/// Whether the renderer emits ANSI color escape sequences.
///
/// Resolved once in the CLI layer (tty + `NO_COLOR`); the renderer trusts
/// the decision and never re-probes the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Colorized,
    Plain,
}

/// Writes final-format text to a sink.
pub struct Renderer {
    mode: OutputMode,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Emit `text` to `out`, colorizing when the mode asks for it.
    ///
    /// Colorizing only inserts escape sequences around the existing bytes,
    /// so colorized output minus escapes is byte-for-byte the plain output.
    /// A terminating newline is appended if the text lacks one.
    pub fn render(&self, text: &str, format: Format, out: &mut impl Write) -> JyResult<()> {
        let rendered: Cow<'_, str> = match self.mode {
            OutputMode::Plain => Cow::Borrowed(text),
            OutputMode::Colorized => Cow::Owned(highlight::highlight(text, format)),
        };

        out.write_all(rendered.as_bytes())
            .map_err(|cause| JyError::Render { cause })?;
        if !rendered.ends_with('\n') {
            out.write_all(b"\n").map_err(|cause| JyError::Render { cause })?;
        }
        Ok(())
    }
}
