//! The Strip → Classify → Convert → Render pipeline

use crate::classify;
use crate::convert;
use crate::error::JyResult;
use crate::input::RawDocument;
use crate::render::{OutputMode, Renderer};
use crate::strip;
use std::io::Write;

/// Process-wide immutable program identity, constructed once in `main` and
/// passed down instead of living in module-level state.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl AppInfo {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// Configuration for one pipeline invocation
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub mode: OutputMode,
    /// Render the document in its own format instead of converting
    pub print_only: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Plain,
            print_only: false,
        }
    }
}

/// Pipeline progress. `Failed` and `Done` are terminal; there are no
/// retries, every failure is a user-input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    AwaitInput,
    Stripping,
    Classifying,
    Converting,
    Rendering,
    Done,
    Failed,
}

/// Runs one document through the pipeline.
///
/// Single-threaded and synchronous: one document per invocation, each stage
/// consumes the previous stage's output, nothing is revisited.
pub struct Pipeline {
    config: PipelineConfig,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: PipelineState::AwaitInput,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the full pipeline for `document`, writing the result to `out`.
    ///
    /// On error the pipeline lands in `Failed` and the error propagates to
    /// the caller; no partial output beyond what the sink already received.
    pub fn run(&mut self, document: &RawDocument, out: &mut impl Write) -> JyResult<()> {
        match self.execute(document, out) {
            Ok(()) => {
                self.state = PipelineState::Done;
                Ok(())
            }
            Err(e) => {
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    fn execute(&mut self, document: &RawDocument, out: &mut impl Write) -> JyResult<()> {
        self.state = PipelineState::Stripping;
        let stripped = strip::strip_colors(document.as_bytes());

        self.state = PipelineState::Classifying;
        let classified = classify::classify(&stripped, document.source_desc())?;

        self.state = PipelineState::Converting;
        let converted = if self.config.print_only {
            convert::normalize(&classified.document)?
        } else {
            convert::convert(&classified.document)?
        };

        self.state = PipelineState::Rendering;
        Renderer::new(self.config.mode).render(&converted.text, converted.format, out)
    }
}
