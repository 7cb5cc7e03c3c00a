//! Command-line interface surface
//!
//! Thin glue around the pipeline: argument parsing, output-mode resolution,
//! and the piped-input probe. The pipeline only ever sees bytes and a
//! resolved [`OutputMode`].

pub mod probe;

use crate::render::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// JSON|YAML converter
#[derive(Parser, Debug, Clone)]
#[command(name = "jy")]
#[command(version)]
#[command(about = "Convert JSON to YAML or vice-versa, auto-detecting the input format")]
#[command(
    long_about = "Convert JSON to YAML or vice-versa, auto-detecting the input format.\n\
                  Reads from a named file, or from standard input when data is piped in\n\
                  (piped input takes precedence over a filename)."
)]
pub struct Args {
    /// File to convert; ignored when input is piped
    #[arg(value_name = "FILENAME")]
    pub filename: Option<PathBuf>,

    /// Emit plain text without color codes
    #[arg(long)]
    pub plain: bool,

    /// Pretty-print the input in its own format instead of converting
    #[arg(short, long)]
    pub print: bool,
}

impl Args {
    /// Resolve the output mode: `--plain` wins, otherwise colorize exactly
    /// when stdout is a terminal and `NO_COLOR` is unset.
    pub fn output_mode(&self) -> OutputMode {
        if self.plain {
            return OutputMode::Plain;
        }
        if should_use_colors() {
            OutputMode::Colorized
        } else {
            OutputMode::Plain
        }
    }
}

fn should_use_colors() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
}
