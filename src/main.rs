use anyhow::Result;
use clap::{CommandFactory, Parser};

use jy::cli::{probe, Args};
use jy::{AppInfo, InputSource, Pipeline, PipelineConfig, RawDocument};

fn main() -> Result<()> {
    let app = AppInfo::new("jy", env!("CARGO_PKG_VERSION"));
    let args = Args::parse();

    let document = match acquire_input(&args)? {
        Some(document) => document,
        None => {
            // No piped input and no filename: nothing to convert.
            Args::command().print_help()?;
            std::process::exit(2);
        }
    };

    let config = PipelineConfig {
        mode: args.output_mode(),
        print_only: args.print,
    };

    let mut pipeline = Pipeline::new(config);
    let stdout = std::io::stdout();
    pipeline
        .run(&document, &mut stdout.lock())
        .map_err(|e| anyhow::anyhow!("{}: {}", app.name, e.user_message()))?;

    Ok(())
}

/// Pick the active input source: piped stdin wins over a filename argument.
///
/// A zero-byte pipe falls back to the filename when one was given (scripts
/// routinely run with stdin at /dev/null), and to the usage path under Git
/// Bash on Windows, where an unredirected stdin shows up as an empty
/// phantom pipe. An empty pipe with no filename is genuine input and gets
/// rejected downstream by the classifier.
fn acquire_input(args: &Args) -> jy::JyResult<Option<RawDocument>> {
    if probe::stdin_is_piped() {
        let document = InputSource::Stdin.read()?;
        if !document.is_empty() {
            return Ok(Some(document));
        }
        if args.filename.is_none() && !probe::treat_empty_stdin_as_absent() {
            return Ok(Some(document));
        }
    }

    match &args.filename {
        Some(path) => InputSource::File(path.clone()).read().map(Some),
        None => Ok(None),
    }
}
