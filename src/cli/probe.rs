//! "Is input being piped?" capability query
//!
//! The query itself is one tty check; the platform backend below covers the
//! Git Bash on Windows quirk, where a program started with no redirection
//! still sees a pipe on standard input.

/// True when standard input is connected to a pipe rather than a terminal.
pub fn stdin_is_piped() -> bool {
    !atty::is(atty::Stream::Stdin)
}

/// Whether a zero-byte read from piped stdin should fall back to the
/// filename/usage path instead of being classified.
///
/// Git Bash on Windows (MSYSTEM=MINGW*) hands programs an empty phantom
/// pipe when nothing was actually redirected; treating it as real piped
/// input would reject the invocation instead of reading the file argument.
/// Elsewhere an empty pipe is genuine (empty) input and stays on the piped
/// path, where classification rejects it.
pub fn treat_empty_stdin_as_absent() -> bool {
    backend::empty_stdin_is_phantom()
}

#[cfg(windows)]
mod backend {
    pub fn empty_stdin_is_phantom() -> bool {
        std::env::var("MSYSTEM")
            .map(|v| v.starts_with("MINGW"))
            .unwrap_or(false)
    }
}

#[cfg(not(windows))]
mod backend {
    pub fn empty_stdin_is_phantom() -> bool {
        false
    }
}
