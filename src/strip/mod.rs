//! ANSI color-code stripping
//!
//! Output from a previous colorized run can be piped straight back in; the
//! escape sequences have to go before classification or neither parser will
//! accept the bytes.

use std::borrow::Cow;

/// Remove all ANSI escape sequences from `bytes`, leaving the textual
/// content unchanged.
///
/// Idempotent: stripping already-plain bytes returns them unchanged (and
/// borrowed). Input that is not valid UTF-8 is passed through untouched,
/// since the renderer only ever colorizes UTF-8 text.
pub fn strip_colors(bytes: &[u8]) -> Cow<'_, [u8]> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => return Cow::Borrowed(bytes),
    };

    match console::strip_ansi_codes(text) {
        Cow::Borrowed(_) => Cow::Borrowed(bytes),
        Cow::Owned(stripped) => Cow::Owned(stripped.into_bytes()),
    }
}
