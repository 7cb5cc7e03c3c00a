//! Token-level syntax highlighting for JSON and YAML text
//!
//! The highlighters never alter the underlying bytes; they only wrap tokens
//! in ANSI styles. Styles are forced because the colorize decision already
//! happened upstream.

use crate::classify::Format;
use console::Style;

/// Styles for the token classes of both formats
struct Palette {
    key: Style,
    string: Style,
    number: Style,
    keyword: Style,
    punct: Style,
}

impl Palette {
    fn colorized() -> Self {
        Self {
            key: Style::new().cyan().force_styling(true),
            string: Style::new().green().force_styling(true),
            number: Style::new().yellow().force_styling(true),
            keyword: Style::new().magenta().force_styling(true),
            punct: Style::new().dim().force_styling(true),
        }
    }
}

/// Colorize `text` according to its format's syntax.
pub fn highlight(text: &str, format: Format) -> String {
    let palette = Palette::colorized();
    match format {
        Format::Json => highlight_json(text, &palette),
        Format::Yaml => highlight_yaml(text, &palette),
    }
}

fn highlight_json(text: &str, p: &Palette) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = scan_json_string(bytes, i);
                let style = if colon_follows(bytes, end) {
                    &p.key
                } else {
                    &p.string
                };
                out.push_str(&style.apply_to(&text[i..end]).to_string());
                i = end;
            }
            b'-' | b'0'..=b'9' => {
                let end = scan_json_number(bytes, i);
                out.push_str(&p.number.apply_to(&text[i..end]).to_string());
                i = end;
            }
            b't' | b'f' | b'n' => {
                let end = scan_word(bytes, i);
                out.push_str(&p.keyword.apply_to(&text[i..end]).to_string());
                i = end;
            }
            b'{' | b'}' | b'[' | b']' | b',' | b':' => {
                out.push_str(&p.punct.apply_to(&text[i..i + 1]).to_string());
                i += 1;
            }
            _ => {
                // Whitespace between tokens in well-formed JSON
                let ch = text[i..].chars().next().unwrap_or(' ');
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    out
}

/// Index one past the closing quote of the string starting at `start`
fn scan_json_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn scan_json_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len()
        && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
    {
        i += 1;
    }
    i
}

fn scan_word(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    i
}

/// A string token is a key exactly when the next non-space byte is a colon
fn colon_follows(bytes: &[u8], mut i: usize) -> bool {
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    i < bytes.len() && bytes[i] == b':'
}

fn highlight_yaml(text: &str, p: &Palette) -> String {
    text.split('\n')
        .map(|line| highlight_yaml_line(line, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_yaml_line(line: &str, p: &Palette) -> String {
    let mut out = String::with_capacity(line.len() * 2);

    let indent_len = line.len() - line.trim_start_matches(' ').len();
    out.push_str(&line[..indent_len]);
    let mut rest = &line[indent_len..];

    // Block sequence bullets, possibly nested on one line ("- - 1")
    while let Some(after) = rest.strip_prefix("- ") {
        out.push_str(&p.punct.apply_to("-").to_string());
        out.push(' ');
        rest = after;
    }
    if rest == "-" {
        out.push_str(&p.punct.apply_to("-").to_string());
        return out;
    }

    if let Some(colon) = find_key_colon(rest) {
        out.push_str(&p.key.apply_to(&rest[..colon]).to_string());
        out.push_str(&p.punct.apply_to(":").to_string());
        match rest[colon + 1..].strip_prefix(' ') {
            Some(value) => {
                out.push(' ');
                out.push_str(&highlight_yaml_scalar(value, p));
            }
            None => out.push_str(&rest[colon + 1..]),
        }
    } else if !rest.is_empty() {
        out.push_str(&highlight_yaml_scalar(rest, p));
    }

    out
}

/// Position of the colon separating a mapping key from its value, quote
/// aware; a colon only separates when followed by a space or end of line.
fn find_key_colon(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        match (quote, bytes[i]) {
            (Some(b'"'), b'\\') => i += 2,
            (Some(q), c) if c == q => {
                quote = None;
                i += 1;
            }
            (Some(_), _) => i += 1,
            (None, c @ (b'"' | b'\'')) => {
                quote = Some(c);
                i += 1;
            }
            (None, b':') if i + 1 == bytes.len() || bytes[i + 1] == b' ' => return Some(i),
            (None, _) => i += 1,
        }
    }

    None
}

fn highlight_yaml_scalar(s: &str, p: &Palette) -> String {
    let style = match s {
        "true" | "false" => &p.keyword,
        "null" | "~" => &p.keyword,
        "|" | "|-" | "|+" | ">" | ">-" | ">+" => &p.punct,
        _ if s.parse::<f64>().is_ok() => &p.number,
        _ => &p.string,
    };
    style.apply_to(s).to_string()
}
