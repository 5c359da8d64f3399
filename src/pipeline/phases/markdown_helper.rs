use regex::Regex;
use std::sync::OnceLock;

/// A top-level (`# `) heading and the byte offset just past its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub title: &'a str,
    pub end: usize,
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    // A single `#`, optional spaces, then a non-`#` character. `## Usage` is not top-level.
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^#[ \t]*([^#\s][^\n]*)$").expect("Invalid heading regex")
    })
}

fn paragraph_break_regex() -> &'static Regex {
    static BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    BREAK_REGEX.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph regex"))
}

pub fn first_heading(text: &str) -> Option<Heading<'_>> {
    let captures = heading_regex().captures(text)?;
    let whole = captures.get(0)?;
    let title = captures.get(1)?.as_str().trim();
    Some(Heading {
        title,
        end: whole.end(),
    })
}

pub fn has_heading(text: &str) -> bool {
    heading_regex().is_match(text)
}

/// First blank-line-delimited block of `text`, trimmed. Empty when `text` is blank.
pub fn first_paragraph(text: &str) -> &str {
    paragraph_break_regex()
        .split(text.trim())
        .next()
        .unwrap_or("")
        .trim()
}

/// First `max_chars` characters of `text`, with `…` appended when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
