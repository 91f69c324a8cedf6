// ABOUTME: Text normalization helpers for plain and shaped text extraction.
// ABOUTME: Collapses whitespace runs and normalizes blank-line noise while keeping paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("hardcoded pattern is valid"));

/// Collapses every whitespace run (including non-breaking spaces) to a single
/// space and trims the ends. Idempotent.
pub fn plain(text: &str) -> String {
    // split_whitespace uses the Unicode White_Space property, which covers
    // U+00A0 non-breaking space.
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes line structure: line endings unified to `\n`, every line
/// trimmed, ends trimmed, and runs of three or more newlines collapsed to
/// exactly one blank line.
pub fn shape(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = unified
        .trim()
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    EXCESS_BLANK_LINES.replace_all(&trimmed, "\n\n").into_owned()
}
