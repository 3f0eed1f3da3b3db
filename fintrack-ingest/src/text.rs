//! Plain-text helpers shared by the label-driven parsers.

use regex::Regex;

use fintrack_core::Result;

/// Drop carriage returns and squeeze runs of blank lines into one newline,
/// so `Label:\n\n\nvalue` reads as `Label:\nvalue`.
pub fn collapse_blank_lines(body: &str) -> String {
    let text = body.replace('\r', "");
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len());
    let mut pending_newline = false;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            pending_newline = true;
            continue;
        }
        if pending_newline || !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
        pending_newline = false;
    }
    if pending_newline {
        out.push('\n');
    }
    out
}

/// First capture group of the first match of `pattern`, trimmed. A miss
/// yields an empty string.
pub fn first_capture(text: &str, pattern: &str) -> Result<String> {
    let re = Regex::new(pattern)?;
    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default())
}
