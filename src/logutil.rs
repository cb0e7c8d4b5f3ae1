//! Helpers for logging player-supplied text.
//!
//! Questions typed during an interrogation are arbitrary user input; before they reach
//! a log line they are flattened to one line and capped in length.

use std::fmt::Write;

/// Longest preview kept in a log line, in characters.
pub const MAX_PREVIEW: usize = 160;

/// Escape `s` for single-line logging.
///
/// Newlines, carriage returns, tabs and backslashes are written as their escape
/// sequences, other control characters as `\xNN`. Anything past [`MAX_PREVIEW`]
/// characters is replaced by a single `…`.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (n, ch) in s.chars().enumerate() {
        if n == MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_multiline_questions() {
        assert_eq!(escape_log("Where was\nEva Frost?\t"), "Where was\\nEva Frost?\\t");
    }

    #[test]
    fn keeps_unicode_and_caps_length() {
        let long = "ş".repeat(MAX_PREVIEW + 10);
        let out = escape_log(&long);
        assert_eq!(out.chars().count(), MAX_PREVIEW + 1);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn hex_escapes_other_controls() {
        assert_eq!(escape_log("a\u{7}b"), "a\\x07b");
    }
}
