// src/core/sanitize.rs
use crate::config::consts::{ELLIPSIS, TOOLTIP_MAX_CHARS};

/// Whitespace-only (or empty) text.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Column names may wrap in the source; drop the line breaks so they work as keys.
pub fn header_key(s: &str) -> String {
    s.replace('\n', "")
}

/// Trim surrounding whitespace, then any trailing `:`, `,` or space.
pub fn trim_tooltip(s: &str) -> String {
    s.trim().trim_end_matches([':', ',', ' ']).to_string()
}

/// Cut to `TOOLTIP_MAX_CHARS` characters plus an ellipsis; shorter text is left alone.
pub fn truncate_tooltip(s: &str) -> String {
    truncate_chars(s, TOOLTIP_MAX_CHARS)
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => join!(&s[..cut], ELLIPSIS),
        None => s!(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_trailing_punctuation_is_trimmed() {
        assert_eq!(trim_tooltip("  Adds two values:\n"), "Adds two values");
        assert_eq!(trim_tooltip("Adds, then: , "), "Adds, then");
        assert_eq!(trim_tooltip("Keeps a period."), "Keeps a period.");
        assert_eq!(trim_tooltip(""), "");
    }

    #[test]
    fn header_key_removes_line_breaks() {
        assert_eq!(header_key("Opcode/\nInstruction"), "Opcode/Instruction");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ééééé", 2), "éé...");

        let long = "x".repeat(300);
        let cut = truncate_tooltip(&long);
        assert_eq!(cut.chars().count(), 255 + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_tooltip(&"y".repeat(255)), "y".repeat(255));
    }
}
