//! Block splitting and heading classification.
//!
//! Processed page text is cut into blocks on blank-line boundaries, then
//! each block is tagged [`ElementKind::Heading`] or
//! [`ElementKind::Paragraph`] by a conservative heuristic tuned for the
//! short, title-cased, non-sentence lines common in extracted PDF outlines.

use crate::output::{ContentElement, ElementKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Split processed text into trimmed, non-empty content blocks.
///
/// Blocks are separated by `\n\n` (or `\r\n\r\n` when carriage returns
/// survived extraction). Order is preserved.
pub fn split_blocks(processed: &str) -> Vec<String> {
    processed
        .split("\r\n\r\n")
        .flat_map(|chunk| chunk.split("\n\n"))
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

static RE_ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s]+$").unwrap());
static RE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Decide whether a block reads like a heading.
///
/// A trimmed block is a heading iff all of:
/// - shorter than 100 characters,
/// - does not end with `.` or `,`,
/// - at most 8 whitespace-delimited words,
/// - starts with an uppercase letter,
///
/// and at least one of:
/// - contains `:`,
/// - is all-caps (`^[A-Z][A-Z\s]+$`),
/// - starts with a number and period (`^\d+\.`),
/// - shorter than 50 characters.
///
/// Lengths are counted in characters, not bytes. Empty or whitespace-only
/// blocks are never headings.
pub fn is_heading(block: &str) -> bool {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return false;
    }

    let len = trimmed.chars().count();
    let starts_upper = trimmed.chars().next().is_some_and(char::is_uppercase);

    let plausible = len < 100
        && !trimmed.ends_with('.')
        && !trimmed.ends_with(',')
        && trimmed.split_whitespace().count() <= 8
        && starts_upper;

    if !plausible {
        return false;
    }

    trimmed.contains(':')
        || RE_ALL_CAPS.is_match(trimmed)
        || RE_NUMBERED.is_match(trimmed)
        || len < 50
}

/// Split processed page text into classified content elements.
pub fn analyze_content(processed: &str) -> Vec<ContentElement> {
    split_blocks(processed)
        .into_iter()
        .map(|text| {
            let kind = if is_heading(&text) {
                ElementKind::Heading
            } else {
                ElementKind::Paragraph
            };
            ContentElement { text, kind }
        })
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_discards_empty_fragments() {
        let blocks = split_blocks("one\n\n\n\ntwo\n\n  \n\nthree");
        assert_eq!(blocks, vec!["one", "two", "three"]);
    }

    #[test]
    fn split_handles_crlf_boundaries() {
        let blocks = split_blocks("alpha\r\n\r\nbeta");
        assert_eq!(blocks, vec!["alpha", "beta"]);
    }

    #[test]
    fn split_trims_fragments() {
        let blocks = split_blocks("  padded  \n\nnext");
        assert_eq!(blocks, vec!["padded", "next"]);
    }

    #[test]
    fn short_title_case_is_heading() {
        assert!(is_heading("Introduction"));
        assert!(is_heading("Chapter Overview"));
    }

    #[test]
    fn sentence_is_not_heading() {
        assert!(!is_heading("This is the first sentence."));
    }

    #[test]
    fn trailing_comma_is_never_heading() {
        assert!(!is_heading("Short,"));
        assert!(!is_heading("A list of things,"));
    }

    #[test]
    fn all_caps_is_heading() {
        assert!(is_heading("HELLO"));
        assert!(is_heading("TABLE OF CONTENTS"));
    }

    #[test]
    fn numbered_section_is_heading() {
        assert!(is_heading("1. Getting Started"));
        assert!(!is_heading("1. this starts lowercase"));
    }

    #[test]
    fn colon_qualifies_longer_blocks() {
        // 50–99 characters: only the colon rescues it.
        let with_colon = "Appendix B: Detailed Results For All Benchmark Runs";
        assert!(with_colon.chars().count() >= 50);
        assert!(is_heading(with_colon));
    }

    #[test]
    fn forty_nine_char_block_is_heading() {
        let block = "Forty Nine Characters Of Title Cased Heading Text";
        assert_eq!(block.chars().count(), 49);
        assert!(is_heading(block));
    }

    #[test]
    fn long_block_without_auxiliary_is_not_heading() {
        // 99 characters, 8 words, uppercase start, no terminator, no colon,
        // not all-caps, not numbered. Passes every main condition but no
        // auxiliary condition, so it is not a heading.
        let block = format!("{} Bbbbbbbb", ["Aaaaaaaaaaaa"; 7].join(" "));
        assert_eq!(block.chars().count(), 99);
        assert_eq!(block.split_whitespace().count(), 8);
        assert!(!is_heading(&block));
    }

    #[test]
    fn lowercase_start_is_not_heading() {
        assert!(!is_heading("introduction"));
    }

    #[test]
    fn whitespace_block_is_not_heading() {
        assert!(!is_heading("   "));
        assert!(!is_heading(""));
    }

    #[test]
    fn nine_words_is_not_heading() {
        assert!(!is_heading("One Two Three Four Five Six Seven Eight Nine"));
    }

    #[test]
    fn analyze_tags_blocks_in_order() {
        let text = "Introduction\n\nThis is the first sentence. This is the second.";
        let elements = analyze_content(text);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text, "Introduction");
        assert_eq!(elements[0].kind, ElementKind::Heading);
        assert_eq!(elements[1].text, "This is the first sentence. This is the second.");
        assert_eq!(elements[1].kind, ElementKind::Paragraph);
    }
}
