//! Deterministic text normalization for extracted page text.
//!
//! PDF text extraction introduces spurious line breaks in the middle of
//! sentences and uneven whitespace between words. The rules here repair
//! both: collapse whitespace, rejoin lines broken mid-sentence, and
//! re-introduce paragraph boundaries where a sentence terminator is
//! followed by a new capitalized sentence.
//!
//! `normalize` is a pure function and is idempotent:
//! `normalize(normalize(x)) == normalize(x)` for every input. Each rule is
//! independently testable and they must run in the documented order —
//! line joining has to see the newlines that whitespace collapsing leaves
//! alone, and paragraph-break restoration has to run on joined text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Normalize raw extracted page text.
///
/// Rules (applied in order):
/// 1. Normalize line endings: `\r\n` and bare `\r` become `\n`, so a CRLF
///    paragraph boundary is the same boundary as an LF one.
/// 2. Collapse every run of spaces and tabs to a single space.
/// 3. Join lines broken inside a sentence: an isolated newline that is not
///    preceded by `.` and not followed by an uppercase letter becomes a
///    single space.
/// 4. Collapse runs of three or more newlines to exactly two.
/// 5. Trim leading and trailing whitespace.
/// 6. Restore paragraph breaks: `<terminator><ws>\n<ws><Uppercase>` becomes
///    `<terminator>\n\n<Uppercase>` for terminators `.`, `!`, `?`.
///
/// Empty or whitespace-only input returns the empty string.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let s = normalise_line_endings(raw);
    let s = collapse_horizontal_whitespace(&s);
    let s = join_broken_lines(&s);
    let s = collapse_newline_runs(&s);
    let s = s.trim().to_string();
    restore_paragraph_breaks(&s)
}

// ── Rule 1: Normalize line endings ───────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Collapse horizontal whitespace ───────────────────────────────

static RE_HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

fn collapse_horizontal_whitespace(input: &str) -> String {
    RE_HORIZONTAL_WS.replace_all(input, " ").to_string()
}

// ── Rule 3: Join lines broken mid-sentence ───────────────────────────────

/// An isolated newline (no adjacent newline) that does not follow a `.` and
/// does not precede an uppercase letter is a wrap artifact, not a paragraph
/// boundary. Replace it with a single space, absorbing surrounding spaces so
/// the join never doubles whitespace.
fn join_broken_lines(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let isolated = prev != Some('\n') && next != Some('\n');
            let after_period = prev == Some('.');
            let before_upper = next.is_some_and(|n| n.is_ascii_uppercase());

            if isolated && !after_period && !before_upper {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(' ');
                i += 1;
                while chars.get(i) == Some(&' ') {
                    i += 1;
                }
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

// ── Rule 4: Collapse excessive newlines ──────────────────────────────────

static RE_NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

fn collapse_newline_runs(input: &str) -> String {
    RE_NEWLINE_RUNS.replace_all(input, "\n\n").to_string()
}

// ── Rule 6: Restore paragraph breaks at sentence boundaries ──────────────

static RE_SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])\s*\n\s*([A-Z])").unwrap());

fn restore_paragraph_breaks(input: &str) -> String {
    RE_SENTENCE_BREAK
        .replace_all(input, "${1}\n\n${2}")
        .to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  \n"), "");
    }

    #[test]
    fn collapses_spaces_and_tabs() {
        assert_eq!(normalize("hello \t  world"), "hello world");
    }

    #[test]
    fn joins_line_broken_mid_sentence() {
        assert_eq!(
            normalize("This is a\nbroken sentence."),
            "This is a broken sentence."
        );
    }

    #[test]
    fn join_does_not_double_spaces() {
        assert_eq!(normalize("word \n more"), "word more");
    }

    #[test]
    fn keeps_newline_before_uppercase() {
        assert_eq!(normalize("heading\nNext line"), "heading\nNext line");
    }

    #[test]
    fn keeps_newline_after_period() {
        assert_eq!(normalize("sentence.\nlowercase"), "sentence.\nlowercase");
    }

    #[test]
    fn crlf_block_boundary_survives() {
        // A CRLF paragraph boundary must behave exactly like an LF one.
        assert_eq!(normalize("Heading\r\n\r\nBody text"), "Heading\n\nBody text");
        assert_eq!(normalize("a\r\nwrapped"), "a wrapped");
    }

    #[test]
    fn bare_carriage_return_is_a_line_ending() {
        assert_eq!(normalize("one\rwrapped"), "one wrapped");
    }

    #[test]
    fn preserves_double_newline() {
        let input = "Introduction\n\nThis is the first sentence. This is the second.";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn collapses_newline_runs_to_two() {
        assert_eq!(normalize("One.\n\n\n\n\nTwo."), "One.\n\nTwo.");
    }

    #[test]
    fn restores_paragraph_break_after_terminator() {
        assert_eq!(
            normalize("First sentence.\nSecond sentence."),
            "First sentence.\n\nSecond sentence."
        );
        assert_eq!(normalize("Really?\nYes."), "Really?\n\nYes.");
        assert_eq!(normalize("Go!\nNow."), "Go!\n\nNow.");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(normalize("  hello  \n"), "hello");
    }

    #[test]
    fn idempotent_on_typical_input() {
        let inputs = [
            "Introduction\n\nThis is the first sentence. This is the second.",
            "A heading\nwith a wrapped\nline. Then more.\nNext paragraph.",
            "ONE.\n\n\nTWO!\nThree?\nFour",
            "   spaced\t\tout   text \n over lines ",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn single_paragraph_text_passes_through() {
        let input = "Just one plain paragraph of text without breaks.";
        assert_eq!(normalize(input), input);
    }
}
