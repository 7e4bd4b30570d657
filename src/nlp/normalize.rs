//! Whitespace and line-ending normalization
//!
//! Extracted document text arrives with whatever line endings and spacing the
//! upstream extractor produced. Strategies that reason about lines work on the
//! line-preserving form ([`collapse_horizontal`]); the sentence fallback works
//! on the fully flattened form ([`flatten`]).

use unicode_segmentation::UnicodeSegmentation;

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapse runs of horizontal whitespace into a single space on every line,
/// trimming trailing whitespace. Line breaks and leading indentation width are
/// preserved (indentation is collapsed to spaces, one per whitespace char) so
/// outline depth survives normalization.
pub fn collapse_horizontal(text: &str) -> String {
    let text = normalize_line_endings(text);
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let body = line.trim_start_matches(is_horizontal_space);
        if body.is_empty() {
            continue;
        }
        let indent = line.len() - body.len();
        let indent_width = line[..indent].chars().count();
        out.extend(std::iter::repeat(' ').take(indent_width));

        let mut pending_space = false;
        for c in body.trim_end_matches(is_horizontal_space).chars() {
            if is_horizontal_space(c) {
                pending_space = true;
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// Replace every whitespace run (including line breaks) with a single space
/// and trim the ends.
pub fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split line-preserving text into blank-line-delimited paragraphs, trimmed,
/// empty ones skipped.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split('\n') {
        let line_end = offset + line.len();
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                out.push(text[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = line_end;
        }
        offset = line_end + 1;
    }
    if let Some(s) = start {
        out.push(text[s..end].trim());
    }

    out
}

/// Length of `text` in user-perceived characters (extended grapheme clusters).
///
/// Every minimum-length threshold in the crate is expressed in this unit.
pub fn text_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Check whether `text` has no content once trimmed.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn is_horizontal_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_line_endings(""), "");
    }

    #[test]
    fn test_collapse_horizontal_keeps_lines() {
        let text = "Hello    world\t\tagain  \r\n   a.  indented\u{00A0}item";
        assert_eq!(
            collapse_horizontal(text),
            "Hello world again\n   a. indented item"
        );
    }

    #[test]
    fn test_collapse_horizontal_keeps_blank_lines() {
        assert_eq!(collapse_horizontal("one\n\n   \ntwo"), "one\n\n\ntwo");
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten("  one\n\ntwo \t three  "), "one two three");
        assert_eq!(flatten(""), "");
    }

    #[test]
    fn test_paragraphs() {
        let text = "  first para\nstill first\n\n \nsecond  \n\n\nthird";
        assert_eq!(
            paragraphs(text),
            vec!["first para\nstill first", "second", "third"]
        );
        assert!(paragraphs("").is_empty());
        assert!(paragraphs("\n \n").is_empty());
    }

    #[test]
    fn test_text_len_counts_graphemes() {
        assert_eq!(text_len("abc"), 3);
        assert_eq!(text_len("café"), 4);
        assert_eq!(text_len("e\u{301}"), 1);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t "));
        assert!(!is_blank(" x "));
    }
}
