//! Metadata and title filtering
//!
//! Short structural lines (chapter headers, page labels, front/back-matter
//! titles) are not highlights. The section-header, outline, and paragraph
//! strategies use [`is_metadata`] to keep them out of the candidate list; the
//! marker and rule strategies use [`is_leading_metadata`] to drop a title
//! block that precedes the first delimiter.

use crate::nlp::normalize::{paragraphs, text_len};
use crate::nlp::patterns::{BENEFITS_HEADING, CAPITALIZED_WORDS, STRUCTURAL_LABEL};
use crate::types::SegmenterConfig;

/// Front- and back-matter titles that never carry highlight content.
pub const STRUCTURAL_TITLES: [&str; 10] = [
    "Introduction",
    "Conclusion",
    "Preface",
    "Foreword",
    "Acknowledgements",
    "References",
    "Bibliography",
    "Index",
    "Glossary",
    "Appendix",
];

/// Tokens that mark a title/author block at the top of an export.
const LEADING_CUES: [&str; 2] = ["Kindle", "by "];

/// Check whether a segment is non-content metadata.
///
/// A segment is metadata when any of these hold:
/// - it is shorter than `cfg.metadata_max_len`, consists only of capitalized
///   words, and has no sentence punctuation;
/// - it is a `Page|Chapter|Section|Part <number>` label;
/// - it is one of [`STRUCTURAL_TITLES`] (case-insensitive).
pub fn is_metadata(segment: &str, cfg: &SegmenterConfig) -> bool {
    let segment = segment.trim();
    if segment.is_empty() {
        return true;
    }

    if text_len(segment) < cfg.metadata_max_len
        && !has_sentence_punctuation(segment)
        && CAPITALIZED_WORDS.is_match(segment)
    {
        return true;
    }

    if STRUCTURAL_LABEL.is_match(segment) {
        return true;
    }

    STRUCTURAL_TITLES
        .iter()
        .any(|title| title.eq_ignore_ascii_case(segment))
}

/// Check whether a paragraph is a "benefits of" section heading that should
/// be held and merged with the list that follows it.
pub fn is_section_heading(segment: &str) -> bool {
    let segment = segment.trim();
    !segment.contains('\n') && BENEFITS_HEADING.is_match(segment)
}

/// Check whether the text before the first export marker or rule looks like a
/// title/author block rather than a passage.
pub fn is_leading_metadata(segment: &str, cfg: &SegmenterConfig) -> bool {
    LEADING_CUES.iter().any(|cue| segment.contains(cue))
        || text_len(segment.trim()) < cfg.leading_metadata_max_len
}

/// Remove metadata paragraphs from a multi-paragraph span, keeping section
/// headings even when they look like titles.
pub fn strip_metadata_paragraphs(span: &str, cfg: &SegmenterConfig) -> String {
    paragraphs(span)
        .into_iter()
        .filter(|p| is_section_heading(p) || !is_metadata(p, cfg))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn has_sentence_punctuation(segment: &str) -> bool {
    segment.contains(['.', '!', '?'])
}
