//! Paragraph strategy
//!
//! Splits on blank lines. A "benefits of" heading paragraph is held in an
//! accumulator and merged with the numbered or bulleted paragraphs that follow
//! it, so a heading never ends up separated from its list. Metadata paragraphs
//! are dropped.

use crate::nlp::metadata::{is_metadata, is_section_heading};
use crate::nlp::normalize::{collapse_horizontal, paragraphs};
use crate::nlp::patterns::LIST_CONTINUATION;
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;

/// Emits blank-line-delimited paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphStrategy;

/// A heading waiting for its list.
struct HeldHeading {
    text: String,
    merged: bool,
}

impl SegmentationStrategy for ParagraphStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Paragraph
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let text = collapse_horizontal(text);
        let mut out = Vec::new();
        let mut held: Option<HeldHeading> = None;

        for paragraph in paragraphs(&text) {
            if let Some(heading) = held.as_mut() {
                if LIST_CONTINUATION.is_match(paragraph) {
                    heading.text.push('\n');
                    heading.text.push_str(paragraph);
                    heading.merged = true;
                    continue;
                }
            }
            if let Some(heading) = held.take() {
                flush_heading(heading, cfg, &mut out);
            }

            if is_section_heading(paragraph) {
                held = Some(HeldHeading {
                    text: paragraph.to_string(),
                    merged: false,
                });
                continue;
            }

            if is_metadata(paragraph, cfg) {
                continue;
            }
            if exceeds(paragraph, cfg.paragraph_min_len) {
                out.push(paragraph.to_string());
            }
        }

        if let Some(heading) = held {
            flush_heading(heading, cfg, &mut out);
        }

        out
    }
}

/// A heading that picked up a list is always emitted; a bare heading is
/// judged like any other paragraph.
fn flush_heading(heading: HeldHeading, cfg: &SegmenterConfig, out: &mut Vec<String>) {
    if heading.merged
        || (!is_metadata(&heading.text, cfg) && exceeds(&heading.text, cfg.paragraph_min_len))
    {
        out.push(heading.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<String> {
        ParagraphStrategy.segment(text, &SegmenterConfig::default())
    }

    #[test]
    fn test_three_paragraphs_in_order() {
        let text = "The first paragraph talks about habits and systems.\n\n\
                    The second paragraph explains identity-based change.\n\n\
                    The third paragraph closes with environment design.";
        let highlights = run(text);
        assert_eq!(highlights.len(), 3);
        assert!(highlights[0].starts_with("The first"));
        assert!(highlights[1].starts_with("The second"));
        assert!(highlights[2].starts_with("The third"));
    }

    #[test]
    fn test_short_paragraphs_dropped() {
        let text = "Too short.\n\nThis paragraph is long enough to survive.";
        assert_eq!(run(text), vec!["This paragraph is long enough to survive."]);
    }

    #[test]
    fn test_metadata_dropped() {
        let text = "Chapter 3\n\nA paragraph right after the chapter label.\n\nIntroduction\n\n\
                    Another paragraph after a structural title.";
        let highlights = run(text);
        assert_eq!(highlights.len(), 2);
        assert!(highlights.iter().all(|h| h != "Chapter 3" && h != "Introduction"));
    }

    #[test]
    fn test_heading_merges_with_list() {
        let text = "5 Benefits of Meditation\n\n1. Lower stress.\n\n2. Better focus.\n\n\
                    A closing paragraph that stands alone.";
        let highlights = run(text);
        assert_eq!(highlights.len(), 2);
        assert_eq!(
            highlights[0],
            "5 Benefits of Meditation\n1. Lower stress.\n2. Better focus."
        );
        assert_eq!(highlights[1], "A closing paragraph that stands alone.");
    }

    #[test]
    fn test_bare_heading_treated_as_paragraph() {
        let text = "5 Benefits of Meditation\n\nMeditation has been studied for decades now.";
        let highlights = run(text);
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0], "5 Benefits of Meditation");
    }

    #[test]
    fn test_bullet_continuation() {
        let text = "Three benefits of walking\n\n• Clearer thinking\n\n- Better mood overall";
        let highlights = run(text);
        assert_eq!(highlights.len(), 1);
        assert!(highlights[0].contains("Clearer thinking"));
        assert!(highlights[0].contains("Better mood overall"));
    }

    #[test]
    fn test_empty() {
        assert!(run("").is_empty());
        assert!(run("\n\n\n").is_empty());
    }
}
