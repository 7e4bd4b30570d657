//! Horizontal-rule strategy
//!
//! Many hand-made notes separate passages with a line of dashes, underscores,
//! or equals signs. Rule-delimited passages tend to be fuller than export
//! entries, so the floor is stricter than the marker strategy's.

use crate::nlp::metadata::is_leading_metadata;
use crate::nlp::normalize::collapse_horizontal;
use crate::nlp::patterns::HORIZONTAL_RULE;
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;

/// Splits on lines made of one repeated rule character.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalRuleStrategy;

impl SegmentationStrategy for HorizontalRuleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HorizontalRule
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let text = collapse_horizontal(text);
        if !HORIZONTAL_RULE.is_match(&text) {
            return Vec::new();
        }

        let mut segments = HORIZONTAL_RULE.split(&text).map(str::trim);
        let mut passages = Vec::new();

        if let Some(first) = segments.next() {
            if !first.is_empty()
                && !is_leading_metadata(first, cfg)
                && exceeds(first, cfg.rule_min_len)
            {
                passages.push(first.to_string());
            }
        }

        passages.extend(
            segments
                .filter(|s| exceeds(s, cfg.rule_min_len))
                .map(str::to_string),
        );

        passages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<String> {
        HorizontalRuleStrategy.segment(text, &SegmenterConfig::default())
    }

    #[test]
    fn test_splits_on_rules() {
        let text = "My Reading Notes\n---\nThe first passage is long enough to keep.\n\
                    ---\nThe second passage is also long enough.\n___\nshort one\n";
        assert_eq!(
            run(text),
            vec![
                "The first passage is long enough to keep.",
                "The second passage is also long enough."
            ]
        );
    }

    #[test]
    fn test_stricter_floor() {
        // 18 characters: enough for the marker floor, not for the rule floor
        let text = "====\nEighteen chars ok.\n====\nThis one is comfortably over twenty.";
        assert_eq!(run(text), vec!["This one is comfortably over twenty."]);
    }

    #[test]
    fn test_unicode_dashes() {
        let text = "———\nAn em-dash rule separates these passages.\n–––\nAnd en-dashes work the same way too.";
        assert_eq!(run(text).len(), 2);
    }

    #[test]
    fn test_inline_dashes_ignored() {
        assert!(run("Wait --- what happened next was not a rule at all.").is_empty());
    }
}
