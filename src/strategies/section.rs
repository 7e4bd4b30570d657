//! Section-header strategy
//!
//! Listicle-style documents ("5 Benefits of Meditation" followed by numbered
//! points, then "3 Benefits of Running", ...) would be sliced into low-value
//! fragments by the outline or paragraph strategies. This strategy keeps each
//! heading together with everything up to the next heading.

use crate::nlp::metadata::strip_metadata_paragraphs;
use crate::nlp::normalize::collapse_horizontal;
use crate::nlp::patterns::BENEFITS_HEADING;
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;

/// Splits on repeated "benefits of" headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionHeaderStrategy;

impl SegmentationStrategy for SectionHeaderStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SectionHeader
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let text = collapse_horizontal(text);
        let starts: Vec<usize> = BENEFITS_HEADING.find_iter(&text).map(|m| m.start()).collect();
        if starts.is_empty() || starts.len() < cfg.section_min_headings {
            return Vec::new();
        }

        let mut sections = Vec::with_capacity(starts.len() + 1);

        // Introductory prose before the first heading survives unless it is
        // only a title block.
        let preamble = strip_metadata_paragraphs(&text[..starts[0]], cfg);
        if exceeds(&preamble, cfg.section_min_len) {
            sections.push(preamble.trim().to_string());
        }

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            let span = strip_metadata_paragraphs(&text[start..end], cfg);
            if exceeds(&span, cfg.section_min_len) {
                sections.push(span.trim().to_string());
            }
        }

        sections
    }
}
