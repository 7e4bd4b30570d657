//! Segmentation strategies
//!
//! Each strategy is a pure function from document text to an ordered list of
//! trimmed passages. A strategy that does not recognise the document's layout
//! returns an empty list; the [`StrategyChain`](crate::pipeline::StrategyChain)
//! then moves on to the next one.
//!
//! - [`section::SectionHeaderStrategy`]: "N benefits of X" listicles
//! - [`marker::MarkerStrategy`]: e-reader export markers
//! - [`rule::HorizontalRuleStrategy`]: passages separated by `---` lines
//! - [`outline::OutlineStrategy`]: numbered outlines with nested sub-points
//! - [`paragraph::ParagraphStrategy`]: blank-line-delimited prose
//! - [`sentence::SentenceChunkStrategy`]: terminal fallback over sentences

pub mod marker;
pub mod outline;
pub mod paragraph;
pub mod rule;
pub mod section;
pub mod sentence;

use crate::nlp::normalize::text_len;
use crate::types::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a strategy in chain results and observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    SectionHeader,
    MarkerDelimited,
    HorizontalRule,
    HierarchicalOutline,
    Paragraph,
    SentenceChunk,
}

impl StrategyKind {
    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::SectionHeader => "section_header",
            StrategyKind::MarkerDelimited => "marker_delimited",
            StrategyKind::HorizontalRule => "horizontal_rule",
            StrategyKind::HierarchicalOutline => "hierarchical_outline",
            StrategyKind::Paragraph => "paragraph",
            StrategyKind::SentenceChunk => "sentence_chunk",
        }
    }

    /// The exclusive length floor this strategy applies to its candidates.
    ///
    /// The marker strategy measures an entry including its marker; the outline
    /// strategy measures the outline as a whole and prose emitted next to it.
    pub fn min_len(&self, cfg: &SegmenterConfig) -> usize {
        match self {
            StrategyKind::SectionHeader => cfg.section_min_len,
            StrategyKind::MarkerDelimited => cfg.marker_min_len,
            StrategyKind::HorizontalRule => cfg.rule_min_len,
            StrategyKind::HierarchicalOutline => cfg.outline_min_len,
            StrategyKind::Paragraph => cfg.paragraph_min_len,
            StrategyKind::SentenceChunk => cfg.sentence_min_len,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segmentation strategy.
///
/// # Contract
///
/// - **Input**: document text with LF line endings. Each strategy chooses
///   whether to work on the line-preserving or the flattened form.
/// - **Output**: trimmed, non-empty passages in document order, or an empty
///   list when the strategy does not apply.
/// - **Pure**: same input and config → same output; no shared state.
pub trait SegmentationStrategy: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Split `text` into passages.
    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String>;
}

/// Check whether trimmed `text` is strictly longer than `floor`.
pub(crate) fn exceeds(text: &str, floor: usize) -> bool {
    text_len(text.trim()) > floor
}

pub use marker::MarkerStrategy;
pub use outline::OutlineStrategy;
pub use paragraph::ParagraphStrategy;
pub use rule::HorizontalRuleStrategy;
pub use section::SectionHeaderStrategy;
pub use sentence::SentenceChunkStrategy;
