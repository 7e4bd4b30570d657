//! Strategy chain and extraction flow
//!
//! [`StrategyChain`] tries each segmentation strategy in priority order and
//! stops at the first one that yields candidates. [`HighlightExtractor`] wraps
//! the chain in the caller-level flow: reject blank input, classify the
//! format, segment, and hand back a reviewable [`CandidateSet`].

use crate::errors::{HighlightError, Result};
use crate::format::{DocumentFormat, FormatDetector};
use crate::nlp::normalize::{is_blank, normalize_line_endings};
use crate::pipeline::observer::{AttemptClock, ChainObserver, NoopObserver};
use crate::strategies::{
    HorizontalRuleStrategy, MarkerStrategy, OutlineStrategy, ParagraphStrategy,
    SectionHeaderStrategy, SegmentationStrategy, SentenceChunkStrategy, StrategyKind,
};
use crate::types::{CandidateSet, RawDocumentText, SegmenterConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for one strategy attempt (when the `tracing` feature
/// is enabled). When disabled, this expands to nothing.
macro_rules! trace_strategy {
    ($kind:expr) => {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::info_span!("segmentation_strategy", strategy = $kind.as_str()).entered();
    };
}

// ============================================================================
// StrategyChain
// ============================================================================

/// What the chain produced for one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainOutcome {
    /// The strategy that produced the highlights, `None` if nothing did
    pub strategy: Option<StrategyKind>,
    pub highlights: Vec<String>,
}

/// Ordered list of segmentation strategies with first-success semantics.
///
/// Outputs are never merged: once a strategy yields at least one candidate
/// the remaining strategies are not consulted.
pub struct StrategyChain {
    strategies: Vec<Box<dyn SegmentationStrategy>>,
}

impl Default for StrategyChain {
    /// The standard priority order: section headers, export markers,
    /// horizontal rules, outlines, paragraphs, then sentence chunks.
    fn default() -> Self {
        Self::empty()
            .with_strategy(SectionHeaderStrategy)
            .with_strategy(MarkerStrategy)
            .with_strategy(HorizontalRuleStrategy)
            .with_strategy(OutlineStrategy)
            .with_strategy(ParagraphStrategy)
            .with_strategy(SentenceChunkStrategy)
    }
}

impl fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyChain")
            .field("strategies", &self.kinds())
            .finish()
    }
}

impl StrategyChain {
    /// A chain with no strategies; it never produces anything.
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy at the lowest priority.
    pub fn with_strategy(mut self, strategy: impl SegmentationStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Strategy kinds in the order they are tried
    pub fn kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Segment `text`, returning only the highlights.
    pub fn run(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        self.run_with_observer(text, cfg, &mut NoopObserver).highlights
    }

    /// Segment `text`, reporting every attempt to `observer`.
    ///
    /// Line endings are normalized first. Blank input short-circuits before
    /// any strategy runs.
    pub fn run_with_observer(
        &self,
        text: &str,
        cfg: &SegmenterConfig,
        observer: &mut impl ChainObserver,
    ) -> ChainOutcome {
        if is_blank(text) {
            return ChainOutcome::default();
        }
        let text = normalize_line_endings(text);

        for strategy in &self.strategies {
            let kind = strategy.kind();
            trace_strategy!(kind);
            observer.on_attempt(kind);
            let clock = AttemptClock::start();
            let highlights = strategy.segment(&text, cfg);
            observer.on_result(kind, highlights.len(), clock.elapsed());

            if !highlights.is_empty() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    strategy = kind.as_str(),
                    count = highlights.len(),
                    "strategy produced highlights"
                );
                return ChainOutcome {
                    strategy: Some(kind),
                    highlights,
                };
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("no strategy produced highlights");

        ChainOutcome::default()
    }
}

// ============================================================================
// HighlightExtractor
// ============================================================================

/// A successfully segmented document, ready for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Diagnostic format classification
    pub format: Option<DocumentFormat>,
    /// The strategy that produced the candidates
    pub strategy: StrategyKind,
    pub candidates: CandidateSet,
}

impl Extraction {
    /// Human-readable format label, if the format was recognised
    pub fn format_label(&self) -> Option<String> {
        self.format.map(|f| f.label())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Caller-level entry point: config plus chain plus format detector.
#[derive(Debug)]
pub struct HighlightExtractor {
    config: SegmenterConfig,
    chain: StrategyChain,
    detector: FormatDetector,
}

impl Default for HighlightExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightExtractor {
    /// Create an extractor with the default config and strategy order
    pub fn new() -> Self {
        let config = SegmenterConfig::default();
        Self {
            detector: FormatDetector::from_config(&config),
            chain: StrategyChain::default(),
            config,
        }
    }

    /// Create an extractor with a custom config, validating it first
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            detector: FormatDetector::from_config(&config),
            chain: StrategyChain::default(),
            config,
        })
    }

    /// Replace the strategy chain
    pub fn with_chain(mut self, chain: StrategyChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn chain(&self) -> &StrategyChain {
        &self.chain
    }

    /// Run only the strategy chain over `text`.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.chain.run(text, &self.config)
    }

    /// Classify `text` without segmenting it.
    pub fn detect_format(&self, text: &str) -> Option<DocumentFormat> {
        self.detector.detect(text)
    }

    /// Segment a document into reviewable candidates.
    ///
    /// # Errors
    ///
    /// - [`HighlightError::EmptyInput`] when the document has no text
    /// - [`HighlightError::NoSegmentation`] when no strategy produced anything
    pub fn extract(&self, document: &RawDocumentText) -> Result<Extraction> {
        self.extract_with_observer(document, &mut NoopObserver)
    }

    /// [`extract`](Self::extract), reporting each strategy attempt to
    /// `observer`.
    pub fn extract_with_observer(
        &self,
        document: &RawDocumentText,
        observer: &mut impl ChainObserver,
    ) -> Result<Extraction> {
        if document.is_blank() {
            return Err(HighlightError::EmptyInput);
        }

        let format = self.detector.detect(document.as_str());
        let outcome = self
            .chain
            .run_with_observer(document.as_str(), &self.config, observer);

        match outcome.strategy {
            Some(strategy) if !outcome.highlights.is_empty() => Ok(Extraction {
                format,
                strategy,
                candidates: CandidateSet::from_texts(outcome.highlights),
            }),
            _ => Err(HighlightError::NoSegmentation),
        }
    }

    /// Convenience wrapper around [`extract`](Self::extract) for plain text.
    pub fn extract_str(&self, text: &str) -> Result<Extraction> {
        self.extract(&RawDocumentText::new(text))
    }

    /// Extract many independent documents in parallel.
    ///
    /// Results are returned in input order; one document failing does not
    /// affect the others.
    pub fn extract_batch(&self, documents: &[RawDocumentText]) -> Vec<Result<Extraction>> {
        documents.par_iter().map(|doc| self.extract(doc)).collect()
    }
}
