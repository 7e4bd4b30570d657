//! # highlight_segmenter
//!
//! Splits the plain text of an uploaded document (e-reader exports, personal
//! notes, articles) into individual highlight candidates for review.
//!
//! Segmentation tries a fixed sequence of layout strategies and keeps the
//! output of the first one that recognises the document:
//!
//! 1. "N benefits of X" section headings
//! 2. e-reader export markers (`Highlight (Yellow) | Page 10`)
//! 3. horizontal rules
//! 4. numbered outlines with nested sub-points
//! 5. blank-line paragraphs
//! 6. three-sentence chunks as the terminal fallback
//!
//! A separate classifier labels the document's format for display.
//!
//! ```
//! let highlights = highlight_segmenter::extract_highlights(
//!     "Highlight (Yellow) | Page 10\nQuote A.\n\nHighlight (Yellow) | Page 12\nQuote B.",
//! );
//! assert_eq!(highlights, vec!["Quote A.", "Quote B."]);
//! ```

pub mod errors;
pub mod format;
pub mod nlp;
pub mod pipeline;
pub mod strategies;
pub mod types;

// Re-export commonly used types
pub use errors::{HighlightError, Result};
pub use format::{DocumentFormat, FormatDetector};
pub use pipeline::{
    AttemptLog, ChainObserver, ChainOutcome, Extraction, HighlightExtractor, NoopObserver,
    StrategyChain,
};
pub use strategies::{SegmentationStrategy, StrategyKind};
pub use types::{
    Attribution, CandidateSet, HighlightCandidate, HighlightDraft, PageText, RawDocumentText,
    SegmenterConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Split `text` into highlight candidates with the default configuration.
///
/// Returns an empty list for blank input or when no strategy finds anything.
pub fn extract_highlights(text: &str) -> Vec<String> {
    StrategyChain::default().run(text, &SegmenterConfig::default())
}

/// Classify `text` for display. Returns `None` for blank input.
pub fn detect_format(text: &str) -> Option<DocumentFormat> {
    format::detect_format(text)
}
