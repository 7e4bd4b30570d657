//! Document format detection
//!
//! Runs an ordered battery of independent pattern tests and reports the first
//! one that matches. The result is a diagnostic label shown to the user; it
//! never decides which segmentation strategy runs, so a document may be
//! labelled one way and split by a different strategy.

use crate::nlp::normalize::{is_blank, normalize_line_endings};
use crate::nlp::patterns::{
    BENEFITS_HEADING, BULLET_LINE, HIGHLIGHT_COUNT_HEADER, KINDLE_LOCATION_MARKER,
    KINDLE_PAGE_MARKER, NUMBERED_TOP_LEVEL,
};
use crate::types::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inferred layout of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Repeated "N benefits of X" section headings
    BenefitsSections,
    /// Top-level `N. ` outline
    NumberedSections,
    /// Kindle export with `Highlight (color) | Page N` markers
    KindlePage,
    /// Kindle export with `Highlight (color) | Location N` markers
    KindleLocation,
    /// Export with an `N Highlights | color (N)` header
    HighlightCount(usize),
    /// Lines led by bullets or numbers
    BulletPoints,
    /// Nothing more specific matched
    General,
}

impl DocumentFormat {
    /// Human-readable label
    pub fn label(&self) -> String {
        match self {
            DocumentFormat::BenefitsSections => {
                "Structured Document with Benefits Sections".to_string()
            }
            DocumentFormat::NumberedSections => {
                "Structured Document with Numbered Sections".to_string()
            }
            DocumentFormat::KindlePage => "Kindle Notes (Page Format)".to_string(),
            DocumentFormat::KindleLocation => "Kindle Notes (Location Format)".to_string(),
            DocumentFormat::HighlightCount(n) => format!("{} Highlights Document", n),
            DocumentFormat::BulletPoints => "Bullet Point Format".to_string(),
            DocumentFormat::General => "General Text Format".to_string(),
        }
    }

    /// Check if this is one of the e-reader export layouts
    pub fn is_export(&self) -> bool {
        matches!(
            self,
            DocumentFormat::KindlePage
                | DocumentFormat::KindleLocation
                | DocumentFormat::HighlightCount(_)
        )
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ordered format classifier.
#[derive(Debug, Clone, Copy)]
pub struct FormatDetector {
    /// Heading matches needed for [`DocumentFormat::BenefitsSections`]
    min_headings: usize,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a detector with the default heading threshold
    pub fn new() -> Self {
        Self { min_headings: 2 }
    }

    /// Create a detector that agrees with the section-header strategy's
    /// heading threshold
    pub fn from_config(cfg: &SegmenterConfig) -> Self {
        Self::new().with_min_headings(cfg.section_min_headings)
    }

    /// Set how many "benefits of" headings make a sectioned document
    pub fn with_min_headings(mut self, min_headings: usize) -> Self {
        self.min_headings = min_headings.max(1);
        self
    }

    /// Classify `text`. Returns `None` for blank input.
    pub fn detect(&self, text: &str) -> Option<DocumentFormat> {
        if is_blank(text) {
            return None;
        }
        let text = normalize_line_endings(text);
        let min_headings = self.min_headings.max(1);

        let format = if BENEFITS_HEADING.find_iter(&text).count() >= min_headings {
            DocumentFormat::BenefitsSections
        } else if NUMBERED_TOP_LEVEL.is_match(&text) {
            DocumentFormat::NumberedSections
        } else if KINDLE_PAGE_MARKER.is_match(&text) {
            DocumentFormat::KindlePage
        } else if KINDLE_LOCATION_MARKER.is_match(&text) {
            DocumentFormat::KindleLocation
        } else if let Some(count) = highlight_count(&text) {
            DocumentFormat::HighlightCount(count)
        } else if BULLET_LINE.is_match(&text) {
            DocumentFormat::BulletPoints
        } else {
            DocumentFormat::General
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(format = %format, "detected document format");

        Some(format)
    }
}

/// Read the declared highlight count from an `N Highlights | color (N)` header.
///
/// A count too large for `usize` saturates, so a matching header is never
/// ignored.
pub fn highlight_count(text: &str) -> Option<usize> {
    let digits = HIGHLIGHT_COUNT_HEADER.captures(text)?.get(1)?.as_str();
    Some(digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    }))
}

/// Classify `text` with the default detector.
pub fn detect_format(text: &str) -> Option<DocumentFormat> {
    FormatDetector::new().detect(text)
}
