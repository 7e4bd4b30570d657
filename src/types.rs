//! Core types for highlight_segmenter
//!
//! This module defines the values that cross the crate boundary: extracted
//! page text coming in, highlight candidates and drafts going out, and the
//! configuration that carries every segmentation threshold.

use crate::errors::{HighlightError, Result};
use crate::nlp::normalize::{is_blank, text_len};
use crate::nlp::patterns::STRUCTURE_MARKER;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Document input
// ============================================================================

/// Separator placed between consecutive pages of extracted text.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Text extracted from one page of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number
    pub page_number: usize,
    /// The page's extracted text
    pub text: String,
}

impl PageText {
    /// Create a new page
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// The concatenated text of a document, pages joined by a blank line in page
/// order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocumentText(String);

impl RawDocumentText {
    /// Wrap already-concatenated text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Join pages in page order, regardless of the order they were supplied in.
    pub fn from_pages(pages: impl IntoIterator<Item = PageText>) -> Self {
        let mut pages: Vec<PageText> = pages.into_iter().collect();
        pages.sort_by_key(|p| p.page_number);
        let joined = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);
        Self(joined)
    }

    /// Build from the upstream extractor's outcome, mapping its failure
    /// (corrupt, encrypted, unreadable source) to
    /// [`HighlightError::UpstreamExtraction`].
    pub fn from_extraction_result<E: std::fmt::Display>(
        result: std::result::Result<Vec<PageText>, E>,
    ) -> Result<Self> {
        result
            .map(Self::from_pages)
            .map_err(|err| HighlightError::upstream(err.to_string()))
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the document has no content
    pub fn is_blank(&self) -> bool {
        is_blank(&self.0)
    }
}

impl AsRef<str> for RawDocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Candidates
// ============================================================================

/// A provisionally extracted passage awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightCandidate {
    /// The passage text
    pub text: String,
    /// Whether the passage will be saved on confirmation
    pub selected: bool,
}

impl HighlightCandidate {
    /// Create a selected candidate
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: true,
        }
    }

    /// Check whether the text is a multi-line outline or list that should be
    /// displayed with its line breaks intact.
    pub fn has_structure(&self) -> bool {
        self.text.contains('\n') && STRUCTURE_MARKER.is_match(&self.text)
    }

    /// Text for the review list: structured text verbatim, otherwise truncated
    /// to `max_len` characters with a trailing ellipsis.
    pub fn preview(&self, max_len: usize) -> String {
        if self.has_structure() || text_len(&self.text) <= max_len {
            return self.text.clone();
        }
        let mut truncated: String = self.text.graphemes(true).take(max_len).collect();
        truncated.push_str("...");
        truncated
    }

    /// [`preview`](Self::preview) at the configured review-list length.
    pub fn preview_with(&self, cfg: &SegmenterConfig) -> String {
        self.preview(cfg.preview_len)
    }
}

/// Ordered, index-addressed candidates produced by one extraction.
///
/// Identity is positional. No deduplication or re-validation is performed;
/// the producing strategy's thresholds are trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    candidates: Vec<HighlightCandidate>,
}

impl CandidateSet {
    /// Wrap strategy output 1:1, every candidate selected
    pub fn from_texts(texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            candidates: texts.into_iter().map(HighlightCandidate::new).collect(),
        }
    }

    /// Flip the selection of the candidate at `index`
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let len = self.candidates.len();
        let candidate = self
            .candidates
            .get_mut(index)
            .ok_or_else(|| HighlightError::index_out_of_range(index, len))?;
        candidate.selected = !candidate.selected;
        Ok(())
    }

    /// Replace the text of the candidate at `index`
    pub fn update_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.candidates.len();
        let candidate = self
            .candidates
            .get_mut(index)
            .ok_or_else(|| HighlightError::index_out_of_range(index, len))?;
        candidate.text = text.into();
        Ok(())
    }

    /// Get the candidate at `index`
    pub fn get(&self, index: usize) -> Option<&HighlightCandidate> {
        self.candidates.get(index)
    }

    /// Iterate over all candidates in order
    pub fn iter(&self) -> std::slice::Iter<'_, HighlightCandidate> {
        self.candidates.iter()
    }

    /// Iterate over the selected candidates in order
    pub fn iter_selected(&self) -> impl Iterator<Item = &HighlightCandidate> {
        self.candidates.iter().filter(|c| c.selected)
    }

    /// Number of selected candidates
    pub fn selected_count(&self) -> usize {
        self.iter_selected().count()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if there are no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Drop every candidate (review cancelled)
    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    /// Turn the selected candidates into drafts for persistence, attaching the
    /// batch's attribution to each.
    pub fn confirm(&self, attribution: &Attribution) -> Result<Vec<HighlightDraft>> {
        attribution.validate()?;
        let drafts: Vec<HighlightDraft> = self
            .iter_selected()
            .map(|c| HighlightDraft {
                text: c.text.clone(),
                author: attribution.author.clone(),
                source: attribution.source.clone(),
                category: attribution.category.clone(),
                favorite: false,
            })
            .collect();

        if drafts.is_empty() {
            return Err(HighlightError::NothingSelected);
        }
        Ok(drafts)
    }

    /// Borrow the candidates as a slice
    pub fn as_slice(&self) -> &[HighlightCandidate] {
        &self.candidates
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a HighlightCandidate;
    type IntoIter = std::slice::Iter<'a, HighlightCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

// ============================================================================
// Attribution & drafts
// ============================================================================

/// Category assigned when the user does not pick one.
pub const DEFAULT_CATEGORY: &str = "Book";

/// Author/source/category entered once per upload batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub author: String,
    pub source: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Attribution {
    /// Create an attribution with the default category
    pub fn new(author: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            source: source.into(),
            category: default_category(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Author and source are required
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.author) {
            return Err(HighlightError::missing_attribution("author name"));
        }
        if is_blank(&self.source) {
            return Err(HighlightError::missing_attribution("source"));
        }
        Ok(())
    }
}

/// A confirmed highlight ready for the persistence collaborator, which assigns
/// its identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightDraft {
    pub text: String,
    pub author: String,
    pub source: String,
    pub category: String,
    pub favorite: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Thresholds used by the format detector and the strategy chain.
///
/// Every length is measured in user-perceived characters. Floors are
/// exclusive: a segment is kept when its trimmed length is strictly greater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Floor for section-header spans
    pub section_min_len: usize,
    /// Floor for a marker-delimited entry (marker plus body). The shortest
    /// Kindle marker is already over 20 characters, so this only rejects
    /// entries when raised above that; use `marker_body_min_len` to filter
    /// short bodies.
    pub marker_min_len: usize,
    /// Floor for the body of a marker-delimited entry, marker excluded.
    /// Zero keeps every non-empty body.
    pub marker_body_min_len: usize,
    /// Floor for rule-delimited segments
    pub rule_min_len: usize,
    /// Floor for prose paragraphs emitted next to an outline, and for the
    /// outline as a whole
    pub outline_min_len: usize,
    /// Floor for paragraphs
    pub paragraph_min_len: usize,
    /// Floor for sentence chunks
    pub sentence_min_len: usize,
    /// Sentences grouped into one fallback chunk
    pub sentences_per_chunk: usize,
    /// Capitalized-words-only segments shorter than this are metadata
    pub metadata_max_len: usize,
    /// Text before the first delimiter shorter than this is a title block
    pub leading_metadata_max_len: usize,
    /// Longest line that may be prefixed onto an outline as its heading
    pub outline_heading_max_len: usize,
    /// Minimum top-level items before a numbered sequence counts as an outline
    pub outline_min_items: usize,
    /// Heading matches needed before the section-header strategy applies
    pub section_min_headings: usize,
    /// Preview length in the review list
    pub preview_len: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            section_min_len: 15,
            marker_min_len: 15,
            marker_body_min_len: 0,
            rule_min_len: 20,
            outline_min_len: 15,
            paragraph_min_len: 15,
            sentence_min_len: 15,
            sentences_per_chunk: 3,
            metadata_max_len: 40,
            leading_metadata_max_len: 100,
            outline_heading_max_len: 100,
            outline_min_items: 2,
            section_min_headings: 2,
            preview_len: 150,
        }
    }
}

impl SegmenterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sentences_per_chunk == 0 {
            return Err(HighlightError::invalid_config(
                "sentences_per_chunk must be > 0",
            ));
        }

        if self.outline_min_items < 2 {
            return Err(HighlightError::invalid_config(
                "outline_min_items must be >= 2",
            ));
        }

        if self.section_min_headings == 0 {
            return Err(HighlightError::invalid_config(
                "section_min_headings must be > 0",
            ));
        }

        if self.preview_len == 0 {
            return Err(HighlightError::invalid_config("preview_len must be > 0"));
        }

        Ok(())
    }

    /// Set the sentences per fallback chunk
    pub fn with_sentences_per_chunk(mut self, n: usize) -> Self {
        self.sentences_per_chunk = n;
        self
    }

    /// Set the floor for marker-delimited entry bodies
    pub fn with_marker_body_min_len(mut self, len: usize) -> Self {
        self.marker_body_min_len = len;
        self
    }

    /// Set the paragraph floor
    pub fn with_paragraph_min_len(mut self, len: usize) -> Self {
        self.paragraph_min_len = len;
        self
    }

    /// Set the rule-segment floor
    pub fn with_rule_min_len(mut self, len: usize) -> Self {
        self.rule_min_len = len;
        self
    }

    /// Set the sentence-chunk floor
    pub fn with_sentence_min_len(mut self, len: usize) -> Self {
        self.sentence_min_len = len;
        self
    }

    /// Set the metadata length limit
    pub fn with_metadata_max_len(mut self, len: usize) -> Self {
        self.metadata_max_len = len;
        self
    }

    /// Set the preview length
    pub fn with_preview_len(mut self, len: usize) -> Self {
        self.preview_len = len;
        self
    }
}
