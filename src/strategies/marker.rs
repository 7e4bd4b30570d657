//! Marker-delimited strategy for e-reader exports
//!
//! Kindle exports interleave a marker line (`Highlight (Yellow) | Page 30`)
//! with each highlighted passage. The passage is the text between one marker
//! and the next; the marker itself is dropped. Notebook exports instead open
//! with a `73 Highlights | Yellow (73)` header, and everything before it is
//! the title block.

use crate::nlp::metadata::is_leading_metadata;
use crate::nlp::normalize::{collapse_horizontal, paragraphs};
use crate::nlp::patterns::{
    HIGHLIGHT_COUNT_HEADER, KINDLE_LOCATION_MARKER, KINDLE_PAGE_MARKER, NOTEBOOK_ENTRY_MARKER,
};
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;
use regex::Regex;

/// Which export marker a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerVariant {
    /// `Highlight (color) | Page N`
    Page,
    /// `Highlight (color) | Location N`
    Location,
    /// `N Highlights | color (N)` header followed by notebook entry lines
    /// (`Yellow highlight | Page: 5`) or blank-line-separated passages
    CountHeader,
}

impl MarkerVariant {
    /// Pick the variant for `text`, page markers first.
    pub fn detect(text: &str) -> Option<Self> {
        if KINDLE_PAGE_MARKER.is_match(text) {
            Some(MarkerVariant::Page)
        } else if KINDLE_LOCATION_MARKER.is_match(text) {
            Some(MarkerVariant::Location)
        } else if HIGHLIGHT_COUNT_HEADER.is_match(text) {
            Some(MarkerVariant::CountHeader)
        } else {
            None
        }
    }
}

/// Splits e-reader exports on their highlight markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerStrategy;

impl SegmentationStrategy for MarkerStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MarkerDelimited
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let text = collapse_horizontal(text);
        match MarkerVariant::detect(&text) {
            Some(MarkerVariant::Page) => split_on_markers(&text, &KINDLE_PAGE_MARKER, true, cfg),
            Some(MarkerVariant::Location) => {
                split_on_markers(&text, &KINDLE_LOCATION_MARKER, true, cfg)
            }
            Some(MarkerVariant::CountHeader) => split_after_count_header(&text, cfg),
            None => Vec::new(),
        }
    }
}

/// Emit the body between each marker and the next. The text before the first
/// marker is a candidate only when `keep_preamble` is set and it is not a
/// title block.
fn split_on_markers(
    text: &str,
    pattern: &Regex,
    keep_preamble: bool,
    cfg: &SegmenterConfig,
) -> Vec<String> {
    let markers: Vec<regex::Match<'_>> = pattern.find_iter(text).collect();
    let Some(first) = markers.first() else {
        return Vec::new();
    };

    let mut highlights = Vec::with_capacity(markers.len() + 1);

    let preamble = text[..first.start()].trim();
    if keep_preamble
        && !preamble.is_empty()
        && !is_leading_metadata(preamble, cfg)
        && exceeds(preamble, cfg.marker_min_len)
    {
        highlights.push(preamble.to_string());
    }

    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
        let entry = text[marker.start()..end].trim();
        let body = text[marker.end()..end].trim();
        if exceeds(body, cfg.marker_body_min_len) && exceeds(entry, cfg.marker_min_len) {
            highlights.push(body.to_string());
        }
    }

    highlights
}

/// Everything up to and including the count header is the title block. The
/// entries after it are delimited by notebook entry lines when present, and by
/// blank lines otherwise.
fn split_after_count_header(text: &str, cfg: &SegmenterConfig) -> Vec<String> {
    let Some(header) = HIGHLIGHT_COUNT_HEADER.find(text) else {
        return Vec::new();
    };
    let entries = &text[header.end()..];

    if NOTEBOOK_ENTRY_MARKER.is_match(entries) {
        return split_on_markers(entries, &NOTEBOOK_ENTRY_MARKER, false, cfg);
    }

    paragraphs(entries)
        .into_iter()
        .filter(|p| exceeds(p, cfg.marker_body_min_len) && exceeds(p, cfg.marker_min_len))
        .map(str::to_string)
        .collect()
}
