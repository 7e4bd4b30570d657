//! Sentence-chunk strategy
//!
//! The terminal fallback. The document is flattened to one line, split into
//! sentences, repaired, and regrouped into fixed-size chunks. It must produce
//! something for any non-trivial input, so when every chunk is rejected the
//! whole flattened text becomes the single candidate.

use crate::nlp::normalize::flatten;
use crate::nlp::patterns::EMBEDDED_SENTENCE;
use crate::nlp::sentences::{repair_fragments, split_sentences};
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;

/// Groups sentences into chunks of `sentences_per_chunk`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceChunkStrategy;

impl SegmentationStrategy for SentenceChunkStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SentenceChunk
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let flat = flatten(text);
        if flat.is_empty() {
            return Vec::new();
        }

        let sentences = repair_fragments(&split_sentences(&flat));
        let per_chunk = cfg.sentences_per_chunk.max(1);

        let mut chunks: Vec<String> = sentences
            .chunks(per_chunk)
            .map(|group| group.join(" "))
            .filter_map(|chunk| tidy_chunk(chunk, cfg.sentence_min_len))
            .collect();

        if chunks.is_empty() && exceeds(&flat, cfg.sentence_min_len) {
            chunks.push(flat);
        }

        chunks
    }
}

/// Keep a chunk that starts with an uppercase letter. A chunk that starts
/// mid-sentence is trimmed to its first embedded sentence when that sentence
/// is long enough on its own, and kept as-is otherwise.
fn tidy_chunk(chunk: String, floor: usize) -> Option<String> {
    let chunk = chunk.trim();
    if !exceeds(chunk, floor) {
        return None;
    }

    let starts_upper = chunk.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        if let Some(found) = EMBEDDED_SENTENCE.find(chunk) {
            let sentence = found.as_str().trim();
            if exceeds(sentence, floor) {
                return Some(sentence.to_string());
            }
        }
    }

    Some(chunk.to_string())
}
