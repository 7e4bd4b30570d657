//! Hierarchical-outline strategy
//!
//! Structured notes are often numbered outlines whose points carry lettered,
//! roman-numeral, or bulleted sub-points:
//!
//! ```text
//! Habit Laws
//! 1. Make it obvious
//!    a. Use implementation intentions
//!    b. Stack habits
//! 2. Make it attractive
//! ```
//!
//! Every top-level point travels with its sub-points as one candidate. A short
//! heading directly above the first point is prefixed onto it.
//!
//! Top-level points are recognised by indentation and numbering: they sit at
//! the outline's base indentation and count up by one. A `1.` at or left of
//! the base indentation restarts a new outline; any other number that breaks
//! the sequence is ordinary text.

use crate::nlp::metadata::is_metadata;
use crate::nlp::normalize::{collapse_horizontal, text_len};
use crate::nlp::patterns::{OUTLINE_ITEM, OUTLINE_SUB_ITEM};
use crate::strategies::{exceeds, SegmentationStrategy, StrategyKind};
use crate::types::SegmenterConfig;

/// Groups numbered outline points with their sub-points.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineStrategy;

/// A run of lines that becomes (at most) one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block<'a> {
    /// A top-level point; `indent` is its indentation width
    Item { indent: usize, lines: Vec<&'a str> },
    /// A prose paragraph outside any point
    Prose(Vec<&'a str>),
}

/// Which lines open a top-level point, plus the longest consecutive run.
struct ItemStarts {
    starts: Vec<bool>,
    longest_run: usize,
}

impl SegmentationStrategy for OutlineStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HierarchicalOutline
    }

    fn segment(&self, text: &str, cfg: &SegmenterConfig) -> Vec<String> {
        let text = collapse_horizontal(text);
        let lines: Vec<&str> = text.split('\n').collect();

        let item_starts = find_item_starts(&lines);
        if item_starts.longest_run < cfg.outline_min_items {
            return Vec::new();
        }

        let blocks = group_blocks(&lines, &item_starts.starts);

        let outline_len: usize = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Item { lines, .. } => Some(text_len(&lines.join("\n"))),
                Block::Prose(_) => None,
            })
            .sum();
        if outline_len <= cfg.outline_min_len {
            return Vec::new();
        }

        emit(blocks, cfg)
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn find_item_starts(lines: &[&str]) -> ItemStarts {
    let mut starts = vec![false; lines.len()];
    // (base indentation, next expected number)
    let mut outline: Option<(usize, u64)> = None;
    let mut run = 0;
    let mut longest_run = 0;

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = OUTLINE_ITEM.captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        let Ok(number) = caps[2].parse::<u64>() else {
            continue;
        };

        let opens = match outline {
            Some((base, expected)) if indent <= base => {
                if number == expected {
                    outline = Some((base, expected + 1));
                    run += 1;
                    true
                } else if number == 1 {
                    outline = Some((indent, 2));
                    run = 1;
                    true
                } else {
                    false
                }
            }
            // Deeper than the base: a nested numbered sub-point.
            Some(_) => false,
            None if number == 1 => {
                outline = Some((indent, 2));
                run = 1;
                true
            }
            None => false,
        };

        if opens {
            starts[i] = true;
            longest_run = longest_run.max(run);
        }
    }

    ItemStarts {
        starts,
        longest_run,
    }
}

fn group_blocks<'a>(lines: &[&'a str], starts: &[bool]) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'a>> = None;
    let mut after_blank = false;

    for (line, &opens_item) in lines.iter().zip(starts) {
        if line.trim().is_empty() {
            after_blank = true;
            continue;
        }

        if opens_item {
            blocks.extend(current.take());
            current = Some(Block::Item {
                indent: indent_width(line),
                lines: vec![line.trim()],
            });
            after_blank = false;
            continue;
        }

        match current.as_mut() {
            Some(Block::Item { indent, lines }) => {
                let nested = indent_width(line) > *indent
                    || OUTLINE_SUB_ITEM.is_match(line)
                    || OUTLINE_ITEM.is_match(line);
                if nested || !after_blank {
                    lines.push(line.trim_end());
                } else {
                    blocks.extend(current.take());
                    current = Some(Block::Prose(vec![line.trim()]));
                }
            }
            Some(Block::Prose(lines)) if !after_blank => lines.push(line.trim()),
            _ => {
                blocks.extend(current.take());
                current = Some(Block::Prose(vec![line.trim()]));
            }
        }
        after_blank = false;
    }
    blocks.extend(current);

    blocks
}

fn emit(blocks: Vec<Block<'_>>, cfg: &SegmenterConfig) -> Vec<String> {
    let first_item = blocks
        .iter()
        .position(|b| matches!(b, Block::Item { .. }));

    // A one-line, non-metadata paragraph right above the first point is the
    // outline's heading.
    let heading_idx = first_item.and_then(|idx| {
        let prev = idx.checked_sub(1)?;
        match &blocks[prev] {
            Block::Prose(lines)
                if lines.len() == 1
                    && text_len(lines[0]) < cfg.outline_heading_max_len
                    && !is_metadata(lines[0], cfg) =>
            {
                Some(prev)
            }
            _ => None,
        }
    });

    let mut candidates = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        if Some(i) == heading_idx {
            continue;
        }
        match block {
            Block::Item { lines, .. } => {
                let mut item = lines.join("\n").trim().to_string();
                if Some(i) == first_item {
                    if let Some(Block::Prose(heading)) = heading_idx.map(|h| &blocks[h]) {
                        item = format!("{}\n{}", heading[0], item);
                    }
                }
                if !item.is_empty() {
                    candidates.push(item);
                }
            }
            Block::Prose(lines) => {
                let paragraph = lines.join("\n");
                if !is_metadata(&paragraph, cfg) && exceeds(&paragraph, cfg.outline_min_len) {
                    candidates.push(paragraph);
                }
            }
        }
    }

    candidates
}
