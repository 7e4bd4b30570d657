//! Sentence boundary detection and repair
//!
//! Boundaries are placed after terminal punctuation (`.`, `!`, `?`) that is
//! followed by whitespace and an uppercase letter. Page-joined extractions
//! routinely break sentences in odd places, so [`repair_fragments`] glues
//! lowercase-initial fragments back onto the sentence they belong to.

/// Split `text` on sentence boundaries, returning trimmed, non-empty pieces.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (end, next_start) in sentence_boundaries(text) {
        push_trimmed(&text[start..end], &mut sentences);
        start = next_start;
    }
    push_trimmed(&text[start..], &mut sentences);

    sentences
}

/// Find `(end_of_sentence, start_of_next)` byte offsets.
fn sentence_boundaries(text: &str) -> Vec<(usize, usize)> {
    let mut boundaries = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = idx + c.len_utf8();

        let mut saw_space = false;
        while let Some(&(_, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            saw_space = true;
            chars.next();
        }

        if let Some(&(next_idx, next)) = chars.peek() {
            if saw_space && next.is_uppercase() {
                boundaries.push((end, next_idx));
            }
        }
    }

    boundaries
}

fn push_trimmed<'a>(segment: &'a str, out: &mut Vec<&'a str>) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Merge fragments that start lowercase into the preceding accumulator while
/// the accumulator has not reached terminal punctuation.
pub fn repair_fragments(fragments: &[&str]) -> Vec<String> {
    let mut repaired = Vec::new();
    let mut current = String::new();

    for fragment in fragments {
        let starts_lower = fragment.chars().next().is_some_and(|c| c.is_lowercase());
        if starts_lower && !current.is_empty() && !ends_with_terminal(&current) {
            current.push(' ');
            current.push_str(fragment);
            continue;
        }
        if !current.is_empty() {
            repaired.push(std::mem::take(&mut current).trim().to_string());
        }
        current.push_str(fragment);
    }

    if !current.trim().is_empty() {
        repaired.push(current.trim().to_string());
    }

    repaired
}

/// Check whether text ends with `.`, `!` or `?`.
pub fn ends_with_terminal(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?'])
}
