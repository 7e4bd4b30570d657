//! Compiled patterns shared by the format detector and the strategies.
//!
//! Each pattern is compiled once on first use and read from everywhere else.

use regex::Regex;
use std::sync::LazyLock;

/// "5 Benefits of Meditation", "Three benefits of sleep" at the start of a line.
pub static BENEFITS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:\d+[.)]?|[a-z]+)[ \t]+benefits[ \t]+of[ \t]+\w+")
        .expect("regex is compile-time constant")
});

/// An unindented `N. ` line.
pub static NUMBERED_TOP_LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\d+\.[ \t]+\S").expect("regex is compile-time constant")
});

/// Kindle export marker, page variant: `Highlight (Yellow) | Page 30`.
pub static KINDLE_PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Highlight\s+\(\w+\)\s*\|\s*Page\s+\d+")
        .expect("regex is compile-time constant")
});

/// Kindle export marker, location variant: `Highlight (Blue) | Location 1234`.
pub static KINDLE_LOCATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Highlight\s+\(\w+\)\s*\|\s*Location\s+\d+")
        .expect("regex is compile-time constant")
});

/// Aggregate header: `73 Highlights | Yellow (73)`. Group 1 is the count,
/// ASCII digits only.
pub static HIGHLIGHT_COUNT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s+Highlights?\s+\|\s+\w+\s+\(\d+\)")
        .expect("regex is compile-time constant")
});

/// Per-entry line in a notebook export that carries a count header:
/// `Yellow highlight | Page: 5`, `Note | Location: 1402`. Matches the whole line.
pub static NOTEBOOK_ENTRY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:\w+[ \t]+highlight|highlight|note|bookmark)[ \t]*\|[ \t]*(?:page|location):?[ \t]*[\d,]+[^\n]*$",
    )
    .expect("regex is compile-time constant")
});

/// A bullet or numbered marker at the start of a line.
pub static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:•|\*|-|\d+\.)[ \t]+").expect("regex is compile-time constant")
});

/// A line made only of one repeated rule character.
pub static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:-{3,}|_{3,}|={3,}|–{3,}|—{3,})[ \t]*$")
        .expect("regex is compile-time constant")
});

/// A paragraph that continues a list: starts with a number or bullet marker.
pub static LIST_CONTINUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:\d+[.)]|[•*◦▪–-])[ \t]+").expect("regex is compile-time constant")
});

/// A numbered outline line. Group 1 is the indentation, group 2 the number.
pub static OUTLINE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(\d+)\.[ \t]+\S").expect("regex is compile-time constant")
});

/// A lower-level outline line: lettered, roman-numeral, or bulleted.
pub static OUTLINE_SUB_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:(?:[A-Za-z]|[ivxlcdm]+|[IVXLCDM]+)[.)]|[•*◦▪–-])[ \t]+\S")
        .expect("regex is compile-time constant")
});

/// `Page 4`, `Chapter 3`, `Chapter 3: The Return`, `Part 2`.
pub static STRUCTURAL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:page|chapter|section|part)\s+\d+[:.]?(?:\s*[-–—:]?\s*[^.!?\n]{1,40})?$")
        .expect("regex is compile-time constant")
});

/// Only capitalized words separated by whitespace.
pub static CAPITALIZED_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Lu}[\p{L}'’-]*(?:\s+\p{Lu}[\p{L}'’-]*)*$")
        .expect("regex is compile-time constant")
});

/// The first complete sentence inside a chunk.
pub static EMBEDDED_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}[^.!?]*[.!?]").expect("regex is compile-time constant")
});

/// Structured text inside a single candidate (used for previews).
pub static STRUCTURE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\s|[a-z]\.\s|[ivxlcdm]+\.\s|•|\n-|\n\s*\d+\.")
        .expect("regex is compile-time constant")
});
