//! Integration tests for highlight_segmenter

use highlight_segmenter::*;

/// Listicle whose items are bulleted: matches both the section-header and the
/// bullet-point layouts.
const LISTICLE: &str = "\
5 Benefits of Meditation
• Lower stress through daily practice.
• Better focus at work.

3 Benefits of Running
• Stronger heart and lungs.
• Better sleep at night.";

const KINDLE_PAGES: &str =
    "Highlight (Yellow) | Page 10\nQuote A.\n\nHighlight (Yellow) | Page 12\nQuote B.";

const PROSE: &str = "\
Small habits compound into remarkable results over time.

Environment design matters more than motivation does.

Identity change is the deepest layer of behavior change.";

#[test]
fn test_section_header_takes_priority() {
    let mut log = AttemptLog::new();
    let outcome = StrategyChain::default().run_with_observer(
        LISTICLE,
        &SegmenterConfig::default(),
        &mut log,
    );

    assert_eq!(outcome.strategy, Some(StrategyKind::SectionHeader));
    assert_eq!(outcome.highlights.len(), 2);
    assert!(outcome.highlights[0].starts_with("5 Benefits of Meditation"));
    assert!(outcome.highlights[0].contains("Better focus at work."));
    assert!(outcome.highlights[1].starts_with("3 Benefits of Running"));
    assert_eq!(log.tried(), vec![StrategyKind::SectionHeader]);
    assert_eq!(detect_format(LISTICLE), Some(DocumentFormat::BenefitsSections));
}

#[test]
fn test_hierarchy_scenario() {
    let highlights = extract_highlights("1. Point one\n   a. Sub-point\n2. Point two");
    assert_eq!(highlights.len(), 2);
    assert!(highlights[0].contains("Point one"));
    assert!(highlights[0].contains("Sub-point"));
    assert!(highlights[1].contains("Point two"));
}

#[test]
fn test_marker_scenario() {
    assert_eq!(extract_highlights(KINDLE_PAGES), vec!["Quote A.", "Quote B."]);
    let format = detect_format(KINDLE_PAGES).unwrap();
    assert_eq!(format.to_string(), "Kindle Notes (Page Format)");
    assert!(format.is_export());
}

#[test]
fn test_location_export_with_title_block() {
    let text = "Deep Work\nby Cal Newport\n\
                Highlight (Blue) | Location 212\nClarity about what matters provides clarity about what does not.\n\
                Highlight (Blue) | Location 530\nDepth is the new superpower.";
    let extraction = HighlightExtractor::new().extract_str(text).unwrap();
    assert_eq!(extraction.format, Some(DocumentFormat::KindleLocation));
    assert_eq!(extraction.strategy, StrategyKind::MarkerDelimited);
    assert_eq!(extraction.candidates.len(), 2);
    assert_eq!(
        extraction.candidates.get(1).map(|c| c.text.as_str()),
        Some("Depth is the new superpower.")
    );
}

#[test]
fn test_count_header_export() {
    let text = "Atomic Habits\n3 Highlights | Yellow (3)\n\
                Yellow highlight | Page: 5\nHabits are the compound interest of self-improvement.\n\
                Yellow highlight | Page: 9\nYou do not rise to the level of your goals.";
    let extraction = HighlightExtractor::new().extract_str(text).unwrap();
    assert_eq!(extraction.format, Some(DocumentFormat::HighlightCount(3)));
    assert_eq!(extraction.strategy, StrategyKind::MarkerDelimited);

    let texts: Vec<&str> = extraction.candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Habits are the compound interest of self-improvement.",
            "You do not rise to the level of your goals.",
        ]
    );
}

#[test]
fn test_paragraph_scenario() {
    let highlights = extract_highlights(PROSE);
    assert_eq!(
        highlights,
        vec![
            "Small habits compound into remarkable results over time.",
            "Environment design matters more than motivation does.",
            "Identity change is the deepest layer of behavior change.",
        ]
    );
    assert_eq!(detect_format(PROSE), Some(DocumentFormat::General));
}

#[test]
fn test_empty_scenario() {
    assert!(extract_highlights("").is_empty());
    assert_eq!(detect_format(""), None);
    assert_eq!(detect_format(" \n\t"), None);
}

#[test]
fn test_chapter_label_never_standalone() {
    let paragraphs = "Chapter 3\n\nThe first paragraph of the chapter is right here.\n\n\
                      The second paragraph follows right after it.";
    let outline = "Chapter 3\n1. Make the cue obvious to yourself\n2. Make the habit attractive";

    for text in [paragraphs, outline] {
        let highlights = extract_highlights(text);
        assert!(!highlights.is_empty());
        assert!(
            highlights.iter().all(|h| h.trim() != "Chapter 3"),
            "standalone label in {:?}",
            highlights
        );
    }
}

#[test]
fn test_horizontal_rules() {
    let text = "Reading Notes\n---\nThe first passage is long enough to keep here.\n\
                ---\nThe second passage is also long enough here.";
    let outcome = StrategyChain::default().run_with_observer(
        text,
        &SegmenterConfig::default(),
        &mut NoopObserver,
    );
    assert_eq!(outcome.strategy, Some(StrategyKind::HorizontalRule));
    assert_eq!(
        outcome.highlights,
        vec![
            "The first passage is long enough to keep here.",
            "The second passage is also long enough here."
        ]
    );
}

#[test]
fn test_sentence_fallback() {
    // Every paragraph is under the floor, the text as a whole is not.
    let outcome = StrategyChain::default().run_with_observer(
        "Go now.\n\nRun fast.\n\nStop here.",
        &SegmenterConfig::default(),
        &mut NoopObserver,
    );
    assert_eq!(outcome.strategy, Some(StrategyKind::SentenceChunk));
    assert_eq!(outcome.highlights, vec!["Go now. Run fast. Stop here."]);
}

#[test]
fn test_idempotent() {
    for text in [LISTICLE, KINDLE_PAGES, PROSE, "1. Point one\n   a. Sub-point\n2. Point two"] {
        assert_eq!(extract_highlights(text), extract_highlights(text));
    }
}

#[test]
fn test_pages_joined_in_order() {
    let pages = vec![
        PageText::new(2, "The second page has its own paragraph of text."),
        PageText::new(1, "The first page opens with a paragraph of text."),
    ];
    let document = RawDocumentText::from_pages(pages);
    let extraction = HighlightExtractor::new().extract(&document).unwrap();
    let texts: Vec<&str> = extraction.candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "The first page opens with a paragraph of text.",
            "The second page has its own paragraph of text."
        ]
    );
}

#[test]
fn test_upstream_failure() {
    let result: std::result::Result<Vec<PageText>, String> = Err("file is encrypted".into());
    let err = RawDocumentText::from_extraction_result(result).unwrap_err();
    assert!(matches!(err, HighlightError::UpstreamExtraction { .. }));
    assert!(err.is_document_error());
}

#[test]
fn test_empty_document_vs_no_highlights() {
    let extractor = HighlightExtractor::new();

    let empty = extractor.extract(&RawDocumentText::new("   \n\n ")).unwrap_err();
    assert!(empty.is_empty_input());
    assert_eq!(
        empty.to_string(),
        "No text found in the document or the document might be scanned images"
    );

    let none = extractor.extract_str("Too short.").unwrap_err();
    assert!(!none.is_empty_input());
    assert_eq!(
        none.to_string(),
        "Could not identify individual highlights in the document"
    );
}

#[test]
fn test_review_and_confirm() {
    let mut extraction = HighlightExtractor::new().extract_str(KINDLE_PAGES).unwrap();
    let candidates = &mut extraction.candidates;

    candidates.toggle(0).unwrap();
    candidates.update_text(1, "Quote B, edited.").unwrap();
    assert_eq!(candidates.selected_count(), 1);

    let attribution = Attribution::new("James Clear", "Atomic Habits");
    let drafts = candidates.confirm(&attribution).unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].text, "Quote B, edited.");
    assert_eq!(drafts[0].category, "Book");
    assert!(!drafts[0].favorite);

    candidates.toggle(1).unwrap();
    assert_eq!(
        candidates.confirm(&attribution),
        Err(HighlightError::NothingSelected)
    );

    assert!(matches!(
        candidates.toggle(7),
        Err(HighlightError::IndexOutOfRange { index: 7, len: 2 })
    ));
}

#[test]
fn test_confirm_requires_attribution() {
    let extraction = HighlightExtractor::new().extract_str(PROSE).unwrap();
    let err = extraction
        .candidates
        .confirm(&Attribution::new("", "Atomic Habits"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Please enter the author name");

    let err = extraction
        .candidates
        .confirm(&Attribution::new("James Clear", " "))
        .unwrap_err();
    assert_eq!(err.to_string(), "Please enter the source");
}

#[test]
fn test_preview_uses_config_length() {
    let candidate = HighlightCandidate::new("word ".repeat(60).trim());
    let cfg = SegmenterConfig::default().with_preview_len(20);
    let extractor = HighlightExtractor::with_config(cfg).unwrap();
    assert_eq!(candidate.preview_with(extractor.config()).chars().count(), 23);
}

#[test]
fn test_preview() {
    let long = "Habits are the compound interest of self-improvement. ".repeat(5);
    let candidate = HighlightCandidate::new(long.trim());
    let preview = candidate.preview(150);
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 153);

    let outline = HighlightCandidate::new("1. Point one\n   a. Sub-point");
    assert!(outline.has_structure());
    assert_eq!(outline.preview(5), "1. Point one\n   a. Sub-point");
}

#[test]
fn test_batch_extraction() {
    let docs: Vec<RawDocumentText> = [KINDLE_PAGES, PROSE, "", LISTICLE]
        .into_iter()
        .map(RawDocumentText::new)
        .collect();
    let results = HighlightExtractor::new().extract_batch(&docs);

    let strategies: Vec<Option<StrategyKind>> = results
        .iter()
        .map(|r| r.as_ref().ok().map(|e| e.strategy))
        .collect();
    assert_eq!(
        strategies,
        vec![
            Some(StrategyKind::MarkerDelimited),
            Some(StrategyKind::Paragraph),
            None,
            Some(StrategyKind::SectionHeader),
        ]
    );
}

#[test]
fn test_custom_config() {
    let cfg = SegmenterConfig::from_json(r#"{"paragraph_min_len": 60}"#).unwrap();
    let extractor = HighlightExtractor::with_config(cfg).unwrap();
    // Every paragraph is now under the floor; sentence chunks take over.
    let extraction = extractor.extract_str(PROSE).unwrap();
    assert_eq!(extraction.strategy, StrategyKind::SentenceChunk);
    assert_eq!(extraction.candidates.len(), 1);
}
