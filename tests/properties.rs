//! Property tests for the summarizer and the metric battery.

use proptest::prelude::*;

use textgist::nlp::tokenizer;
use textgist::{evaluate, summarize, StopwordFilter};

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,8}", 1..8).prop_map(|words| words.join(" ") + ".")
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence_strategy(), 3..12).prop_map(|sentences| sentences.join(" "))
}

/// `needle` appears within `haystack` in order (gaps allowed).
fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|n| remaining.any(|h| h == n))
}

proptest! {
    #[test]
    fn prop_summary_never_expands(text in "[ -~]{1,200}") {
        prop_assume!(!text.trim().is_empty());
        let summary = summarize(&text).unwrap();
        let normalized = tokenizer::normalize(&text);
        prop_assert!(
            summary.text == normalized
                || summary.summary_length < normalized.chars().count()
        );
    }

    #[test]
    fn prop_summary_is_deterministic(text in "[ -~]{1,200}") {
        prop_assume!(!text.trim().is_empty());
        prop_assert_eq!(summarize(&text).unwrap(), summarize(&text).unwrap());
    }

    #[test]
    fn prop_selected_sentences_keep_document_order(text in document_strategy()) {
        let summary = summarize(&text).unwrap();

        let original: Vec<String> = tokenizer::segment_sentences(&text)
            .into_iter()
            .map(|s| s.text)
            .collect();
        let selected: Vec<String> = tokenizer::segment_sentences(&summary.text)
            .into_iter()
            .map(|s| s.text)
            .collect();

        prop_assert!(is_subsequence(&selected, &original));
    }

    #[test]
    fn prop_unterminated_text_passes_through(text in "[a-z ]{1,80}") {
        prop_assume!(!text.trim().is_empty());
        // No terminators means at most one sentence.
        let summary = summarize(&text).unwrap();
        prop_assert_eq!(summary.text, tokenizer::normalize(&text));
    }

    #[test]
    fn prop_metrics_stay_in_unit_interval(
        original in "[ -~]{0,150}",
        candidate in "[ -~]{0,150}",
    ) {
        let report = evaluate(&original, &candidate);
        for value in [
            report.similarity,
            report.retention,
            report.relevance,
            report.coherence,
            report.fluency,
        ] {
            prop_assert!(value.is_finite(), "metric must never be NaN");
            prop_assert!((0.0..=1.0).contains(&value), "metric {} out of range", value);
        }
    }

    #[test]
    fn prop_similarity_is_symmetric(a in "[ -~]{0,100}", b in "[ -~]{0,100}") {
        let forward = evaluate(&a, &b).similarity;
        let backward = evaluate(&b, &a).similarity;
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_retention_identity(text in "[a-z]{2,9}( [a-z]{2,9}){0,8}") {
        let stopwords = StopwordFilter::new();
        let has_content = text
            .split_whitespace()
            .any(|w| !stopwords.is_stopword(w));
        prop_assume!(has_content);

        let report = evaluate(&text, &text);
        prop_assert_eq!(report.retention, 1.0);
        prop_assert_eq!(report.relevance, 1.0);
        prop_assert_eq!(report.similarity, 1.0);
    }

    #[test]
    fn prop_evaluating_own_summary_is_fully_relevant(text in document_strategy()) {
        let summary = summarize(&text).unwrap();

        let stopwords = StopwordFilter::new();
        let has_content = summary
            .text
            .split_whitespace()
            .any(|w| !stopwords.is_stopword(w));
        prop_assume!(has_content);

        let report = evaluate(&text, &summary.text);
        // Extractive summaries reuse the original's words verbatim.
        prop_assert_eq!(report.relevance, 1.0);
        prop_assert!(report.retention > 0.0);
    }
}
