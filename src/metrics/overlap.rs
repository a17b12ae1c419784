//! Word-overlap metrics: similarity, retention, relevance.
//!
//! All three work on distinct-word sets from lowercase whitespace
//! tokenization; punctuation stays attached to its word, so `"sat."` and
//! `"sat"` are different set members. Similarity keeps every word.
//! Retention and relevance drop stopwords first, since shared function
//! words say nothing about preserved content.
//!
//! Degenerate denominators (no words at all, no content words) resolve to
//! 0 rather than NaN.

use rustc_hash::FxHashSet;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;

/// Distinct lowercase words of `text`.
fn word_set(text: &str) -> FxHashSet<String> {
    tokenizer::segment_words(text).into_iter().collect()
}

/// Distinct lowercase non-stopword words of `text`.
pub(crate) fn content_word_set(text: &str, stopwords: &StopwordFilter) -> FxHashSet<String> {
    tokenizer::segment_words(text)
        .into_iter()
        .filter(|w| !stopwords.is_stopword(w))
        .collect()
}

/// Jaccard similarity between the word sets of two texts.
///
/// Returns 0 when both texts have no words.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let words_a = word_set(a);
    let words_b = word_set(b);

    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count();
    intersection as f64 / union as f64
}

/// Fraction of the original's content vocabulary retained by the summary.
///
/// Returns 0 when the original has no content words.
pub fn information_retention(original: &str, summary: &str, stopwords: &StopwordFilter) -> f64 {
    let original_words = content_word_set(original, stopwords);
    if original_words.is_empty() {
        return 0.0;
    }
    let summary_words = content_word_set(summary, stopwords);
    let retained = summary_words.intersection(&original_words).count();
    retained as f64 / original_words.len() as f64
}

/// Fraction of the summary's content vocabulary that occurs in the
/// original.
///
/// Returns 0 when the summary has no content words.
pub fn relevance(original: &str, summary: &str, stopwords: &StopwordFilter) -> f64 {
    let summary_words = content_word_set(summary, stopwords);
    if summary_words.is_empty() {
        return 0.0;
    }
    let original_words = content_word_set(original, stopwords);
    let common = summary_words.intersection(&original_words).count();
    common as f64 / summary_words.len() as f64
}
