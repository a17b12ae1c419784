//! Sentence-level metrics: coherence and fluency.
//!
//! Both metrics work on sentence fragments split at terminal punctuation.
//! Unlike the document tokenizer, the terminators are discarded here; only
//! the words between boundaries matter.

use rustc_hash::FxHashSet;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{self, SENTENCE_TERMINATORS};

use super::overlap::content_word_set;

/// Sentences shorter than this many words are left out of fluency scoring.
const FLUENCY_MIN_WORDS: usize = 3;

/// Split `text` into non-empty sentence fragments, terminators dropped.
pub(crate) fn split_fragments(text: &str) -> Vec<&str> {
    text.split(&SENTENCE_TERMINATORS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Adjacent-sentence lexical cohesion.
///
/// For each adjacent pair of sentences, the count of shared content words
/// divided by the larger of the two content vocabularies, averaged over all
/// pairs. A pair of sentences with no content words at all contributes 0.
/// Text with at most one sentence is perfectly coherent by definition.
pub fn coherence(summary: &str, stopwords: &StopwordFilter) -> f64 {
    let fragments = split_fragments(summary);
    if fragments.len() <= 1 {
        return 1.0;
    }

    let vocabularies: Vec<FxHashSet<String>> = fragments
        .iter()
        .map(|fragment| content_word_set(fragment, stopwords))
        .collect();

    let mut total = 0.0;
    for pair in vocabularies.windows(2) {
        let larger = pair[0].len().max(pair[1].len());
        if larger == 0 {
            continue;
        }
        let common = pair[0].intersection(&pair[1]).count();
        total += common as f64 / larger as f64;
    }

    total / (fragments.len() - 1) as f64
}

/// Share of well-formed sentences.
///
/// A sentence counts as fluent when it has at least one content word and at
/// least one word with a verb-like ending (`ing`/`ed`). Sentences under
/// [`FLUENCY_MIN_WORDS`] words are excluded from the numerator and the
/// denominator both; when no sentence qualifies the score is 0.
pub fn fluency(summary: &str, stopwords: &StopwordFilter) -> f64 {
    let mut qualifying = 0usize;
    let mut fluent = 0usize;

    for fragment in split_fragments(summary) {
        let words = tokenizer::segment_words(fragment);
        if words.len() < FLUENCY_MIN_WORDS {
            continue;
        }
        qualifying += 1;

        let has_content = words.iter().any(|w| !stopwords.is_stopword(w));
        let has_verb_form = words.iter().any(|w| w.ends_with("ing") || w.ends_with("ed"));
        if has_content && has_verb_form {
            fluent += 1;
        }
    }

    if qualifying == 0 {
        return 0.0;
    }
    fluent as f64 / qualifying as f64
}
