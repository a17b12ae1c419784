//! Five-factor sentence scoring.
//!
//! Each sentence earns a scalar score combining term weight, document
//! position, length, keyword presence, and relative position. The factors
//! are non-negative and combined with the weights in
//! [`SummarizerConfig`](crate::types::SummarizerConfig); no cross-sentence
//! normalization happens before ranking.

use rayon::prelude::*;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};
use crate::weights::TermWeightTable;

/// Position factor when the sentence opens the document.
const FIRST_POSITION_SCORE: f64 = 1.0;
/// Position factor when the sentence closes the document.
const LAST_POSITION_SCORE: f64 = 0.8;
/// Length factor when the word count falls inside the preferred band.
const LENGTH_SCORE: f64 = 0.5;
/// Keyword factor when the sentence contains a long content word.
const KEYWORD_SCORE: f64 = 0.3;

/// Batches below this many sentences are scored sequentially.
const PARALLEL_THRESHOLD: usize = 256;

/// Scores sentences against a document's term-weight table.
#[derive(Debug)]
pub struct SentenceScorer<'a> {
    table: &'a TermWeightTable,
    stopwords: &'a StopwordFilter,
    config: &'a SummarizerConfig,
}

impl<'a> SentenceScorer<'a> {
    /// Create a scorer borrowing the document's table and the shared
    /// filter and configuration.
    pub fn new(
        table: &'a TermWeightTable,
        stopwords: &'a StopwordFilter,
        config: &'a SummarizerConfig,
    ) -> Self {
        Self {
            table,
            stopwords,
            config,
        }
    }

    /// Combined factor score for one sentence.
    ///
    /// `total_sentences` is the document's sentence count; it anchors the
    /// last-sentence check and the relative-position factor.
    pub fn score(&self, sentence: &Sentence, total_sentences: usize) -> f64 {
        let words = tokenizer::segment_words(&sentence.text);

        let term_sum: f64 = words
            .iter()
            .filter(|w| !self.stopwords.is_stopword(w))
            .map(|w| self.table.weight(w))
            .sum();
        let term_factor = term_sum * self.config.term_multiplier;

        // First place outranks last for a hypothetical single sentence.
        let position_factor = if sentence.index == 0 {
            FIRST_POSITION_SCORE
        } else if sentence.index + 1 == total_sentences {
            LAST_POSITION_SCORE
        } else {
            0.0
        };

        let length_factor = if words.len() > self.config.length_factor_min
            && words.len() < self.config.length_factor_max
        {
            LENGTH_SCORE
        } else {
            0.0
        };

        let keyword_factor = if words.iter().any(|w| {
            !self.stopwords.is_stopword(w) && w.chars().count() > self.config.keyword_min_chars
        }) {
            KEYWORD_SCORE
        } else {
            0.0
        };

        let relative_factor = 1.0 - sentence.index as f64 / total_sentences as f64;

        term_factor * self.config.term_weight
            + position_factor * self.config.position_weight
            + length_factor * self.config.length_weight
            + keyword_factor * self.config.keyword_weight
            + relative_factor * self.config.relative_position_weight
    }

    /// Score every sentence, preserving input order.
    pub fn score_all(&self, sentences: &[Sentence]) -> Vec<ScoredSentence> {
        let total = sentences.len();

        // For small documents, sequential is faster.
        if total < PARALLEL_THRESHOLD {
            return sentences
                .iter()
                .map(|s| ScoredSentence {
                    sentence: s.clone(),
                    score: self.score(s, total),
                })
                .collect();
        }

        sentences
            .par_iter()
            .map(|s| ScoredSentence {
                sentence: s.clone(),
                score: self.score(s, total),
            })
            .collect()
    }
}
