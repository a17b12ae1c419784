//! Score-ranked sentence selection for summarization.
//!
//! The selector ranks sentences by their combined factor score, keeps the
//! top share (at least two sentences), and reassembles the selection in
//! document order. Documents at or below the passthrough limit are returned
//! as-is; a summary that fails to shrink the text is replaced by the text
//! itself.

use crate::error::{Error, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;
use crate::summarizer::scorer::SentenceScorer;
use crate::types::{Document, ScoredSentence, Summary, SummarizerConfig};
use crate::weights::TermWeightTable;

/// Score-ranked sentence selector.
#[derive(Debug, Clone)]
pub struct SummarySelector {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
}

impl Default for SummarySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SummarySelector {
    /// Create a selector with default config and stopwords.
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            stopwords: StopwordFilter::new(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::new(),
        }
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the fraction of sentences to keep.
    pub fn with_selection_ratio(mut self, ratio: f64) -> Self {
        self.config.selection_ratio = ratio;
        self
    }

    /// Set the minimum number of selected sentences.
    pub fn with_min_sentences(mut self, n: usize) -> Self {
        self.config.min_sentences = n;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize raw text.
    ///
    /// Returns [`Error::InvalidInput`] when `text` is empty.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        if text.is_empty() {
            return Err(Error::InvalidInput("text is required".to_string()));
        }
        Ok(self.select(&Document::new(text)))
    }

    /// Produce a summary for a prepared document.
    pub fn select(&self, document: &Document) -> Summary {
        let original_length = document.raw().chars().count();
        let normalized = document.normalized();
        let sentences = tokenizer::segment_sentences(normalized);

        // Too short to summarize; hand back the normalized text.
        if sentences.len() <= self.config.passthrough_limit {
            return Summary::new(normalized, original_length);
        }

        let take = self.target_size(sentences.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            selected = take,
            "selecting summary sentences"
        );

        let table = TermWeightTable::from_document(document);
        let scorer = SentenceScorer::new(&table, &self.stopwords, &self.config);
        let mut scored = scorer.score_all(&sentences);

        // Stable sort: equal scores keep document order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut selected: Vec<ScoredSentence> = scored.into_iter().take(take).collect();
        selected.sort_by_key(|s| s.sentence.index);

        let text = selected
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let summary = Summary::new(text, original_length);
        if summary.summary_length < normalized.chars().count() {
            summary
        } else {
            Summary::new(normalized, original_length)
        }
    }

    /// Number of sentences to select for a document of `sentence_count`.
    fn target_size(&self, sentence_count: usize) -> usize {
        let scaled = (sentence_count as f64 * self.config.selection_ratio).ceil() as usize;
        scaled.max(self.config.min_sentences)
    }
}
