//! Deterministic extractive summarization with lexical quality metrics.
//!
//! Two independent halves:
//!
//! - **Summarization**: every sentence of a document is scored by five
//!   weighted lexical factors (term weight, document position, length,
//!   keyword presence, relative position) and the top share is reassembled
//!   in document order. No training, no embeddings, no inference.
//! - **Evaluation**: any candidate summary is judged against its source by
//!   five independent metrics (similarity, retention, relevance, coherence,
//!   fluency), all in `[0, 1]`, whether or not it came from this crate's
//!   summarizer.
//!
//! Everything is pure computation over immutable inputs; no I/O, no global
//! state. Determinism is a contract: the same input always yields the same
//! summary and the same report.
//!
//! # Quick start
//!
//! ```
//! let text = "Dogs are loyal animals. They protect their owners. \
//!             Dogs require regular exercise. Many people love dogs.";
//!
//! let summary = textgist::summarize(text)?;
//! assert!(summary.summary_length < summary.original_length);
//!
//! let report = textgist::evaluate(text, &summary.text);
//! assert!(report.retention > 0.0);
//! # Ok::<(), textgist::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: emit `tracing` debug events from the selector and the
//!   metrics engine. Off by default; no subscriber is installed either way.

pub mod error;
pub mod metrics;
pub mod nlp;
pub mod summarizer;
pub mod types;
pub mod weights;

pub use error::{Error, Result};
pub use metrics::{MetricsEngine, MetricsReport, SummaryComparison};
pub use nlp::stopwords::StopwordFilter;
pub use summarizer::{SentenceScorer, SummarySelector};
pub use types::{Document, ScoredSentence, Sentence, Summary, SummarizerConfig};
pub use weights::TermWeightTable;

/// Summarize `text` with the default configuration.
///
/// Returns [`Error::InvalidInput`] when `text` is empty.
pub fn summarize(text: &str) -> Result<Summary> {
    SummarySelector::new().summarize(text)
}

/// Metric report for `candidate` as a summary of `original`.
pub fn evaluate(original: &str, candidate: &str) -> MetricsReport {
    MetricsEngine::new().evaluate(original, candidate)
}

/// Compare two candidate summaries of `original`.
///
/// Returns [`Error::InvalidInput`] when `original` is empty.
pub fn compare(original: &str, candidate_a: &str, candidate_b: &str) -> Result<SummaryComparison> {
    MetricsEngine::new().compare(original, candidate_a, candidate_b)
}
