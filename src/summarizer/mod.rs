//! Extractive summarization
//!
//! Sentences are scored by five weighted lexical factors and the
//! top-scoring share is stitched back together in document order.

pub mod scorer;
pub mod selector;

pub use scorer::SentenceScorer;
pub use selector::SummarySelector;
