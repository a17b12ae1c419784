//! Summary quality metrics
//!
//! Five independent lexical metrics, each in `[0, 1]`: Jaccard similarity,
//! information retention, relevance, coherence, and fluency. The overlap
//! metrics work on distinct-word sets; the discourse metrics work on
//! sentence fragments. [`MetricsEngine`] assembles full reports and
//! side-by-side comparisons. None of this depends on the summarizer; any
//! candidate summary can be evaluated.

pub mod discourse;
pub mod engine;
pub mod overlap;

pub use discourse::{coherence, fluency};
pub use engine::{MetricsEngine, MetricsReport, SummaryComparison};
pub use overlap::{information_retention, jaccard_similarity, relevance};
