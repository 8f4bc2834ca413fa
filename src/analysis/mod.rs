//! Auxiliary analyzers that run alongside summarization
//!
//! Neither depends on the chosen summarization method.

pub mod sentiment;
pub mod stats;

pub use sentiment::SentimentAnalyzer;
pub use stats::text_stats;
