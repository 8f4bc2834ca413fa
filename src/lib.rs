//! # rapid_summarizer
//!
//! Extractive text summarization with four classical sentence rankers.
//!
//! A summary is built by selecting existing sentences, never by generating
//! new text. Sentences are ranked by one of:
//!
//! - **LSA**: singular value decomposition of a term-sentence matrix
//! - **TextRank**: PageRank over a word-overlap sentence graph
//! - **Luhn**: clusters of significant words
//! - **LexRank**: PageRank over a thresholded TF-IDF cosine graph
//!
//! and the chosen sentences are returned in their original order. The
//! engine also reports sentiment polarity and basic text statistics.
//!
//! ```no_run
//! use rapid_summarizer::{SummaryMethod, TextSummarizer};
//!
//! let engine = TextSummarizer::default();
//! let result = engine.summarize("...long article...", SummaryMethod::TextRank, Some(3), "english");
//! println!("{} ({:.1}x)", result.summary_text, result.compression_ratio);
//! ```

pub mod analysis;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod request;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{AlgorithmFailure, RequestError, Result, SummarizerError};
pub use types::{
    Document, Sentence, SummarizerConfig, SummaryMethod, SummaryOutcome, SummaryResult,
    TextStats, Word,
};

// Re-export main functionality
pub use analysis::SentimentAnalyzer;
pub use engine::TextSummarizer;
pub use graph::{builder::GraphBuilder, csr::CsrGraph, similarity::SimilarityMatrix};
pub use nlp::{language::Language, processor::TextProcessor, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, CancelToken, PageRankResult};
pub use request::{SummaryReport, SummaryRequest};
pub use summarizer::{
    selector::SentenceSelector, LexRankScorer, LsaScorer, LuhnScorer, Scorer, ScoringContext,
    SentenceScorer, TextRankScorer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
