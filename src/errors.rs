//! Error types for rapid_summarizer
//!
//! Two families live here. [`SummarizerError`] covers caller-visible problems
//! (bad configuration, unknown language, invalid requests). [`AlgorithmFailure`]
//! is what a sentence scorer returns when it cannot produce usable scores; the
//! engine never surfaces it and routes the call into the fallback path instead.

use crate::pagerank::Interrupt;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors surfaced to callers of the library
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The tokenizer has no rules for the requested locale
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A summarization request failed collaborator-level validation
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// Configuration or request JSON could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizerError {
    /// Build an [`SummarizerError::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build an [`SummarizerError::UnsupportedLanguage`]
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(language.into())
    }
}

/// Validation failures for an incoming [`crate::request::SummaryRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("text is required")]
    EmptyText,

    #[error("text must be at least {min} words long, got {words}")]
    TooShort { words: usize, min: usize },
}

/// Internal scorer failure. Always caught by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmFailure {
    #[error("document has no sentences")]
    EmptyDocument,

    /// Every cell of the term or similarity matrix is zero
    #[error("degenerate matrix: {0}")]
    DegenerateMatrix(&'static str),

    #[error("scorer produced a non-finite score for sentence {index}")]
    NonFiniteScore { index: usize },

    #[error("ranking exceeded its deadline after {iterations} iterations")]
    DeadlineExceeded { iterations: usize },

    #[error("ranking was cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },

    #[error("scorer returned {got} scores for {expected} sentences")]
    ScoreCountMismatch { expected: usize, got: usize },
}

impl AlgorithmFailure {
    /// Failure for a computation stopped by `interrupt` after `iterations`
    pub fn interrupted(interrupt: Interrupt, iterations: usize) -> Self {
        match interrupt {
            Interrupt::Cancelled => Self::Cancelled { iterations },
            Interrupt::DeadlineExceeded => Self::DeadlineExceeded { iterations },
        }
    }

    /// Check a score vector for NaN/Inf
    pub fn check_finite(scores: &[f64]) -> std::result::Result<(), AlgorithmFailure> {
        match scores.iter().position(|s| !s.is_finite()) {
            Some(index) => Err(AlgorithmFailure::NonFiniteScore { index }),
            None => Ok(()),
        }
    }
}
