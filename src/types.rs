//! Core types for rapid_summarizer
//!
//! This module defines the document model (words, sentences, documents), the
//! summarization method selector, the result types handed back to callers and
//! the engine configuration.

use crate::errors::{Result, SummarizerError};
use crate::nlp::normalizer::word_count;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

// ============================================================================
// Document model
// ============================================================================

/// A word token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The surface form
    pub text: String,
    /// Lowercased stem, used for every frequency and similarity computation
    pub term: String,
    /// Whether this word is a stopword for the document language
    pub is_stopword: bool,
}

impl Word {
    pub fn new(text: impl Into<String>, term: impl Into<String>, is_stopword: bool) -> Self {
        Self {
            text: text.into(),
            term: term.into(),
            is_stopword,
        }
    }

    /// Check if this word carries content (not a stopword, not pure digits/underscores)
    pub fn is_content(&self) -> bool {
        !self.is_stopword && self.term.chars().any(char::is_alphabetic)
    }
}

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text as it appeared in the normalized input
    pub text: String,
    /// Position within the document
    pub index: usize,
    /// Word tokens in order
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, words: Vec<Word>) -> Self {
        Self {
            text: text.into(),
            index,
            words,
        }
    }

    /// Terms of the content words, in order
    pub fn content_terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .filter(|w| w.is_content())
            .map(|w| w.term.as_str())
    }
}

/// An ordered, immutable sequence of sentences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Summarization method
// ============================================================================

/// The extractive algorithm used to rank sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMethod {
    /// Latent Semantic Analysis (SVD of the term-sentence matrix)
    #[default]
    Lsa,
    /// Word-overlap sentence graph ranked by PageRank
    TextRank,
    /// Significant-word clusters
    Luhn,
    /// Thresholded TF-IDF cosine graph ranked by PageRank
    LexRank,
}

impl SummaryMethod {
    /// Every method, in registry order
    pub const ALL: [SummaryMethod; 4] = [
        SummaryMethod::Lsa,
        SummaryMethod::TextRank,
        SummaryMethod::Luhn,
        SummaryMethod::LexRank,
    ];

    /// Unknown names resolve to [`SummaryMethod::Lsa`]
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "text_rank" | "textrank" | "text-rank" => SummaryMethod::TextRank,
            "luhn" => SummaryMethod::Luhn,
            "lex_rank" | "lexrank" | "lex-rank" => SummaryMethod::LexRank,
            _ => SummaryMethod::Lsa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::Lsa => "lsa",
            SummaryMethod::TextRank => "text_rank",
            SummaryMethod::Luhn => "luhn",
            SummaryMethod::LexRank => "lex_rank",
        }
    }
}

impl std::str::FromStr for SummaryMethod {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SummaryMethod::parse(value))
    }
}

impl std::fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Results
// ============================================================================

/// How a summary was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Sentences were ranked by the selected scorer
    Ranked,
    /// Input was too short to rank and was returned as-is
    PassThrough,
    /// Ranking failed; the leading sentences were used instead
    Fallback { reason: String },
}

impl SummaryOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SummaryOutcome::Fallback { .. })
    }
}

/// The artifact returned for one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary_text: String,
    pub summary_sentence_count: usize,
    pub summary_word_count: usize,
    pub original_word_count: usize,
    /// `original_word_count / summary_word_count`, or 1.0 for an empty summary
    pub compression_ratio: f64,
    pub method: SummaryMethod,
    pub outcome: SummaryOutcome,
}

impl SummaryResult {
    /// Join `sentences` with single spaces and compute the length metrics
    pub fn from_sentences<'a>(
        sentences: impl IntoIterator<Item = &'a str>,
        original_word_count: usize,
        method: SummaryMethod,
        outcome: SummaryOutcome,
    ) -> Self {
        let mut summary_sentence_count = 0;
        let mut parts = Vec::new();
        for sentence in sentences {
            summary_sentence_count += 1;
            parts.push(sentence);
        }
        let summary_text = parts.join(" ");
        let summary_word_count = word_count(&summary_text);

        Self {
            summary_text,
            summary_sentence_count,
            summary_word_count,
            original_word_count,
            compression_ratio: compression_ratio(original_word_count, summary_word_count),
            method,
            outcome,
        }
    }
}

/// Original length over summary length, defined as 1.0 for an empty summary
pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
    if summary_words > 0 {
        original_words as f64 / summary_words as f64
    } else {
        1.0
    }
}

/// Descriptive statistics of a text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Mean characters per word
    pub avg_word_length: f64,
    /// Mean words per sentence
    pub avg_sentence_length: f64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarization engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Damping factor for the TextRank/LexRank random walk
    pub damping: f64,
    /// Iteration cap for the random walk
    pub max_iterations: usize,
    /// L1 convergence threshold for the random walk
    pub convergence_threshold: f64,
    /// Wall-clock budget for the iterative scorers of one call, in milliseconds
    pub timeout_ms: Option<u64>,
    /// Consecutive non-significant words that close a Luhn cluster
    pub luhn_max_gap: usize,
    /// Minimum term frequency, relative to the most frequent term, for a
    /// Luhn significant word
    pub luhn_significance_ratio: f64,
    /// Singular directions retained by LSA (`None` = full rank)
    pub lsa_dimensions: Option<usize>,
    /// Smoothing constant of the LSA term frequency
    pub lsa_tf_smoothing: f64,
    /// Cosine similarity below which LexRank drops an edge
    pub lexrank_threshold: f64,
    /// Keep cosine weights on LexRank edges (otherwise edges weigh 1)
    pub lexrank_continuous: bool,
    /// Inputs shorter than this many words are returned unchanged
    pub min_words_for_ranking: usize,
    /// Sentences taken by the fallback path
    pub fallback_sentences: usize,
    /// Hard cap on an explicitly requested sentence count
    pub max_sentences: usize,
    /// Share of sentences kept when no count is requested
    pub default_ratio: f64,
    pub default_min_sentences: usize,
    pub default_max_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            timeout_ms: None,
            luhn_max_gap: 4,
            luhn_significance_ratio: 0.1,
            lsa_dimensions: None,
            lsa_tf_smoothing: 0.4,
            lexrank_threshold: 0.1,
            lexrank_continuous: true,
            min_words_for_ranking: 50,
            fallback_sentences: 5,
            max_sentences: 20,
            default_ratio: 0.3,
            default_min_sentences: 3,
            default_max_sentences: 10,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.luhn_max_gap == 0 {
            return Err(SummarizerError::invalid_config("luhn_max_gap must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.luhn_significance_ratio) {
            return Err(SummarizerError::invalid_config(
                "luhn_significance_ratio must be between 0 and 1",
            ));
        }

        if self.lsa_dimensions == Some(0) {
            return Err(SummarizerError::invalid_config("lsa_dimensions must be > 0"));
        }

        if !(0.0..1.0).contains(&self.lsa_tf_smoothing) {
            return Err(SummarizerError::invalid_config(
                "lsa_tf_smoothing must be in [0, 1)",
            ));
        }

        if !(0.0..=1.0).contains(&self.lexrank_threshold) {
            return Err(SummarizerError::invalid_config(
                "lexrank_threshold must be between 0 and 1",
            ));
        }

        if self.fallback_sentences == 0 || self.max_sentences == 0 {
            return Err(SummarizerError::invalid_config(
                "fallback_sentences and max_sentences must be > 0",
            ));
        }

        if self.default_ratio <= 0.0 || self.default_ratio > 1.0 {
            return Err(SummarizerError::invalid_config(
                "default_ratio must be in (0, 1]",
            ));
        }

        if self.default_min_sentences == 0
            || self.default_min_sentences > self.default_max_sentences
            || self.default_max_sentences > self.max_sentences
        {
            return Err(SummarizerError::invalid_config(
                "expected 1 <= default_min_sentences <= default_max_sentences <= max_sentences",
            ));
        }

        Ok(())
    }

    /// Deadline for a scoring call started now
    pub fn deadline(&self) -> Option<Instant> {
        self.timeout_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms))
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set the per-call scoring time budget
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Builder method: set the retained LSA dimensions
    pub fn with_lsa_dimensions(mut self, dimensions: usize) -> Self {
        self.lsa_dimensions = Some(dimensions);
        self
    }

    /// Builder method: set the LexRank edge threshold
    pub fn with_lexrank_threshold(mut self, threshold: f64) -> Self {
        self.lexrank_threshold = threshold;
        self
    }

    /// Builder method: toggle continuous LexRank weights
    pub fn with_lexrank_continuous(mut self, continuous: bool) -> Self {
        self.lexrank_continuous = continuous;
        self
    }

    /// Builder method: set the short-input pass-through threshold
    pub fn with_min_words_for_ranking(mut self, words: usize) -> Self {
        self.min_words_for_ranking = words;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("lsa".parse::<SummaryMethod>().unwrap(), SummaryMethod::Lsa);
        assert_eq!("text_rank".parse::<SummaryMethod>().unwrap(), SummaryMethod::TextRank);
        assert_eq!("TextRank".parse::<SummaryMethod>().unwrap(), SummaryMethod::TextRank);
        assert_eq!("luhn".parse::<SummaryMethod>().unwrap(), SummaryMethod::Luhn);
        assert_eq!("lex_rank".parse::<SummaryMethod>().unwrap(), SummaryMethod::LexRank);
    }

    #[test]
    fn test_unknown_method_defaults_to_lsa() {
        assert_eq!("bogus".parse::<SummaryMethod>().unwrap(), SummaryMethod::Lsa);
        assert_eq!("".parse::<SummaryMethod>().unwrap(), SummaryMethod::Lsa);
    }

    #[test]
    fn test_method_serde() {
        let json = serde_json::to_string(&SummaryMethod::LexRank).unwrap();
        assert_eq!(json, r#""lex_rank""#);
        let back: SummaryMethod = serde_json::from_str(r#""text_rank""#).unwrap();
        assert_eq!(back, SummaryMethod::TextRank);
    }

    #[test]
    fn test_compression_ratio() {
        assert!((compression_ratio(100, 25) - 4.0).abs() < 1e-10);
        assert!((compression_ratio(0, 0) - 1.0).abs() < 1e-10);
        assert!((compression_ratio(10, 0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_from_sentences() {
        let result = SummaryResult::from_sentences(
            ["One two three.", "Four five."],
            20,
            SummaryMethod::Luhn,
            SummaryOutcome::Ranked,
        );

        assert_eq!(result.summary_text, "One two three. Four five.");
        assert_eq!(result.summary_sentence_count, 2);
        assert_eq!(result.summary_word_count, 5);
        assert!((result.compression_ratio - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_from_no_sentences() {
        let result =
            SummaryResult::from_sentences([], 0, SummaryMethod::Lsa, SummaryOutcome::PassThrough);

        assert_eq!(result.summary_text, "");
        assert_eq!(result.summary_word_count, 0);
        assert!((result.compression_ratio - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_outcome_serde_shape() {
        let outcome = SummaryOutcome::Fallback {
            reason: "cancelled".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"kind":"fallback","reason":"cancelled"}"#);
        assert!(outcome.is_fallback());
    }

    #[test]
    fn test_word_is_content() {
        assert!(Word::new("Cats", "cat", false).is_content());
        assert!(!Word::new("the", "the", true).is_content());
        assert!(!Word::new("42", "42", false).is_content());
    }

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        assert!(SummarizerConfig::default().with_damping(1.5).validate().is_err());
        assert!(SummarizerConfig::default().with_max_iterations(0).validate().is_err());
        assert!(SummarizerConfig::default().with_lsa_dimensions(0).validate().is_err());
        assert!(SummarizerConfig::default()
            .with_lexrank_threshold(-0.1)
            .validate()
            .is_err());

        let bad = SummarizerConfig {
            default_min_sentences: 12,
            ..SummarizerConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let cfg = SummarizerConfig::from_json_str(r#"{ "damping": 0.9, "timeout_ms": 250 }"#)
            .unwrap();
        assert!((cfg.damping - 0.9).abs() < 1e-10);
        assert_eq!(cfg.timeout_ms, Some(250));
        assert_eq!(cfg.max_iterations, 100);
        assert!(cfg.deadline().is_some());
    }

    #[test]
    fn test_config_from_invalid_json() {
        assert!(matches!(
            SummarizerConfig::from_json_str(r#"{ "damping": 3.0 }"#),
            Err(SummarizerError::InvalidConfig(_))
        ));
        assert!(matches!(
            SummarizerConfig::from_json_str("not json"),
            Err(SummarizerError::Json(_))
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = SummarizerConfig::default().with_lexrank_continuous(false);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
