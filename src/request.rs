//! Request and report types for callers that speak JSON
//!
//! A [`SummaryRequest`] is what an HTTP handler would deserialize from its
//! body; [`crate::TextSummarizer::process`] turns it into a [`SummaryReport`]
//! bundling the summary with sentiment and text statistics.

use crate::errors::RequestError;
use crate::types::{SummaryMethod, SummaryResult, TextStats};
use serde::{Deserialize, Serialize};

/// Requests shorter than this are rejected before summarization
pub const MIN_REQUEST_WORDS: usize = 10;

/// Characters of the original text kept in a report title
pub const TITLE_CHARS: usize = 100;

fn default_method() -> String {
    SummaryMethod::Lsa.as_str().to_string()
}

fn default_language() -> String {
    "english".to_string()
}

/// An incoming summarization request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: String,
    /// Method name; unknown names fall back to LSA
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub sentences_count: Option<i64>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            method: default_method(),
            sentences_count: None,
            language: default_language(),
        }
    }

    pub fn with_method(mut self, method: SummaryMethod) -> Self {
        self.method = method.as_str().to_string();
        self
    }

    pub fn with_sentences_count(mut self, count: i64) -> Self {
        self.sentences_count = Some(count);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// The resolved method (unknown names resolve to LSA)
    pub fn method(&self) -> SummaryMethod {
        self.method.parse().unwrap_or_default()
    }

    /// Reject empty or very short texts
    pub fn validate(&self) -> Result<(), RequestError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(RequestError::EmptyText);
        }

        let words = text.split_whitespace().count();
        if words < MIN_REQUEST_WORDS {
            return Err(RequestError::TooShort {
                words,
                min: MIN_REQUEST_WORDS,
            });
        }
        Ok(())
    }

    /// Leading characters of the text, with an ellipsis when truncated
    pub fn title(&self) -> String {
        let text = self.text.trim();
        if text.chars().count() > TITLE_CHARS {
            let head: String = text.chars().take(TITLE_CHARS).collect();
            format!("{head}...")
        } else {
            text.to_string()
        }
    }
}

/// Summary plus the auxiliary analyses of the original text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub title: String,
    pub language: String,
    pub summary: SummaryResult,
    /// Polarity rounded to three decimals
    pub sentiment: f64,
    /// Compression ratio rounded to two decimals
    pub compression_ratio: f64,
    pub text_stats: TextStats,
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{ "text": "Some text here." }"#).unwrap();

        assert_eq!(request.method, "lsa");
        assert_eq!(request.language, "english");
        assert_eq!(request.sentences_count, None);
        assert_eq!(request.method(), SummaryMethod::Lsa);
    }

    #[test]
    fn test_method_resolution() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{ "text": "x", "method": "lex_rank", "sentences_count": 4 }"#)
                .unwrap();
        assert_eq!(request.method(), SummaryMethod::LexRank);
        assert_eq!(request.sentences_count, Some(4));

        let unknown = SummaryRequest {
            method: "bart".to_string(),
            ..SummaryRequest::new("x")
        };
        assert_eq!(unknown.method(), SummaryMethod::Lsa);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            SummaryRequest::new("   ").validate(),
            Err(RequestError::EmptyText)
        );
        assert_eq!(
            SummaryRequest::new("only four words here").validate(),
            Err(RequestError::TooShort { words: 4, min: 10 })
        );
        assert!(SummaryRequest::new("one two three four five six seven eight nine ten")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_title_truncation() {
        let long = "a".repeat(150);
        let title = SummaryRequest::new(long).title();
        assert_eq!(title.chars().count(), 103);
        assert!(title.ends_with("..."));

        assert_eq!(SummaryRequest::new(" short ").title(), "short");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-0.12345, 3), -0.123);
        assert_eq!(round_to(2.0, 2), 2.0);
    }
}
