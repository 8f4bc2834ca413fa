//! Stopword lists
//!
//! One list per [`Language`], taken from the `stop-words` crate. Stopwords
//! never count as content terms in any scorer.

use super::language::Language;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

impl From<Language> for LANGUAGE {
    fn from(language: Language) -> Self {
        match language {
            Language::Arabic => LANGUAGE::Arabic,
            Language::Danish => LANGUAGE::Danish,
            Language::Dutch => LANGUAGE::Dutch,
            Language::English => LANGUAGE::English,
            Language::Finnish => LANGUAGE::Finnish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Greek => LANGUAGE::Greek,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Italian => LANGUAGE::Italian,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Romanian => LANGUAGE::Romanian,
            Language::Russian => LANGUAGE::Russian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Turkish => LANGUAGE::Turkish,
        }
    }
}

/// Lowercased stopwords of one language
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    pub fn new(language: Language) -> Self {
        let words = get(LANGUAGE::from(language))
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }
}
