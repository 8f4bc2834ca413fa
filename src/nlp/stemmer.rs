//! Snowball stemming for term normalization
//!
//! Every scorer compares words through their stems, so "summaries" and
//! "summary" count as the same term.

use super::language::Language;
use rust_stemmers::{Algorithm, Stemmer};

/// Lowercasing stemmer bound to one language
pub struct WordStemmer {
    stemmer: Stemmer,
    language: Language,
}

impl std::fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl WordStemmer {
    pub fn new(language: Language) -> Self {
        #[rustfmt::skip]
        let algorithm = match language {
            Language::Arabic     => Algorithm::Arabic,
            Language::Danish     => Algorithm::Danish,
            Language::Dutch      => Algorithm::Dutch,
            Language::English    => Algorithm::English,
            Language::Finnish    => Algorithm::Finnish,
            Language::French     => Algorithm::French,
            Language::German     => Algorithm::German,
            Language::Greek      => Algorithm::Greek,
            Language::Hungarian  => Algorithm::Hungarian,
            Language::Italian    => Algorithm::Italian,
            Language::Norwegian  => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian   => Algorithm::Romanian,
            Language::Russian    => Algorithm::Russian,
            Language::Spanish    => Algorithm::Spanish,
            Language::Swedish    => Algorithm::Swedish,
            Language::Turkish    => Algorithm::Turkish,
        };
        Self {
            stemmer: Stemmer::create(algorithm),
            language,
        }
    }

    /// Lowercase then stem
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        self.stemmer.stem(&lower).into_owned()
    }
}
