//! Supported tokenizer locales
//!
//! The set is closed: every variant has a stopword list, a Snowball stemmer
//! and an abbreviation table for sentence segmentation.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};

/// A language the tokenizer knows how to segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    /// Every supported language, in declaration order
    pub const ALL: [Language; 17] = [
        Language::Arabic,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Hungarian,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    /// Parse a language name (`"english"`) or ISO 639-1 code (`"en"`)
    pub fn parse(value: &str) -> Result<Self> {
        let lang = match value.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Language::Arabic,
            "da" | "danish" => Language::Danish,
            "nl" | "dutch" => Language::Dutch,
            "en" | "english" => Language::English,
            "fi" | "finnish" => Language::Finnish,
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            "el" | "greek" => Language::Greek,
            "hu" | "hungarian" => Language::Hungarian,
            "it" | "italian" => Language::Italian,
            "no" | "nb" | "norwegian" => Language::Norwegian,
            "pt" | "portuguese" => Language::Portuguese,
            "ro" | "romanian" => Language::Romanian,
            "ru" | "russian" => Language::Russian,
            "es" | "spanish" => Language::Spanish,
            "sv" | "swedish" => Language::Swedish,
            "tr" | "turkish" => Language::Turkish,
            _ => return Err(SummarizerError::unsupported_language(value)),
        };
        Ok(lang)
    }

    /// Like [`Language::parse`], but a blank value selects the default
    /// (English)
    pub fn parse_or_default(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            Ok(Self::default())
        } else {
            Self::parse(value)
        }
    }

    /// The lowercase English name, as accepted by [`Language::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Greek => "greek",
            Language::Hungarian => "hungarian",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = SummarizerError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Language::parse(value)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
