//! Sentence and word segmentation
//!
//! Sentence boundaries are found on whitespace-delimited tokens: a token that
//! ends in terminal punctuation closes a sentence unless it is a known
//! abbreviation for the language, or the following token starts lowercase.
//! Words are Unicode word segments with punctuation removed.

use super::language::Language;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Closing characters that may trail terminal punctuation (`"Stop!"`)
const CLOSERS: [char; 5] = ['"', '\'', ')', ']', '\u{201D}'];

const COMMON_ABBREVIATIONS: &[&str] = &["dr", "prof", "etc", "st", "vs"];

const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "jr", "sr", "inc", "ltd", "co", "corp", "dept", "est", "fig", "gen",
    "gov", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "approx", "mt", "rev", "sgt", "capt", "col", "lt", "ave", "blvd", "vol", "al",
];

const GERMAN_ABBREVIATIONS: &[&str] = &[
    "bzw", "usw", "ca", "hr", "fr", "nr", "str", "vgl", "ggf", "evtl", "inkl", "jh", "bspw",
];

const FRENCH_ABBREVIATIONS: &[&str] = &["m", "mme", "mlle", "pr", "cf", "av", "ste", "env"];

const SPANISH_ABBREVIATIONS: &[&str] = &["sr", "sra", "srta", "dra", "ej", "ud", "uds", "pág"];

const ITALIAN_ABBREVIATIONS: &[&str] = &["sig", "sigra", "dott", "ecc", "pag", "ing", "avv"];

const PORTUGUESE_ABBREVIATIONS: &[&str] = &["sr", "sra", "dra", "pág", "exmo", "av"];

const DUTCH_ABBREVIATIONS: &[&str] = &["dhr", "mevr", "bijv", "enz", "bv", "nr", "blz"];

const RUSSIAN_ABBREVIATIONS: &[&str] = &["г", "гг", "им", "ул", "стр", "др", "см", "тыс"];

fn abbreviations_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => ENGLISH_ABBREVIATIONS,
        Language::German => GERMAN_ABBREVIATIONS,
        Language::French => FRENCH_ABBREVIATIONS,
        Language::Spanish => SPANISH_ABBREVIATIONS,
        Language::Italian => ITALIAN_ABBREVIATIONS,
        Language::Portuguese => PORTUGUESE_ABBREVIATIONS,
        Language::Dutch => DUTCH_ABBREVIATIONS,
        Language::Russian => RUSSIAN_ABBREVIATIONS,
        _ => &[],
    }
}

/// Language-aware sentence and word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    language: Language,
    abbreviations: FxHashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Tokenizer {
    /// Create a tokenizer with the abbreviation rules of `language`
    pub fn new(language: Language) -> Self {
        let abbreviations = COMMON_ABBREVIATIONS
            .iter()
            .chain(abbreviations_for(language))
            .copied()
            .collect();
        Self {
            language,
            abbreviations,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Split text into sentences, in order
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut sentences = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for (i, &token) in tokens.iter().enumerate() {
            current.push(token);
            if self.is_boundary(token, tokens.get(i + 1).copied()) {
                sentences.push(current.join(" "));
                current.clear();
            }
        }

        if !current.is_empty() {
            sentences.push(current.join(" "));
        }

        sentences
    }

    /// Split text into word tokens (punctuation dropped)
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }

    fn is_boundary(&self, token: &str, next: Option<&str>) -> bool {
        let trimmed = token.trim_end_matches(|c: char| CLOSERS.contains(&c));
        let Some(last) = trimmed.chars().last() else {
            return false;
        };
        if !matches!(last, '.' | '!' | '?') {
            return false;
        }

        let Some(next) = next else {
            return true;
        };

        // "e.g. the" or "Dr. smith said" never split before a lowercase start
        if next.chars().next().is_some_and(char::is_lowercase) {
            return false;
        }

        if last == '.' && !trimmed.ends_with("..") && self.is_abbreviation(trimmed) {
            return false;
        }

        true
    }

    /// `token` still carries its trailing period
    fn is_abbreviation(&self, token: &str) -> bool {
        let body = token
            .trim_end_matches('.')
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if body.is_empty() {
            return false;
        }
        if self.abbreviations.contains(body.as_str()) {
            return true;
        }

        // Dotted acronyms: e.g. / i.e. / u.s. / z.b.
        body.contains('.')
            && body.split('.').all(|part| {
                (1..=2).contains(&part.chars().count()) && part.chars().all(char::is_alphabetic)
            })
    }
}
