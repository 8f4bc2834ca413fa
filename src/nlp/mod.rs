//! Natural Language Processing components
//!
//! Text normalization, sentence/word tokenization, stopword filtering and
//! stemming, bundled per language by [`processor::TextProcessor`].

pub mod language;
pub mod normalizer;
pub mod processor;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
