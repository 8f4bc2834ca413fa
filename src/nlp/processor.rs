//! Per-language bundle of tokenizer, stopword filter and stemmer

use super::language::Language;
use super::stemmer::WordStemmer;
use super::stopwords::StopwordFilter;
use super::tokenizer::Tokenizer;
use crate::types::{Document, Sentence, Word};

/// Everything needed to turn normalized text into a [`Document`]
#[derive(Debug)]
pub struct TextProcessor {
    pub tokenizer: Tokenizer,
    pub stopwords: StopwordFilter,
    pub stemmer: WordStemmer,
}

impl TextProcessor {
    pub fn new(language: Language) -> Self {
        Self {
            tokenizer: Tokenizer::new(language),
            stopwords: StopwordFilter::new(language),
            stemmer: WordStemmer::new(language),
        }
    }

    pub fn language(&self) -> Language {
        self.tokenizer.language()
    }

    /// Segment `text` into sentences and words
    pub fn parse(&self, text: &str) -> Document {
        let sentences = self
            .tokenizer
            .sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| {
                let words = self
                    .tokenizer
                    .words(&sentence)
                    .into_iter()
                    .map(|word| self.word(word))
                    .collect();
                Sentence::new(sentence, index, words)
            })
            .collect();

        Document::new(sentences)
    }

    fn word(&self, text: String) -> Word {
        let stem = self.stemmer.stem(&text);
        let is_stopword = self.stopwords.is_stopword(&text);
        Word::new(text, stem, is_stopword)
    }
}
