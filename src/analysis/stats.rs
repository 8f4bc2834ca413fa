//! Descriptive text statistics

use crate::nlp::tokenizer::Tokenizer;
use crate::types::TextStats;

/// Word and sentence counts with their averages.
///
/// Words are whitespace-separated; sentences come from `tokenizer`. Averages
/// are 0.0 when their denominator is zero.
pub fn text_stats(text: &str, tokenizer: &Tokenizer) -> TextStats {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = tokenizer.sentences(text).len();
    let word_count = words.len();

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = if word_count > 0 {
        total_chars as f64 / word_count as f64
    } else {
        0.0
    };
    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    TextStats {
        word_count,
        sentence_count,
        avg_word_length,
        avg_sentence_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = text_stats("The cat sat. The dog ran far.", &Tokenizer::default());

        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.sentence_count, 2);
        assert!((stats.avg_sentence_length - 3.5).abs() < 1e-10);
        // 3+3+4+3+3+3+4 characters, punctuation included
        assert!((stats.avg_word_length - 23.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_text() {
        let stats = text_stats("", &Tokenizer::default());
        assert_eq!(stats, TextStats::default());
    }

    #[test]
    fn test_multibyte_characters_counted_once() {
        let stats = text_stats("café naïve.", &Tokenizer::default());
        assert_eq!(stats.word_count, 2);
        assert!((stats.avg_word_length - 5.0).abs() < 1e-10);
    }
}
