//! Top-N sentence selection
//!
//! Picks the highest scoring sentences and restores document order, so the
//! summary always reads in the sequence the sentences were written.

use crate::types::Document;

/// Scores closer than this are treated as a tie
const SCORE_EPSILON: f64 = 1e-10;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Position in the document
    pub index: usize,
    pub score: f64,
}

/// Score-ordered, position-preserving sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl SentenceSelector {
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Select the top sentences and return them in document order.
    ///
    /// Ties (within `1e-10`) go to the earlier sentence. Sentences without a
    /// score are never selected.
    pub fn select(&self, scores: &[f64]) -> Vec<SelectedSentence> {
        let mut taken = vec![false; scores.len()];
        let mut selected = Vec::with_capacity(self.num_sentences.min(scores.len()));

        // Repeated max-scan: an epsilon tie is not a total order, so no sort
        while selected.len() < self.num_sentences {
            let mut best: Option<SelectedSentence> = None;
            for (index, &score) in scores.iter().enumerate() {
                if taken[index] {
                    continue;
                }
                if best
                    .as_ref()
                    .map_or(true, |b| score > b.score + SCORE_EPSILON)
                {
                    best = Some(SelectedSentence { index, score });
                }
            }
            match best {
                Some(sentence) => {
                    taken[sentence.index] = true;
                    selected.push(sentence);
                }
                None => break,
            }
        }

        // Sort by document order
        selected.sort_by_key(|s| s.index);
        selected
    }

    /// Texts of the selected sentences, in document order
    pub fn select_texts<'a>(&self, document: &'a Document, scores: &[f64]) -> Vec<&'a str> {
        self.select(scores)
            .into_iter()
            .filter_map(|s| document.sentences().get(s.index))
            .map(|s| s.text.as_str())
            .collect()
    }
}
