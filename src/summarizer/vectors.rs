//! Sparse term vectors for sentences
//!
//! Sentences become TF-IDF weighted, L2-normalized vectors over stemmed
//! content terms, so cosine similarity reduces to a dot product.

use crate::types::{Document, Sentence};
use rustc_hash::{FxHashMap, FxHashSet};

/// Count occurrences of each content term in a sentence
pub fn term_counts(sentence: &Sentence) -> FxHashMap<&str, usize> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for term in sentence.content_terms() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// A sparse unit vector representation of a sentence
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Non-zero dimensions: term -> weight
    pub dimensions: FxHashMap<String, f64>,
}

impl TermVector {
    /// Create from a map of dimensions, scaling to unit length
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions }
    }

    /// Cosine similarity with another vector
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        // Both sides are unit length, so this is the dot product
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .dimensions
            .iter()
            .filter_map(|(term, value)| large.dimensions.get(term).map(|o| value * o))
            .sum()
    }
}

/// Inverse sentence frequencies fitted on one document
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    idf: FxHashMap<String, f64>,
}

impl TfIdfModel {
    /// Fit `idf(t) = ln(N / df(t)) + 1`, with `df` counted in sentences
    pub fn fit(document: &Document) -> Self {
        let n = document.len() as f64;
        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in document.sentences() {
            let unique: FxHashSet<&str> = sentence.content_terms().collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let idf = df
            .into_iter()
            .map(|(term, count)| (term.to_string(), (n / count as f64).ln() + 1.0))
            .collect();
        Self { idf }
    }

    /// The fitted weight of a term, 0.0 when unseen
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Number of distinct terms in the vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Build the unit TF-IDF vector of a sentence
    pub fn sentence_vector(&self, sentence: &Sentence) -> TermVector {
        let dimensions: FxHashMap<String, f64> = term_counts(sentence)
            .into_iter()
            .map(|(term, count)| (term.to_string(), count as f64 * self.idf(term)))
            .filter(|(_, weight)| *weight > 0.0)
            .collect();
        TermVector::from_dimensions(dimensions)
    }
}
