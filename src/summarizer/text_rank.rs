//! TextRank sentence scoring
//!
//! Sentences are linked by content-word overlap, normalized by length:
//!
//! `sim(s1, s2) = |S1 ∩ S2| / (ln|S1| + ln|S2|)`
//!
//! and ranked with weighted PageRank over the resulting graph.

use super::{random_walk, RankingParams, ScoringContext, SentenceScorer};
use crate::errors::AlgorithmFailure;
use crate::graph::builder::EdgePolicy;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::{Document, SummarizerConfig};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRankScorer {
    pub params: RankingParams,
}

impl TextRankScorer {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            params: RankingParams::from_config(config),
        }
    }
}

/// Length-normalized overlap of two term sets
pub fn overlap_similarity(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let common = small.iter().filter(|t| large.contains(*t)).count();
    if common == 0 {
        return 0.0;
    }

    let norm = (a.len() as f64).ln() + (b.len() as f64).ln();
    if norm.abs() < 1e-12 {
        // Two one-term sentences sharing that term
        common as f64
    } else {
        common as f64 / norm
    }
}

impl SentenceScorer for TextRankScorer {
    fn score(
        &self,
        document: &Document,
        ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure> {
        if document.is_empty() {
            return Err(AlgorithmFailure::EmptyDocument);
        }

        let term_sets: Vec<FxHashSet<&str>> = document
            .sentences()
            .iter()
            .map(|s| s.content_terms().collect())
            .collect();

        let matrix = SimilarityMatrix::build(term_sets.len(), |i, j| {
            overlap_similarity(&term_sets[i], &term_sets[j])
        });
        if matrix.is_zero() {
            tracing::debug!(sentences = document.len(), "textrank graph has no edges");
        }

        random_walk(&matrix, EdgePolicy::Weighted, &self.params, ctx)
    }
}
