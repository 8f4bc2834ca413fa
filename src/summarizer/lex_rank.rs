//! LexRank sentence scoring
//!
//! Sentences become TF-IDF vectors. Pairs whose cosine similarity reaches the
//! threshold are linked; continuous LexRank keeps the cosine as the edge
//! weight, discrete LexRank gives every kept edge weight 1. Scores are the
//! PageRank stationary distribution of that graph.

use super::vectors::{TermVector, TfIdfModel};
use super::{random_walk, RankingParams, ScoringContext, SentenceScorer};
use crate::errors::AlgorithmFailure;
use crate::graph::builder::EdgePolicy;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::{Document, SummarizerConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct LexRankScorer {
    pub params: RankingParams,
    /// Minimum cosine similarity for an edge
    pub threshold: f64,
    /// Keep cosine weights (otherwise edges weigh 1)
    pub continuous: bool,
}

impl Default for LexRankScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl LexRankScorer {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            params: RankingParams::from_config(config),
            threshold: config.lexrank_threshold,
            continuous: config.lexrank_continuous,
        }
    }

    fn edge_policy(&self) -> EdgePolicy {
        if self.continuous {
            EdgePolicy::Threshold(self.threshold)
        } else {
            EdgePolicy::Binary(self.threshold)
        }
    }
}

impl SentenceScorer for LexRankScorer {
    fn score(
        &self,
        document: &Document,
        ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure> {
        if document.is_empty() {
            return Err(AlgorithmFailure::EmptyDocument);
        }

        let model = TfIdfModel::fit(document);
        let vectors: Vec<TermVector> = document
            .sentences()
            .iter()
            .map(|s| model.sentence_vector(s))
            .collect();

        let matrix = SimilarityMatrix::build(vectors.len(), |i, j| {
            vectors[i].cosine_similarity(&vectors[j])
        });
        tracing::trace!(
            sentences = document.len(),
            vocabulary = model.vocabulary_size(),
            "lexrank similarity matrix built"
        );

        random_walk(&matrix, self.edge_policy(), &self.params, ctx)
    }
}
