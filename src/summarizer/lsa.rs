//! Latent Semantic Analysis scoring
//!
//! Builds a term-by-sentence matrix `A` weighted by smoothed term frequency
//! times inverse sentence frequency, then scores sentence `j` by its length
//! in the space of the top `k` singular directions:
//!
//! `score(j) = sqrt(Σ_{i<k} σ_i² · v_ij²)`
//!
//! The right singular vectors come from the eigen-decomposition of `AᵀA`.
//! When every direction is kept the sum collapses to `‖a_j‖²`, so the
//! decomposition only runs for a truncated rank.

use super::linalg::symmetric_eigen;
use super::vectors::term_counts;
use super::{ScoringContext, SentenceScorer};
use crate::errors::AlgorithmFailure;
use crate::types::{Document, SummarizerConfig};
use rustc_hash::FxHashMap;

/// Singular values below this fraction of the largest are treated as zero
const SINGULAR_VALUE_FLOOR: f64 = 1e-10;

const MAX_SWEEPS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct LsaScorer {
    /// Retained singular directions (`None` = full rank)
    pub dimensions: Option<usize>,
    /// Smoothing constant `a` in `a + (1 - a) · tf / max_tf`
    pub tf_smoothing: f64,
}

impl Default for LsaScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

/// One sentence column of the term matrix, sorted by term index
type Column = Vec<(usize, f64)>;

impl LsaScorer {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            dimensions: config.lsa_dimensions,
            tf_smoothing: config.lsa_tf_smoothing,
        }
    }

    /// Weighted term columns, one per sentence
    fn term_matrix(&self, document: &Document) -> Vec<Column> {
        let n = document.len() as f64;
        let counts: Vec<FxHashMap<&str, usize>> =
            document.sentences().iter().map(term_counts).collect();

        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut sentence_frequency: Vec<usize> = Vec::new();
        for sentence in document.sentences() {
            for term in sentence.content_terms() {
                if !index.contains_key(term) {
                    index.insert(term, sentence_frequency.len());
                    sentence_frequency.push(0);
                }
            }
        }
        for sentence_counts in &counts {
            for term in sentence_counts.keys() {
                sentence_frequency[index[term]] += 1;
            }
        }

        counts
            .iter()
            .map(|sentence_counts| {
                let max_tf = sentence_counts.values().copied().max().unwrap_or(0) as f64;
                let mut column: Column = sentence_counts
                    .iter()
                    .map(|(term, &count)| {
                        let row = index[term];
                        let tf = self.tf_smoothing
                            + (1.0 - self.tf_smoothing) * count as f64 / max_tf;
                        let isf = 1.0 + (n / sentence_frequency[row] as f64).ln();
                        (row, tf * isf)
                    })
                    .collect();
                column.sort_by_key(|&(row, _)| row);
                column
            })
            .collect()
    }
}

fn dot(a: &Column, b: &Column) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

impl SentenceScorer for LsaScorer {
    fn score(
        &self,
        document: &Document,
        ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure> {
        if document.is_empty() {
            return Err(AlgorithmFailure::EmptyDocument);
        }

        let columns = self.term_matrix(document);
        if columns.iter().all(Vec::is_empty) {
            return Err(AlgorithmFailure::DegenerateMatrix("no content terms"));
        }

        let n = columns.len();
        let vocabulary = columns.iter().flatten().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let max_rank = n.min(vocabulary);
        if !matches!(self.dimensions, Some(d) if d < max_rank) {
            let scores: Vec<f64> = columns.iter().map(|c| dot(c, c).sqrt()).collect();
            AlgorithmFailure::check_finite(&scores)?;
            return Ok(scores);
        }

        let mut gram = vec![0.0; n * n];
        for i in 0..n {
            if let Some(interrupt) = ctx.interrupt() {
                return Err(AlgorithmFailure::interrupted(interrupt, 0));
            }
            for j in i..n {
                let value = dot(&columns[i], &columns[j]);
                gram[i * n + j] = value;
                gram[j * n + i] = value;
            }
        }

        let eigen = symmetric_eigen(&gram, n, MAX_SWEEPS, ctx)?;
        tracing::trace!(sentences = n, sweeps = eigen.sweeps, "lsa decomposition finished");

        let sigma: Vec<f64> = eigen.values.iter().map(|&l| l.max(0.0).sqrt()).collect();
        let sigma_max = sigma.first().copied().unwrap_or(0.0);
        if sigma_max <= 0.0 || !sigma_max.is_finite() {
            return Err(AlgorithmFailure::DegenerateMatrix("no singular values"));
        }

        let rank = sigma
            .iter()
            .take_while(|&&s| s >= SINGULAR_VALUE_FLOOR * sigma_max)
            .count();
        let k = self.dimensions.map_or(rank, |d| d.min(rank));

        let scores: Vec<f64> = (0..n)
            .map(|j| {
                (0..k)
                    .map(|i| {
                        let weighted = sigma[i] * eigen.vectors[i][j];
                        weighted * weighted
                    })
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        AlgorithmFailure::check_finite(&scores)?;
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::pagerank::CancelToken;

    #[test]
    fn test_scores_are_non_negative() {
        let doc = topical_document();
        let scores = LsaScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap();

        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_full_rank_scores_equal_column_norms() {
        // With every direction kept the score is the column's L2 norm
        let doc = parse("Rivers flow to the sea. Mountains rise above valleys. Rivers carve valleys.");
        let scorer = LsaScorer::default();
        let columns = scorer.term_matrix(&doc);
        let scores = scorer.score(&doc, &ScoringContext::default()).unwrap();

        for (column, score) in columns.iter().zip(&scores) {
            assert!((dot(column, column).sqrt() - score).abs() < 1e-8);
        }
    }

    #[test]
    fn test_truncation_at_true_rank_matches_column_norms() {
        // Two identical sentences leave rank 2 of at most 3
        let doc = parse("Rivers carve deep valleys. Rivers carve deep valleys. Mountains rise high.");
        let full = LsaScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap();
        let truncated = LsaScorer {
            dimensions: Some(2),
            ..LsaScorer::default()
        }
        .score(&doc, &ScoringContext::default())
        .unwrap();

        for (f, t) in full.iter().zip(&truncated) {
            assert!((f - t).abs() < 1e-8);
        }
    }

    #[test]
    fn test_near_duplicate_sentences_stay_finite() {
        let text = (0..12)
            .map(|i| {
                if i % 3 == 0 {
                    "Bees carry pollen between the flowers of the orchard."
                } else {
                    "Bees carry pollen between the flowers of the garden."
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let doc = parse(&text);

        for dimensions in [None, Some(1), Some(3)] {
            let scorer = LsaScorer {
                dimensions,
                ..LsaScorer::default()
            };
            let scores = scorer.score(&doc, &ScoringContext::default()).unwrap();

            assert_eq!(scores.len(), 12);
            assert!(scores.iter().all(|s| s.is_finite() && *s >= 0.0));
        }
    }

    #[test]
    fn test_truncated_rank_honours_cancellation() {
        let token = CancelToken::new();
        token.cancel();
        let ctx = ScoringContext::new(None, Some(token));
        let scorer = LsaScorer {
            dimensions: Some(1),
            ..LsaScorer::default()
        };

        let err = scorer.score(&topical_document(), &ctx).unwrap_err();
        assert_eq!(err, AlgorithmFailure::Cancelled { iterations: 0 });
    }

    #[test]
    fn test_fewer_dimensions_never_increase_scores() {
        let doc = topical_document();
        let full = LsaScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap();
        let reduced = LsaScorer {
            dimensions: Some(1),
            ..LsaScorer::default()
        }
        .score(&doc, &ScoringContext::default())
        .unwrap();

        for (f, r) in full.iter().zip(&reduced) {
            assert!(*r <= f + 1e-12);
        }
    }

    #[test]
    fn test_stopword_only_document_is_degenerate() {
        let doc = parse("It is what it is. And so it was.");
        let err = LsaScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap_err();
        assert!(matches!(err, AlgorithmFailure::DegenerateMatrix(_)));
    }

    #[test]
    fn test_single_sentence() {
        let doc = parse("Quantum computers factor large numbers quickly.");
        let scores = LsaScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap();
        assert_eq!(scores.len(), 1);
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn test_sparse_dot() {
        let a = vec![(0, 1.0), (2, 2.0), (5, 1.0)];
        let b = vec![(1, 4.0), (2, 3.0), (5, 2.0)];
        assert!((dot(&a, &b) - 8.0).abs() < 1e-12);
    }
}
