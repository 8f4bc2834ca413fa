//! Luhn significant-word clustering
//!
//! A term is significant when it occurs more than once in the document and
//! at least `significance_ratio` times as often as the most frequent term.
//! Within a sentence, significant words are grouped into clusters that end
//! after `max_gap` consecutive non-significant words. A cluster scores
//! `significant² / span`, and a sentence takes its best cluster.

use super::{ScoringContext, SentenceScorer};
use crate::errors::AlgorithmFailure;
use crate::types::{Document, SummarizerConfig};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct LuhnScorer {
    pub max_gap: usize,
    pub significance_ratio: f64,
}

impl Default for LuhnScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl LuhnScorer {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            max_gap: config.luhn_max_gap,
            significance_ratio: config.luhn_significance_ratio,
        }
    }

    /// Terms that qualify as significant across the whole document
    pub fn significant_terms<'a>(&self, document: &'a Document) -> FxHashSet<&'a str> {
        let mut frequencies: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in document.sentences() {
            for term in sentence.content_terms() {
                *frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let max_tf = frequencies.values().copied().max().unwrap_or(0) as f64;
        frequencies
            .into_iter()
            .filter(|&(_, tf)| tf > 1 && tf as f64 >= self.significance_ratio * max_tf)
            .map(|(term, _)| term)
            .collect()
    }

    /// Best cluster score over a sentence's significance flags
    pub fn best_cluster(&self, flags: &[bool]) -> f64 {
        let mut best = 0.0f64;
        let mut cluster: Option<(usize, usize, usize)> = None; // (start, last significant, count)

        let rate = |(start, last, count): (usize, usize, usize)| {
            let span = (last - start + 1) as f64;
            (count * count) as f64 / span
        };

        for (i, &significant) in flags.iter().enumerate() {
            match (significant, cluster) {
                (true, None) => cluster = Some((i, i, 1)),
                (true, Some((start, _, count))) => cluster = Some((start, i, count + 1)),
                (false, Some(open @ (_, last, _))) if i - last >= self.max_gap => {
                    best = best.max(rate(open));
                    cluster = None;
                }
                _ => {}
            }
        }
        if let Some(open) = cluster {
            best = best.max(rate(open));
        }

        best
    }
}

impl SentenceScorer for LuhnScorer {
    fn score(
        &self,
        document: &Document,
        _ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure> {
        if document.is_empty() {
            return Err(AlgorithmFailure::EmptyDocument);
        }

        let significant = self.significant_terms(document);
        let scores = document
            .sentences()
            .iter()
            .map(|sentence| {
                // Stopwords stay in the sequence as gap words
                let flags: Vec<bool> = sentence
                    .words
                    .iter()
                    .map(|w| w.is_content() && significant.contains(w.term.as_str()))
                    .collect();
                self.best_cluster(&flags)
            })
            .collect();

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn flags(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == 'x').collect()
    }

    #[test]
    fn test_single_cluster_score() {
        let scorer = LuhnScorer::default();
        // x.x.x -> 3 significant over a span of 5
        assert!((scorer.best_cluster(&flags("x.x.x")) - 9.0 / 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_gap_splits_clusters() {
        let scorer = LuhnScorer::default();
        // Four non-significant words close the first cluster
        let score = scorer.best_cluster(&flags("xx....xxx"));
        assert!((score - 3.0).abs() < 1e-10);

        // Three do not
        let joined = scorer.best_cluster(&flags("xx...xxx"));
        assert!((joined - 25.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_trailing_gap_trimmed() {
        let scorer = LuhnScorer::default();
        assert!((scorer.best_cluster(&flags("..xx..")) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_significant_words_scores_zero() {
        let scorer = LuhnScorer::default();
        assert_eq!(scorer.best_cluster(&flags("....")), 0.0);
        assert_eq!(scorer.best_cluster(&[]), 0.0);
    }

    #[test]
    fn test_single_occurrence_terms_not_significant() {
        let doc = parse("Alpha beta gamma. Delta epsilon zeta.");
        let scorer = LuhnScorer::default();

        assert!(scorer.significant_terms(&doc).is_empty());
        let scores = scorer.score(&doc, &ScoringContext::default()).unwrap();
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_topical_sentences_outscore_digressions() {
        let doc = topical_document();
        let scores = LuhnScorer::default()
            .score(&doc, &ScoringContext::default())
            .unwrap();

        assert!(scores[2] > scores[1]);
        assert!(scores[2] > scores[3]);
        assert_eq!(scores[3], 0.0);
    }
}
