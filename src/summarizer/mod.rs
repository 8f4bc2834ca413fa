//! Sentence scoring and selection
//!
//! Four interchangeable scorers share one contract: given a parsed
//! [`Document`], return one finite score per sentence. The [`Scorer`] enum
//! dispatches statically over them; the selector turns scores into a summary.

pub mod lex_rank;
pub mod linalg;
pub mod lsa;
pub mod luhn;
pub mod selector;
pub mod text_rank;
pub mod vectors;

use crate::errors::AlgorithmFailure;
use crate::graph::builder::{EdgePolicy, GraphBuilder};
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::{CancelToken, Interrupt};
use crate::types::{Document, SummarizerConfig, SummaryMethod};
use std::time::Instant;

pub use lex_rank::LexRankScorer;
pub use lsa::LsaScorer;
pub use luhn::LuhnScorer;
pub use text_rank::TextRankScorer;

/// Per-call stop signals handed to a scorer
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelToken>,
}

impl ScoringContext {
    pub fn new(deadline: Option<Instant>, cancel: Option<CancelToken>) -> Self {
        Self { deadline, cancel }
    }

    /// The stop signal that has fired, cancellation first
    pub fn interrupt(&self) -> Option<Interrupt> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            Some(Interrupt::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Some(Interrupt::DeadlineExceeded)
        } else {
            None
        }
    }
}

/// A sentence ranking algorithm.
///
/// # Contract
///
/// - **Input**: a non-empty [`Document`]. An empty one yields
///   [`AlgorithmFailure::EmptyDocument`].
/// - **Output**: exactly one finite score per sentence, indexed by position.
///   Higher means more summary-worthy; only the ordering matters.
/// - **Deterministic**: the same document always yields the same scores.
pub trait SentenceScorer {
    fn score(
        &self,
        document: &Document,
        ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure>;
}

/// Random-walk parameters shared by the graph scorers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    pub damping: f64,
    pub max_iterations: usize,
    pub threshold: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl RankingParams {
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }
}

/// Rank the sentence graph built from `matrix` with PageRank
pub(crate) fn random_walk(
    matrix: &SimilarityMatrix,
    policy: EdgePolicy,
    params: &RankingParams,
    ctx: &ScoringContext,
) -> Result<Vec<f64>, AlgorithmFailure> {
    let builder = GraphBuilder::from_similarity(matrix, policy);
    let graph = CsrGraph::from_builder(&builder);

    let pagerank = StandardPageRank::new()
        .with_damping(params.damping)
        .with_max_iterations(params.max_iterations)
        .with_threshold(params.threshold)
        .with_deadline(ctx.deadline)
        .with_cancel(ctx.cancel.clone());

    let result = match policy {
        EdgePolicy::Binary(_) => pagerank.run_unweighted(&graph),
        EdgePolicy::Weighted | EdgePolicy::Threshold(_) => pagerank.run(&graph),
    };

    if let Some(interrupt) = result.interrupted {
        return Err(AlgorithmFailure::interrupted(interrupt, result.iterations));
    }

    if !result.converged {
        tracing::debug!(
            iterations = result.iterations,
            delta = result.delta,
            "random walk hit the iteration cap before converging"
        );
    }

    AlgorithmFailure::check_finite(&result.scores)?;
    Ok(result.scores)
}

/// Statically dispatched scorer registry entry
#[derive(Debug, Clone)]
pub enum Scorer {
    Lsa(LsaScorer),
    TextRank(TextRankScorer),
    Luhn(LuhnScorer),
    LexRank(LexRankScorer),
}

impl Scorer {
    /// Build the scorer for `method`, parameterized from `config`
    pub fn from_config(method: SummaryMethod, config: &SummarizerConfig) -> Self {
        match method {
            SummaryMethod::Lsa => Scorer::Lsa(LsaScorer::from_config(config)),
            SummaryMethod::TextRank => Scorer::TextRank(TextRankScorer::from_config(config)),
            SummaryMethod::Luhn => Scorer::Luhn(LuhnScorer::from_config(config)),
            SummaryMethod::LexRank => Scorer::LexRank(LexRankScorer::from_config(config)),
        }
    }

    pub fn method(&self) -> SummaryMethod {
        match self {
            Scorer::Lsa(_) => SummaryMethod::Lsa,
            Scorer::TextRank(_) => SummaryMethod::TextRank,
            Scorer::Luhn(_) => SummaryMethod::Luhn,
            Scorer::LexRank(_) => SummaryMethod::LexRank,
        }
    }
}

impl SentenceScorer for Scorer {
    fn score(
        &self,
        document: &Document,
        ctx: &ScoringContext,
    ) -> Result<Vec<f64>, AlgorithmFailure> {
        let scores = match self {
            Scorer::Lsa(s) => s.score(document, ctx),
            Scorer::TextRank(s) => s.score(document, ctx),
            Scorer::Luhn(s) => s.score(document, ctx),
            Scorer::LexRank(s) => s.score(document, ctx),
        }?;

        if scores.len() != document.len() {
            return Err(AlgorithmFailure::ScoreCountMismatch {
                expected: document.len(),
                got: scores.len(),
            });
        }
        AlgorithmFailure::check_finite(&scores)?;
        Ok(scores)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::nlp::language::Language;
    use crate::nlp::processor::TextProcessor;
    use crate::types::Document;

    pub fn parse(text: &str) -> Document {
        TextProcessor::new(Language::English).parse(text)
    }

    /// A document where sentence 1 and 3 share the dominant topic
    pub fn topical_document() -> Document {
        parse(
            "Solar panels convert sunlight into electricity for homes. \
             The weather was pleasant during the picnic yesterday. \
             Modern solar panels convert more sunlight into electricity than older panels. \
             My cousin bought a red bicycle last spring. \
             Electricity from solar panels lowers the monthly bills of homes.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_registry_covers_every_method() {
        let config = SummarizerConfig::default();
        for method in SummaryMethod::ALL {
            assert_eq!(Scorer::from_config(method, &config).method(), method);
        }
    }

    #[test]
    fn test_every_scorer_returns_one_finite_score_per_sentence() {
        let doc = topical_document();
        let config = SummarizerConfig::default();

        for method in SummaryMethod::ALL {
            let scores = Scorer::from_config(method, &config)
                .score(&doc, &ScoringContext::default())
                .unwrap();
            assert_eq!(scores.len(), doc.len(), "{method}");
            assert!(scores.iter().all(|s| s.is_finite()), "{method}");
        }
    }

    #[test]
    fn test_every_scorer_rejects_empty_document() {
        let config = SummarizerConfig::default();
        for method in SummaryMethod::ALL {
            let err = Scorer::from_config(method, &config)
                .score(&Document::default(), &ScoringContext::default())
                .unwrap_err();
            assert_eq!(err, AlgorithmFailure::EmptyDocument);
        }
    }

    #[test]
    fn test_scorers_are_deterministic() {
        let doc = topical_document();
        let config = SummarizerConfig::default();

        for method in SummaryMethod::ALL {
            let scorer = Scorer::from_config(method, &config);
            let first = scorer.score(&doc, &ScoringContext::default()).unwrap();
            let second = scorer.score(&doc, &ScoringContext::default()).unwrap();
            assert_eq!(first, second, "{method}");
        }
    }

    #[test]
    fn test_cancelled_walk_becomes_failure() {
        let matrix = SimilarityMatrix::build(3, |_, _| 0.5);
        let token = CancelToken::new();
        token.cancel();
        let ctx = ScoringContext::new(None, Some(token));

        let err = random_walk(&matrix, EdgePolicy::Weighted, &RankingParams::default(), &ctx)
            .unwrap_err();
        assert_eq!(err, AlgorithmFailure::Cancelled { iterations: 0 });
    }

    #[test]
    fn test_context_reports_cancellation_before_deadline() {
        let token = CancelToken::new();
        let past = Instant::now()
            .checked_sub(std::time::Duration::from_millis(1))
            .unwrap_or_else(Instant::now);
        let ctx = ScoringContext::new(Some(past), Some(token.clone()));
        assert_eq!(ctx.interrupt(), Some(Interrupt::DeadlineExceeded));

        token.cancel();
        assert_eq!(ctx.interrupt(), Some(Interrupt::Cancelled));
        assert_eq!(ScoringContext::default().interrupt(), None);
    }

    #[test]
    fn test_random_walk_scores_sum_to_one() {
        let matrix = SimilarityMatrix::build(4, |i, j| if i + 1 == j { 0.4 } else { 0.0 });
        let scores = random_walk(
            &matrix,
            EdgePolicy::Weighted,
            &RankingParams::default(),
            &ScoringContext::default(),
        )
        .unwrap();

        assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
