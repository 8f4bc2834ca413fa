//! Power-iteration PageRank over a sentence graph
//!
//! `score(i) = (1-d)/N + d·dangling/N + d·Σ_j score(j)·w(j,i)/out(j)`
//!
//! where `out(j)` is the total edge weight of `j` (or its degree when
//! unweighted) and `dangling` is the mass held by isolated sentences, which
//! is spread uniformly. The walk stops on L1 convergence, at the iteration
//! cap, at the deadline, or when the cancel token fires.

use super::{CancelToken, Interrupt, PageRankResult};
use crate::graph::csr::CsrGraph;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct StandardPageRank {
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 change between iterations that counts as converged
    pub threshold: f64,
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelToken>,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            deadline: None,
            cancel: None,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Stop the walk once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Stop the walk when `token` is cancelled
    pub fn with_cancel(mut self, token: Option<CancelToken>) -> Self {
        self.cancel = token;
        self
    }

    /// Rank with edge weights. A walk that hits the iteration cap still
    /// returns its last scores, with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let out: Vec<f64> = (0..graph.node_count() as u32)
            .map(|n| graph.strength(n))
            .collect();
        self.walk(graph, &out, |w| w)
    }

    /// Rank treating every edge as weight 1
    pub fn run_unweighted(&self, graph: &CsrGraph) -> PageRankResult {
        let out: Vec<f64> = (0..graph.node_count() as u32)
            .map(|n| graph.degree(n) as f64)
            .collect();
        self.walk(graph, &out, |_| 1.0)
    }

    fn interrupt(&self) -> Option<Interrupt> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            Some(Interrupt::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Some(Interrupt::DeadlineExceeded)
        } else {
            None
        }
    }

    fn walk(
        &self,
        graph: &CsrGraph,
        out: &[f64],
        edge_weight: impl Fn(f64) -> f64,
    ) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let uniform = 1.0 / n as f64;
        let isolated = graph.isolated_nodes();
        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut interrupted = None;

        while iterations < self.max_iterations && delta > self.threshold {
            interrupted = self.interrupt();
            if interrupted.is_some() {
                break;
            }
            iterations += 1;

            let dangling: f64 = isolated.iter().map(|&i| scores[i as usize]).sum();
            next.fill((1.0 - self.damping + self.damping * dangling) * uniform);

            for (source, (&score, &outflow)) in scores.iter().zip(out).enumerate() {
                if outflow <= 0.0 {
                    continue;
                }
                let share = self.damping * score / outflow;
                for (target, weight) in graph.neighbors(source as u32) {
                    next[target as usize] += share * edge_weight(weight);
                }
            }

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
        }

        // Guard against drift; the walk preserves total mass up to rounding
        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        let converged = delta <= self.threshold;
        tracing::trace!(nodes = n, iterations, delta, converged, "pagerank finished");

        PageRankResult {
            interrupted,
            ..PageRankResult::new(scores, iterations, delta, converged)
        }
    }
}
