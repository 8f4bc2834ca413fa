//! PageRank random walk
//!
//! The power iteration shared by TextRank and LexRank, plus the stop signals
//! (deadline, cancellation) that bound its latency.

pub mod standard;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a walk stopped before converging or reaching its iteration cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    DeadlineExceeded,
    Cancelled,
}

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
    /// Set when a deadline or cancellation stopped the walk early
    pub interrupted: Option<Interrupt>,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
            interrupted: None,
        }
    }
}

/// Shared flag that asks in-flight walks to stop
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
