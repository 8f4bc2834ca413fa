//! Graph builder with efficient edge handling
//!
//! Nodes are sentence positions. Edges are undirected and stored in both
//! directions, using FxHashMap for O(1) lookups during construction.

use super::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// How similarity values become edge weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgePolicy {
    /// Keep every positive similarity as the edge weight
    Weighted,
    /// Keep similarities at or above the threshold, as weights
    Threshold(f64),
    /// Keep similarities at or above the threshold, each with weight 1
    Binary(f64),
}

/// A mutable graph builder over a fixed number of sentence nodes
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a builder with `node_count` isolated nodes
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); node_count],
        }
    }

    /// Add weight to the undirected edge between two nodes
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || weight <= 0.0 {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build a sentence graph from a similarity matrix
    pub fn from_similarity(matrix: &SimilarityMatrix, policy: EdgePolicy) -> Self {
        let mut builder = Self::with_nodes(matrix.size());

        for (i, j, similarity) in matrix.upper_triangle() {
            let weight = match policy {
                EdgePolicy::Weighted => similarity,
                EdgePolicy::Threshold(min) if similarity >= min => similarity,
                EdgePolicy::Binary(min) if similarity >= min && similarity > 0.0 => 1.0,
                _ => 0.0,
            };
            builder.increment_edge(i as u32, j as u32, weight);
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }
}
