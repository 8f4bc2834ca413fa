//! Sentence graph in Compressed Sparse Row (CSR) form
//!
//! Node `i` is sentence `i`. Each undirected edge is stored once per
//! endpoint, so the rows can be walked without lookups during power
//! iteration.

use super::builder::GraphBuilder;

#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// `offsets[i]..offsets[i + 1]` indexes sentence `i`'s edges
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    /// Sum of edge weights per sentence
    strength: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a builder, ordering each row by target sentence
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut graph = Self::with_capacity(builder.node_count(), builder.edge_count() * 2);

        for (_, node) in builder.nodes() {
            let mut row: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            row.sort_unstable_by_key(|&(target, _)| target);

            graph.strength.push(row.iter().map(|&(_, w)| w).sum());
            for (target, weight) in row {
                graph.targets.push(target);
                graph.weights.push(weight);
            }
            graph.offsets.push(graph.targets.len());
        }

        graph
    }

    fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut offsets = Vec::with_capacity(nodes + 1);
        offsets.push(0);
        Self {
            offsets,
            targets: Vec::with_capacity(edges),
            weights: Vec::with_capacity(edges),
            strength: Vec::with_capacity(nodes),
        }
    }

    pub fn node_count(&self) -> usize {
        self.strength.len()
    }

    /// `(target, weight)` pairs of a sentence, by ascending target
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let range = self.offsets[node as usize]..self.offsets[node as usize + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    pub fn degree(&self, node: u32) -> usize {
        self.offsets[node as usize + 1] - self.offsets[node as usize]
    }

    /// Total weight leaving a sentence
    pub fn strength(&self, node: u32) -> f64 {
        self.strength[node as usize]
    }

    /// Sentences that share no edge with any other sentence
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.node_count() as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}
