//! Dense pairwise similarity between sentences
//!
//! The matrix is symmetric with a zero diagonal. Rows are filled in parallel
//! for larger documents; each cell is computed independently, so the result
//! does not depend on scheduling.

use rayon::prelude::*;

/// Below this many sentences the matrix is filled sequentially
pub const PARALLEL_THRESHOLD: usize = 64;

/// Symmetric sentence-by-sentence similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Fill the matrix from a pairwise similarity function.
    ///
    /// `similarity(i, j)` is only called for `i < j`; the diagonal stays zero.
    /// Non-finite or negative values are stored as zero.
    pub fn build<F>(size: usize, similarity: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let row = |i: usize| -> Vec<f64> {
            ((i + 1)..size)
                .map(|j| {
                    let value = similarity(i, j);
                    if value.is_finite() && value > 0.0 {
                        value
                    } else {
                        0.0
                    }
                })
                .collect()
        };

        let upper: Vec<Vec<f64>> = if size >= PARALLEL_THRESHOLD {
            (0..size).into_par_iter().map(row).collect()
        } else {
            (0..size).map(row).collect()
        };

        let mut values = vec![0.0; size * size];
        for (i, cells) in upper.into_iter().enumerate() {
            for (offset, value) in cells.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * size + j] = value;
                values[j * size + i] = value;
            }
        }

        Self { size, values }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Iterate over `(i, j, value)` for the upper triangle
    pub fn upper_triangle(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.size).flat_map(move |i| ((i + 1)..self.size).map(move |j| (i, j, self.get(i, j))))
    }

    /// Check whether every off-diagonal cell is zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
