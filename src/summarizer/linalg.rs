//! Dense symmetric eigen-decomposition
//!
//! Cyclic Jacobi rotations. Used by LSA on the sentence Gram matrix `AᵀA`,
//! whose eigenvalues are the squared singular values of `A` and whose
//! eigenvectors are its right singular vectors.
//!
//! A sweep costs O(n³), so the stop signals of the scoring call are checked
//! before every row of rotations.

use super::ScoringContext;
use crate::errors::AlgorithmFailure;

/// Off-diagonal mass below which the matrix counts as diagonal
const OFF_DIAGONAL_EPSILON: f64 = 1e-22;

/// Eigenpairs sorted by descending eigenvalue
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    pub values: Vec<f64>,
    /// `vectors[k]` is the unit eigenvector for `values[k]`
    pub vectors: Vec<Vec<f64>>,
    /// Sweeps performed before the off-diagonal mass vanished
    pub sweeps: usize,
}

/// Decompose the `n x n` symmetric matrix stored row-major in `matrix`.
///
/// Fails with `Cancelled` or `DeadlineExceeded` (counting completed sweeps)
/// when `ctx` fires mid-decomposition.
pub fn symmetric_eigen(
    matrix: &[f64],
    n: usize,
    max_sweeps: usize,
    ctx: &ScoringContext,
) -> Result<SymmetricEigen, AlgorithmFailure> {
    debug_assert_eq!(matrix.len(), n * n);
    let mut a = matrix.to_vec();
    let mut v = vec![0.0; n * n];
    for i in 0..n {
        v[i * n + i] = 1.0;
    }

    let scale: f64 = a.iter().map(|x| x * x).sum::<f64>().max(f64::MIN_POSITIVE);
    let mut sweeps = 0;

    while sweeps < max_sweeps {
        let off: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p * n + q] * a[p * n + q])
            .sum();
        if off <= OFF_DIAGONAL_EPSILON * scale {
            break;
        }

        for p in 0..n {
            if let Some(interrupt) = ctx.interrupt() {
                return Err(AlgorithmFailure::interrupted(interrupt, sweeps));
            }
            for q in (p + 1)..n {
                let apq = a[p * n + q];
                if apq == 0.0 {
                    continue;
                }
                let app = a[p * n + p];
                let aqq = a[q * n + q];

                let theta = (aqq - app) / (2.0 * apq);
                let t = if theta.abs() > 1e150 {
                    0.5 / theta
                } else {
                    let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                    sign / (theta.abs() + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for k in 0..n {
                    if k == p || k == q {
                        continue;
                    }
                    let akp = a[k * n + p];
                    let akq = a[k * n + q];
                    let new_kp = c * akp - s * akq;
                    let new_kq = s * akp + c * akq;
                    a[k * n + p] = new_kp;
                    a[p * n + k] = new_kp;
                    a[k * n + q] = new_kq;
                    a[q * n + k] = new_kq;
                }
                a[p * n + p] = app - t * apq;
                a[q * n + q] = aqq + t * apq;
                a[p * n + q] = 0.0;
                a[q * n + p] = 0.0;

                for k in 0..n {
                    let vkp = v[k * n + p];
                    let vkq = v[k * n + q];
                    v[k * n + p] = c * vkp - s * vkq;
                    v[k * n + q] = s * vkp + c * vkq;
                }
            }
        }
        sweeps += 1;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a[j * n + j].total_cmp(&a[i * n + i]).then(i.cmp(&j)));

    let values = order.iter().map(|&k| a[k * n + k]).collect();
    let vectors = order
        .iter()
        .map(|&k| (0..n).map(|row| v[row * n + k]).collect())
        .collect();

    Ok(SymmetricEigen {
        values,
        vectors,
        sweeps,
    })
}
