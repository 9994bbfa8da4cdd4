//! Gaussian elimination with partial pivoting.

use crate::error::{NewtonError, Result, SolveStage};

use super::matrix::DenseMatrix;
use super::PIVOT_TOLERANCE;

/// Solve `A·x = b` by Gaussian elimination with partial pivoting.
///
/// Works on a private copy of `[A | b]`; nothing is cached between calls.
/// Fails with [`NewtonError::SingularMatrix`] when the selected pivot, or a
/// diagonal entry met during back-substitution, is below [`PIVOT_TOLERANCE`].
pub fn solve_pivoted(a: &DenseMatrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = a.size();
    NewtonError::check_len("right-hand side", b.len(), n)?;

    let mut m = a.clone();
    let mut rhs = b.to_vec();

    for k in 0..n {
        // Find pivot
        let mut max_val = m.get(k, k).abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = m.get(i, k).abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != k {
            m.swap_rows(k, max_row);
            rhs.swap(k, max_row);
        }

        if max_val < PIVOT_TOLERANCE {
            return Err(NewtonError::singular(SolveStage::Elimination, k, m.get(k, k)));
        }

        // Eliminate below the pivot
        let pivot = m.get(k, k);
        for i in (k + 1)..n {
            let factor = m.get(i, k) / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                let v = m.get(i, j) - factor * m.get(k, j);
                m.set(i, j, v);
            }
            rhs[i] -= factor * rhs[k];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let sum: f64 = ((i + 1)..n).map(|j| m.get(i, j) * x[j]).sum();
        let diag = m.get(i, i);
        if diag.abs() < PIVOT_TOLERANCE {
            return Err(NewtonError::singular(SolveStage::BackSubstitution, i, diag));
        }
        x[i] = (rhs[i] - sum) / diag;
    }

    Ok(x)
}
