//! Doolittle LU factorization without pivoting.
//!
//! The factors are packed into one combined matrix `C`: entries strictly
//! below the diagonal hold `L` (whose unit diagonal is implicit), entries on
//! and above the diagonal hold `U`. Once computed, the factors can be reused
//! for any number of right-hand sides at O(n²) per solve.
//!
//! No row exchanges are performed, so matrices that need pivoting (for
//! example a zero in the leading position) fail here even though
//! [`solve_pivoted`](super::solve_pivoted) handles them.

use crate::error::{NewtonError, Result, SolveStage};

use super::matrix::DenseMatrix;
use super::PIVOT_TOLERANCE;

/// Packed Doolittle factors of a square matrix.
#[derive(Debug, Clone)]
pub struct LuFactors {
    /// Combined factor matrix (strict lower part = L, upper part = U)
    combined: DenseMatrix,
}

impl LuFactors {
    /// Factor `A = L·U` with `L` unit lower triangular.
    pub fn factor(a: &DenseMatrix) -> Result<Self> {
        let n = a.size();
        let mut c = DenseMatrix::zeros(n);

        for i in 0..n {
            // Row i of U
            for j in i..n {
                let sum: f64 = (0..i).map(|k| c.get(i, k) * c.get(k, j)).sum();
                c.set(i, j, a.get(i, j) - sum);
            }

            let pivot = c.get(i, i);
            if pivot.abs() < PIVOT_TOLERANCE {
                return Err(NewtonError::singular(SolveStage::Factorization, i, pivot));
            }

            // Column i of L
            for j in (i + 1)..n {
                let sum: f64 = (0..i).map(|k| c.get(j, k) * c.get(k, i)).sum();
                c.set(j, i, (a.get(j, i) - sum) / pivot);
            }
        }

        Ok(Self { combined: c })
    }

    /// Dimension of the factored matrix.
    pub fn size(&self) -> usize {
        self.combined.size()
    }

    /// The combined factor matrix `C`.
    pub fn combined(&self) -> &DenseMatrix {
        &self.combined
    }

    /// Unpack the unit lower triangular factor.
    pub fn lower(&self) -> DenseMatrix {
        let n = self.size();
        let mut l = DenseMatrix::identity(n);
        for i in 0..n {
            for j in 0..i {
                l.set(i, j, self.combined.get(i, j));
            }
        }
        l
    }

    /// Unpack the upper triangular factor.
    pub fn upper(&self) -> DenseMatrix {
        let n = self.size();
        let mut u = DenseMatrix::zeros(n);
        for i in 0..n {
            for j in i..n {
                u.set(i, j, self.combined.get(i, j));
            }
        }
        u
    }

    /// Solve `L·U·x = b` with forward then back substitution.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>> {
        let n = self.size();
        NewtonError::check_len("right-hand side", b.len(), n)?;
        let c = &self.combined;

        // Forward substitution (L * y = b)
        let mut y = vec![0.0; n];
        for i in 0..n {
            let sum: f64 = (0..i).map(|j| c.get(i, j) * y[j]).sum();
            y[i] = b[i] - sum;
        }

        // Back substitution (U * x = y)
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let sum: f64 = ((i + 1)..n).map(|j| c.get(i, j) * x[j]).sum();
            let diag = c.get(i, i);
            if diag.abs() < PIVOT_TOLERANCE {
                return Err(NewtonError::singular(SolveStage::TriangularSolve, i, diag));
            }
            x[i] = (y[i] - sum) / diag;
        }

        Ok(x)
    }
}
