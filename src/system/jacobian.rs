//! Forward-difference Jacobian.

use crate::error::Result;
use crate::linalg::DenseMatrix;

use super::EquationSet;

/// Fixed finite-difference step h.
pub const JACOBIAN_STEP: f64 = 1e-6;

/// Jacobian and residual evaluated at the same point.
#[derive(Debug, Clone)]
pub struct Linearization {
    /// J[i,j] ≈ ∂fᵢ/∂xⱼ
    pub jacobian: DenseMatrix,
    /// F(X), the baseline of the differences
    pub residual: Vec<f64>,
}

impl EquationSet {
    /// Approximate the Jacobian at `x` by forward differences:
    /// `J[i,j] = (fᵢ(X + h·eⱼ) - fᵢ(X)) / h`.
    ///
    /// F(X) is computed once and returned alongside J. `x` is not modified.
    pub fn linearize(&self, x: &[f64]) -> Result<Linearization> {
        let n = self.dimension();
        let residual = self.residual(x)?;

        let mut jacobian = DenseMatrix::zeros(n);
        let mut probe = x.to_vec();
        let mut shifted = vec![0.0; n];

        for j in 0..n {
            let xj = probe[j];
            probe[j] = xj + JACOBIAN_STEP;
            self.residual_into(&probe, &mut shifted)?;
            for i in 0..n {
                jacobian.set(i, j, (shifted[i] - residual[i]) / JACOBIAN_STEP);
            }
            probe[j] = xj;
        }

        Ok(Linearization { jacobian, residual })
    }
}
