//! Nonlinear equation systems F(X) = 0.
//!
//! An [`EquationSet`] is an ordered, immutable list of scalar functions
//! fᵢ: ℝⁿ → ℝ. The dimension n is the number of equations, and every
//! vector passed to the set must have exactly that length.
//!
//! ## Example
//!
//! ```
//! use newton_chord::system::EquationSet;
//!
//! // x² - 4 = 0, x·y - 1 = 0
//! let system = EquationSet::new(vec![
//!     Box::new(|x: &[f64]| x[0] * x[0] - 4.0),
//!     Box::new(|x: &[f64]| x[0] * x[1] - 1.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(system.dimension(), 2);
//! assert_eq!(system.residual(&[2.0, 0.5]).unwrap(), vec![0.0, 0.0]);
//! ```

pub mod builtin;
mod jacobian;

pub use jacobian::{Linearization, JACOBIAN_STEP};

use std::fmt;

use crate::error::{NewtonError, Result};
use crate::linalg::inf_norm;

/// A single scalar equation fᵢ(X).
pub type Equation = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Ordered set of n scalar equations in n unknowns.
pub struct EquationSet {
    equations: Vec<Equation>,
}

impl EquationSet {
    /// Create an equation set. The dimension is the number of equations.
    pub fn new(equations: Vec<Equation>) -> Result<Self> {
        if equations.is_empty() {
            return Err(NewtonError::invalid_parameter(
                "equation set must contain at least one equation",
            ));
        }
        Ok(Self { equations })
    }

    /// Number of equations (and unknowns).
    pub fn dimension(&self) -> usize {
        self.equations.len()
    }

    /// Evaluate F(X).
    pub fn residual(&self, x: &[f64]) -> Result<Vec<f64>> {
        let mut f = vec![0.0; self.dimension()];
        self.residual_into(x, &mut f)?;
        Ok(f)
    }

    /// Evaluate F(X) into an existing buffer.
    pub fn residual_into(&self, x: &[f64], out: &mut [f64]) -> Result<()> {
        let n = self.dimension();
        NewtonError::check_len("state vector", x.len(), n)?;
        NewtonError::check_len("residual buffer", out.len(), n)?;
        for (fi, eq) in out.iter_mut().zip(&self.equations) {
            *fi = eq(x);
        }
        Ok(())
    }

    /// Infinity norm of F(X).
    pub fn residual_norm(&self, x: &[f64]) -> Result<f64> {
        Ok(inf_norm(&self.residual(x)?))
    }
}

impl fmt::Debug for EquationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquationSet")
            .field("dimension", &self.dimension())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_pair() -> EquationSet {
        EquationSet::new(vec![
            Box::new(|x: &[f64]| x[0] + x[1] - 3.0),
            Box::new(|x: &[f64]| x[0] - x[1] - 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(
            EquationSet::new(Vec::new()),
            Err(NewtonError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_residual_in_equation_order() {
        let system = linear_pair();
        assert_eq!(system.residual(&[0.0, 0.0]).unwrap(), vec![-3.0, -1.0]);
        assert_eq!(system.residual(&[2.0, 1.0]).unwrap(), vec![0.0, 0.0]);
        assert_eq!(system.residual_norm(&[0.0, 0.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_residual_dimension_mismatch() {
        let system = linear_pair();
        assert!(matches!(
            system.residual(&[1.0, 2.0, 3.0]),
            Err(NewtonError::InvalidInput { .. })
        ));
        let mut short = [0.0; 1];
        assert!(system.residual_into(&[1.0, 2.0], &mut short).is_err());
    }
}
