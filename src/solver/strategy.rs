//! Linear-solve strategies for the Newton step.

use crate::error::Result;
use crate::linalg::{solve_pivoted, LuFactors};
use crate::system::EquationSet;

/// Computes the Newton step Δx for the current iterate.
///
/// The driver applies `X ← X − Δx` and checks convergence; a strategy only
/// decides how `J·Δx = F(X)` is formed and solved.
pub trait StepStrategy {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Compute Δx at `x`.
    fn step(&mut self, system: &EquationSet, x: &[f64]) -> Result<Vec<f64>>;
}

/// Full Newton: fresh Jacobian and pivoted elimination every iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullNewton;

impl StepStrategy for FullNewton {
    fn name(&self) -> &'static str {
        "full"
    }

    fn step(&mut self, system: &EquationSet, x: &[f64]) -> Result<Vec<f64>> {
        let lin = system.linearize(x)?;
        solve_pivoted(&lin.jacobian, &lin.residual)
    }
}

/// Chord Newton: the Jacobian at the starting point is factored once and the
/// factors are reused for every later step.
#[derive(Debug, Clone)]
pub struct ChordNewton {
    factors: LuFactors,
}

impl ChordNewton {
    /// Linearize `system` at `x0` and factor the Jacobian.
    pub fn at(system: &EquationSet, x0: &[f64]) -> Result<Self> {
        let lin = system.linearize(x0)?;
        let factors = LuFactors::factor(&lin.jacobian)?;
        Ok(Self { factors })
    }

    /// The frozen factors.
    pub fn factors(&self) -> &LuFactors {
        &self.factors
    }
}

impl StepStrategy for ChordNewton {
    fn name(&self) -> &'static str {
        "chord"
    }

    fn step(&mut self, system: &EquationSet, x: &[f64]) -> Result<Vec<f64>> {
        let f = system.residual(x)?;
        self.factors.solve(&f)
    }
}
