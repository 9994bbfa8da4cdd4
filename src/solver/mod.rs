//! Newton solver.
//!
//! ## Newton's method
//!
//! Starting from X₀, each iteration solves the linearized system
//!
//! ```text
//! J(Xₖ) · Δx = F(Xₖ)
//! Xₖ₊₁ = Xₖ − Δx
//! ```
//!
//! and stops once ‖Δx‖∞ < epsilon or the iteration cap is reached.
//!
//! Two step strategies share the same driver ([`iterate`]):
//!
//! - [`FullNewton`] re-linearizes at every iterate and solves with pivoted
//!   Gaussian elimination.
//! - [`ChordNewton`] linearizes once at X₀, factors `J(X₀) = L·U` without
//!   pivoting, and reuses the factors for every step. Steps are cheaper but
//!   convergence is only linear, and the run fails outright when `J(X₀)`
//!   needs row exchanges.

mod config;
mod newton;
mod strategy;

pub use config::SolverConfig;
pub use newton::{iterate, NewtonSolver, ReuseOutcome, RunOutcome, Solution};
pub use strategy::{ChordNewton, FullNewton, StepStrategy};

/// Default convergence threshold on ‖Δx‖∞.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default iteration cap per run.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
