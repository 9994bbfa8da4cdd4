//! # Newton Chord
//!
//! Newton's method for square nonlinear systems F(X) = 0 with a
//! finite-difference Jacobian.
//!
//! This library provides:
//! - Residual evaluation for an ordered set of scalar equations
//! - Forward-difference Jacobian approximation
//! - Gaussian elimination with partial pivoting
//! - Doolittle LU factorization with packed factors, reusable across solves
//! - A Newton driver that runs full Newton and chord Newton side by side
//!
//! ## Architecture
//!
//! - [`system`] - Equation sets, the Jacobian approximation, and the built-in
//!   reference system
//! - [`linalg`] - Dense matrices and the two linear solvers
//! - [`solver`] - Step strategies, the iteration driver, and [`NewtonSolver`]
//! - [`input`] - Parsing of user-supplied epsilon, iteration cap, and guess
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use newton_chord::NewtonSolver;
//!
//! // x² + y² = 4, x = y
//! let solver = NewtonSolver::new(vec![
//!     Box::new(|x: &[f64]| x[0] * x[0] + x[1] * x[1] - 4.0),
//!     Box::new(|x: &[f64]| x[0] - x[1]),
//! ])
//! .unwrap();
//!
//! let result = solver.solve(&[1.0, 2.0], 1e-8, 100).unwrap();
//! assert!(result.primal_converged);
//! assert!((result.solution[0] - 2f64.sqrt()).abs() < 1e-6);
//! println!("chord iterations: {}", result.reuse_iterations());
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! newton --x0 1.2,2.2,2.8 --epsilon 1e-8 --max-iterations 200
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmNewtonSolver } from 'newton_chord';
//!
//! const solver = new WasmNewtonSolver();
//! const x = solver.solve(new Float64Array([1.2, 2.2, 2.8]), 1e-6, 1000);
//! ```

pub mod error;
pub mod input;
pub mod linalg;
pub mod solver;
pub mod system;

// Re-export main types for convenience
pub use error::{NewtonError, Result};
pub use solver::{NewtonSolver, ReuseOutcome, Solution, SolverConfig};
pub use system::EquationSet;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNewtonSolver;
