//! Hard-coded reference system shared with the CLI and WASM frontends.
//!
//! ```text
//! f₁ = x₁ + e^(x₁−1) + (x₂+x₃)² − 27
//! f₂ = x₁·e^(x₂−2) + x₃² − 10
//! f₃ = x₃ + sin(x₂−2) + x₂² − 7
//! ```

use super::EquationSet;

/// Dimension of the reference system.
pub const REFERENCE_DIMENSION: usize = 3;

/// Starting point used when the caller supplies none.
pub const REFERENCE_GUESS: [f64; REFERENCE_DIMENSION] = [1.0, 2.0, 3.0];

/// Build the three-equation reference system.
pub fn reference_system() -> EquationSet {
    let set = EquationSet {
        equations: vec![
            Box::new(|x: &[f64]| x[0] + (x[0] - 1.0).exp() + (x[1] + x[2]).powi(2) - 27.0),
            Box::new(|x: &[f64]| x[0] * (x[1] - 2.0).exp() + x[2] * x[2] - 10.0),
            Box::new(|x: &[f64]| x[2] + (x[1] - 2.0).sin() + x[1] * x[1] - 7.0),
        ],
    };
    debug_assert_eq!(set.dimension(), REFERENCE_DIMENSION);
    set
}
