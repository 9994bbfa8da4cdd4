//! Dense linear algebra for the Newton step.
//!
//! Two ways of solving `J·Δx = F` are provided:
//!
//! - [`solve_pivoted`] - Gaussian elimination with partial pivoting on the
//!   augmented matrix `[A | b]`, recomputed from scratch on every call (O(n³)).
//! - [`LuFactors`] - a one-time Doolittle factorization `A = L·U` without
//!   pivoting, packed into a single combined matrix and reused for each new
//!   right-hand side (O(n²) per solve).

mod gauss;
mod lu;
mod matrix;

pub use gauss::solve_pivoted;
pub use lu::LuFactors;
pub use matrix::{inf_norm, DenseMatrix};

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random diagonally dominant matrix with a matching right-hand side.
    fn dominant_system() -> impl Strategy<Value = (DenseMatrix, Vec<f64>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(-10.0f64..10.0, n * n),
                prop::collection::vec(-100.0f64..100.0, n),
            )
                .prop_map(move |(entries, b)| {
                    let mut a = DenseMatrix::zeros(n);
                    for i in 0..n {
                        for j in 0..n {
                            a.set(i, j, entries[i * n + j]);
                        }
                        let off: f64 = a.row(i).iter().map(|v| v.abs()).sum();
                        a.set(i, i, off + 1.0);
                    }
                    (a, b)
                })
        })
    }

    proptest! {
        #[test]
        fn proptest_pivoted_residual_is_small((a, b) in dominant_system()) {
            let x = solve_pivoted(&a, &b).unwrap();
            let ax = a.mul_vec(&x).unwrap();
            let scale = a.max_abs().max(1.0) * inf_norm(&x).max(1.0);
            let residual: Vec<f64> = ax.iter().zip(&b).map(|(p, q)| p - q).collect();
            prop_assert!(inf_norm(&residual) <= 1e-10 * scale);
        }

        #[test]
        fn proptest_lu_reconstructs_and_matches_pivoted((a, b) in dominant_system()) {
            let lu = LuFactors::factor(&a).unwrap();
            let product = lu.lower().mul(&lu.upper()).unwrap();
            let n = a.size();
            for i in 0..n {
                for j in 0..n {
                    prop_assert!((product.get(i, j) - a.get(i, j)).abs() <= 1e-10 * a.max_abs());
                }
            }

            let x_lu = lu.solve(&b).unwrap();
            let x_ge = solve_pivoted(&a, &b).unwrap();
            let scale = inf_norm(&x_ge).max(1.0);
            for (p, q) in x_lu.iter().zip(&x_ge) {
                prop_assert!((p - q).abs() <= 1e-9 * scale);
            }
        }
    }
}
