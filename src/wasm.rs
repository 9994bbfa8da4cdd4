//! WASM bindings for Newton Chord.
//!
//! This module exposes the built-in reference system to JavaScript.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNewtonSolver } from 'newton_chord';
//!
//! await init();
//!
//! const solver = new WasmNewtonSolver();
//! const x = solver.solve(new Float64Array([1.2, 2.2, 2.8]), 1e-6, 1000);
//! console.log(x, solver.primal_iterations, solver.reuse_iterations);
//! ```

use wasm_bindgen::prelude::*;

use crate::input;
use crate::solver::NewtonSolver;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible solver for the reference system.
#[wasm_bindgen]
pub struct WasmNewtonSolver {
    solver: NewtonSolver,
    primal_iterations: usize,
    reuse_iterations: i64,
}

#[wasm_bindgen]
impl WasmNewtonSolver {
    /// Create a solver for the three-equation reference system.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmNewtonSolver {
        Self {
            solver: NewtonSolver::reference(),
            primal_iterations: 0,
            reuse_iterations: 0,
        }
    }

    /// Solve from `x0`.
    ///
    /// Non-positive `epsilon` or `max_iterations` are replaced by the
    /// defaults (1e-6 and 1000). Returns the solution vector, or throws the
    /// solver error message.
    #[wasm_bindgen]
    pub fn solve(&mut self, x0: &[f64], epsilon: f64, max_iterations: i32) -> Result<Vec<f64>, JsValue> {
        let epsilon = input::parse_epsilon(Some(&epsilon.to_string()));
        let max_iterations = input::parse_max_iterations(Some(&max_iterations.to_string()));

        let result = self
            .solver
            .solve(x0, epsilon, max_iterations)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.primal_iterations = result.primal_iterations;
        self.reuse_iterations = result.reuse_iterations();
        Ok(result.solution)
    }

    /// Iterations used by the last full Newton run.
    #[wasm_bindgen(getter)]
    pub fn primal_iterations(&self) -> usize {
        self.primal_iterations
    }

    /// Iterations used by the last chord run, or -1 if it failed.
    #[wasm_bindgen(getter)]
    pub fn reuse_iterations(&self) -> i64 {
        self.reuse_iterations
    }

    /// Number of unknowns.
    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> usize {
        self.solver.dimension()
    }
}

impl Default for WasmNewtonSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
