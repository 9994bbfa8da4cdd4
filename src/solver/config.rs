//! Solver configuration.

use crate::error::{NewtonError, Result};

use super::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};

/// Stopping parameters shared by both Newton runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Stop once the infinity norm of the step drops below this.
    pub epsilon: f64,
    /// Hard cap on Newton iterations per run.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence threshold on ‖Δx‖∞.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject non-positive epsilon and a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() || self.epsilon <= 0.0 || self.epsilon.is_infinite() {
            return Err(NewtonError::invalid_parameter(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(NewtonError::invalid_parameter(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}
