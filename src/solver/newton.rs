//! Newton iteration driver and the two-run solver.

use log::{debug, info, warn};

use crate::error::{NewtonError, Result};
use crate::linalg::inf_norm;
use crate::system::{builtin, Equation, EquationSet};

use super::config::SolverConfig;
use super::strategy::{ChordNewton, FullNewton, StepStrategy};

/// Result of one Newton run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Final iterate
    pub solution: Vec<f64>,
    /// Iterations performed (1-based; equals the cap when not converged)
    pub iterations: usize,
    /// Whether ‖Δx‖∞ dropped below epsilon
    pub converged: bool,
}

/// Outcome of the chord (factorization reuse) run.
#[derive(Debug)]
pub enum ReuseOutcome {
    /// Step norm dropped below epsilon.
    Converged {
        iterations: usize,
        solution: Vec<f64>,
    },
    /// Iteration cap reached.
    Exhausted {
        iterations: usize,
        solution: Vec<f64>,
    },
    /// Factorization or a triangular solve failed.
    Failed(NewtonError),
}

impl ReuseOutcome {
    fn from_run(run: Result<RunOutcome>) -> Self {
        match run {
            Ok(run) if run.converged => Self::Converged {
                iterations: run.iterations,
                solution: run.solution,
            },
            Ok(run) => Self::Exhausted {
                iterations: run.iterations,
                solution: run.solution,
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Iteration count, or `None` if the run failed.
    pub fn iterations(&self) -> Option<usize> {
        match self {
            Self::Converged { iterations, .. } | Self::Exhausted { iterations, .. } => {
                Some(*iterations)
            }
            Self::Failed(_) => None,
        }
    }

    /// Final iterate, or `None` if the run failed.
    pub fn solution(&self) -> Option<&[f64]> {
        match self {
            Self::Converged { solution, .. } | Self::Exhausted { solution, .. } => Some(solution),
            Self::Failed(_) => None,
        }
    }

    /// The error that stopped the run, if any.
    pub fn error(&self) -> Option<&NewtonError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of [`NewtonSolver::solve`].
#[derive(Debug)]
pub struct Solution {
    /// Final iterate of the full Newton run
    pub solution: Vec<f64>,
    /// Iterations used by the full Newton run
    pub primal_iterations: usize,
    /// Whether the full Newton run met the step tolerance
    pub primal_converged: bool,
    /// Outcome of the chord run
    pub reuse: ReuseOutcome,
}

impl Solution {
    /// Chord iteration count, with -1 standing for a failed run.
    pub fn reuse_iterations(&self) -> i64 {
        self.reuse.iterations().map_or(-1, |n| n as i64)
    }
}

/// Run Newton iterations from `x0` with the given step strategy.
///
/// Each iteration applies `X ← X − Δx` and stops as soon as ‖Δx‖∞ < epsilon.
/// Reaching the iteration cap is not an error; it is reported through
/// [`RunOutcome::converged`].
pub fn iterate<S: StepStrategy + ?Sized>(
    strategy: &mut S,
    system: &EquationSet,
    x0: &[f64],
    config: &SolverConfig,
) -> Result<RunOutcome> {
    NewtonError::check_len("initial guess", x0.len(), system.dimension())?;
    let mut x = x0.to_vec();

    for iter in 1..=config.max_iterations {
        let dx = strategy.step(system, &x)?;
        for (xi, di) in x.iter_mut().zip(&dx) {
            *xi -= di;
        }

        let step_norm = inf_norm(&dx);
        debug!("{} newton iteration {iter}: |dx| = {step_norm:.3e}", strategy.name());

        if step_norm < config.epsilon {
            info!("{} newton converged after {iter} iterations", strategy.name());
            return Ok(RunOutcome {
                solution: x,
                iterations: iter,
                converged: true,
            });
        }
    }

    warn!(
        "{} newton reached the iteration cap ({}) without converging",
        strategy.name(),
        config.max_iterations
    );
    Ok(RunOutcome {
        solution: x,
        iterations: config.max_iterations,
        converged: false,
    })
}

/// Newton solver for a fixed equation set.
///
/// Every call to [`solve`](Self::solve) runs full Newton (fresh Jacobian and
/// pivoted elimination each step) followed by chord Newton (Jacobian at the
/// starting point factored once). The full run's result is returned; the
/// chord run is reported for comparison and its failures never fail the call.
#[derive(Debug)]
pub struct NewtonSolver {
    system: EquationSet,
}

impl NewtonSolver {
    /// Create a solver from an ordered list of equations.
    pub fn new(equations: Vec<Equation>) -> Result<Self> {
        Ok(Self::from_system(EquationSet::new(equations)?))
    }

    /// Create a solver for an existing equation set.
    pub fn from_system(system: EquationSet) -> Self {
        Self { system }
    }

    /// Create a solver for the built-in reference system.
    pub fn reference() -> Self {
        Self::from_system(builtin::reference_system())
    }

    /// The equation set being solved.
    pub fn system(&self) -> &EquationSet {
        &self.system
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.system.dimension()
    }

    /// Solve F(X) = 0 starting from `initial_guess`.
    pub fn solve(
        &self,
        initial_guess: &[f64],
        epsilon: f64,
        max_iterations: usize,
    ) -> Result<Solution> {
        let config = SolverConfig::new()
            .with_epsilon(epsilon)
            .with_max_iterations(max_iterations);
        self.solve_with(initial_guess, &config)
    }

    /// Solve F(X) = 0 with an explicit configuration.
    pub fn solve_with(&self, initial_guess: &[f64], config: &SolverConfig) -> Result<Solution> {
        config.validate()?;
        NewtonError::check_len("initial guess", initial_guess.len(), self.dimension())?;

        let primal = iterate(&mut FullNewton, &self.system, initial_guess, config)?;

        let reuse = ReuseOutcome::from_run(
            ChordNewton::at(&self.system, initial_guess)
                .and_then(|mut chord| iterate(&mut chord, &self.system, initial_guess, config)),
        );
        if let ReuseOutcome::Failed(err) = &reuse {
            warn!("chord newton failed: {err}");
        }

        Ok(Solution {
            solution: primal.solution,
            primal_iterations: primal.iterations,
            primal_converged: primal.converged,
            reuse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use crate::system::builtin::REFERENCE_GUESS;

    #[test]
    fn test_reference_system_from_worked_start() {
        let solver = NewtonSolver::reference();
        let result = solver.solve(&REFERENCE_GUESS, 1e-6, 1000).unwrap();
        assert!(result.primal_converged);
        assert!(result.primal_iterations <= 1000);
        for f in solver.system().residual(&result.solution).unwrap() {
            assert!(f.abs() < 1e-5);
        }
    }

    #[test]
    fn test_reference_system_from_perturbed_start() {
        let solver = NewtonSolver::reference();
        let result = solver.solve(&[1.1, 2.1, 2.9], 1e-8, 1000).unwrap();
        assert!(result.primal_converged);
        assert!(solver.system().residual_norm(&result.solution).unwrap() < 1e-6);
        assert_abs_diff_eq!(result.solution[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.solution[1], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.solution[2], 3.0, epsilon = 1e-6);

        let chord = result.reuse.solution().unwrap();
        assert!(matches!(result.reuse, ReuseOutcome::Converged { .. }));
        assert!(solver.system().residual_norm(chord).unwrap() < 1e-5);
        // Chord steps converge linearly, full steps quadratically
        assert!(result.reuse_iterations() >= result.primal_iterations as i64);
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let guess = [1.3, 1.8, 3.2];
        let a = NewtonSolver::reference().solve(&guess, 1e-6, 1000).unwrap();
        let b = NewtonSolver::reference().solve(&guess, 1e-6, 1000).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.primal_iterations, b.primal_iterations);

        let solver = NewtonSolver::reference();
        let c = solver.solve(&guess, 1e-6, 1000).unwrap();
        let d = solver.solve(&guess, 1e-6, 1000).unwrap();
        assert_eq!(c.solution, d.solution);
        assert_eq!(c.reuse_iterations(), d.reuse_iterations());
    }

    #[test]
    fn test_invalid_parameters_rejected_before_iterating() {
        let solver = NewtonSolver::reference();
        for (eps, max) in [(0.0, 10), (-1.0, 10), (1e-6, 0)] {
            assert!(matches!(
                solver.solve(&REFERENCE_GUESS, eps, max),
                Err(NewtonError::InvalidParameter { .. })
            ));
        }
        assert!(matches!(
            solver.solve(&[1.0, 2.0], 1e-6, 10),
            Err(NewtonError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_cap_reached_is_normal_return() {
        let solver = NewtonSolver::reference();
        let result = solver.solve(&[2.0, 3.0, 4.0], 1e-14, 2).unwrap();
        assert!(!result.primal_converged);
        assert_eq!(result.primal_iterations, 2);
        assert!(result.reuse_iterations() <= 2);
    }

    #[test]
    fn test_singular_jacobian_fails_full_run() {
        // Both equations depend only on x, so J has a zero column
        let solver = NewtonSolver::new(vec![
            Box::new(|x: &[f64]| x[0] - 1.0),
            Box::new(|x: &[f64]| 2.0 * x[0] - 2.0),
        ])
        .unwrap();
        let err = solver.solve(&[0.0, 0.0], 1e-6, 100).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_chord_failure_is_contained() {
        // J = [[0, 1], [1, 0]]: needs pivoting, so only the chord run fails
        let solver = NewtonSolver::new(vec![
            Box::new(|x: &[f64]| x[1] - 1.0),
            Box::new(|x: &[f64]| x[0] - 2.0),
        ])
        .unwrap();
        let result = solver.solve(&[0.0, 0.0], 1e-6, 100).unwrap();
        assert!(result.primal_converged);
        assert_abs_diff_eq!(result.solution[0], 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.solution[1], 1.0, epsilon = 1e-6);
        assert_eq!(result.reuse_iterations(), -1);
        assert!(result.reuse.error().is_some_and(NewtonError::is_singular));
        assert!(result.reuse.solution().is_none());
    }

    #[test]
    fn test_iteration_counts_never_exceed_cap() {
        let solver = NewtonSolver::reference();
        for max in [1, 3, 7, 50] {
            let result = solver.solve(&[0.5, 1.5, 3.5], 1e-10, max).unwrap();
            assert!(result.primal_iterations <= max);
            assert!(result.reuse_iterations() <= max as i64);
        }
    }

    #[test]
    fn test_iterate_with_one_dimensional_system() {
        // x² - 2 = 0
        let system = EquationSet::new(vec![Box::new(|x: &[f64]| x[0] * x[0] - 2.0)]).unwrap();
        let run = iterate(&mut FullNewton, &system, &[1.0], &SolverConfig::new()).unwrap();
        assert!(run.converged);
        assert_abs_diff_eq!(run.solution[0], 2f64.sqrt(), epsilon = 1e-6);
    }
}
