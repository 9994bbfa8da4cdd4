//! Error types for the Newton solver.
//!
//! This module provides a unified error type [`NewtonError`] that covers
//! all error conditions that can occur while validating a solve request,
//! evaluating the equation set, and solving the linearized systems.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`NewtonError`].
pub type Result<T> = std::result::Result<T, NewtonError>;

/// Where in a linear solve a degenerate pivot was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStage {
    /// Pivot selection during Gaussian elimination.
    Elimination,
    /// Diagonal check during back-substitution of the eliminated system.
    BackSubstitution,
    /// Diagonal of U while computing the Doolittle factors.
    Factorization,
    /// Diagonal of U while reusing the factors for a new right-hand side.
    TriangularSolve,
}

impl fmt::Display for SolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStage::Elimination => "elimination",
            SolveStage::BackSubstitution => "back-substitution",
            SolveStage::Factorization => "LU factorization",
            SolveStage::TriangularSolve => "triangular solve",
        };
        f.write_str(name)
    }
}

/// Unified error type for all solver operations.
#[derive(Error, Debug)]
pub enum NewtonError {
    // ============ Input Errors ============
    /// Vector or matrix size does not match the system dimension
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Solver parameter outside its valid range
    #[error("Invalid solver parameter: {message}")]
    InvalidParameter { message: String },

    /// Text supplied for a numeric field could not be parsed
    #[error("Cannot parse {field} from '{value}'")]
    ParseError { field: String, value: String },

    // ============ Numerical Errors ============
    /// A pivot fell below the singularity tolerance
    #[error("Zero (or nearly zero) pivot {pivot:.3e} at row {index} during {stage} - matrix may be singular or require pivoting")]
    SingularMatrix {
        stage: SolveStage,
        index: usize,
        pivot: f64,
    },
}

impl NewtonError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a singular matrix error
    pub fn singular(stage: SolveStage, index: usize, pivot: f64) -> Self {
        Self::SingularMatrix {
            stage,
            index,
            pivot,
        }
    }

    /// Whether this error reports a degenerate pivot.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Check that a slice has the expected dimension.
    pub(crate) fn check_len(what: &str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Self::invalid_input(format!(
                "{what} has length {actual}, expected {expected}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message_names_stage() {
        let err = NewtonError::singular(SolveStage::Factorization, 2, 0.0);
        let msg = err.to_string();
        assert!(msg.contains("LU factorization"));
        assert!(msg.contains("row 2"));
        assert!(err.is_singular());
    }

    #[test]
    fn test_check_len() {
        assert!(NewtonError::check_len("x", 3, 3).is_ok());
        let err = NewtonError::check_len("x", 2, 3).unwrap_err();
        assert!(matches!(err, NewtonError::InvalidInput { .. }));
        assert!(!err.is_singular());
    }
}
