//! Parsing of user-supplied solver inputs.
//!
//! Frontends collect epsilon, the iteration cap, and the initial guess as
//! text. Epsilon and the cap are lenient: missing, unparsable, or
//! non-positive values fall back to the defaults. The initial guess is
//! strict, since there is no sensible default for a bad component.

use log::warn;

use crate::error::{NewtonError, Result};
use crate::solver::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};

/// Parse epsilon, substituting [`DEFAULT_EPSILON`] for invalid input.
pub fn parse_epsilon(text: Option<&str>) -> f64 {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        None => DEFAULT_EPSILON,
        Some(t) => match t.parse::<f64>() {
            Ok(eps) if eps > 0.0 && eps.is_finite() => eps,
            _ => {
                warn!("invalid epsilon '{t}', using {DEFAULT_EPSILON}");
                DEFAULT_EPSILON
            }
        },
    }
}

/// Parse the iteration cap, substituting [`DEFAULT_MAX_ITERATIONS`] for
/// invalid input.
pub fn parse_max_iterations(text: Option<&str>) -> usize {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        None => DEFAULT_MAX_ITERATIONS,
        Some(t) => match t.parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_MAX_ITERATIONS),
            _ => {
                warn!("invalid iteration cap '{t}', using {DEFAULT_MAX_ITERATIONS}");
                DEFAULT_MAX_ITERATIONS
            }
        },
    }
}

/// Parse a vector of reals separated by commas and/or whitespace.
pub fn parse_vector(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, t)| {
            t.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| NewtonError::parse(format!("x{}", i + 1), t))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_defaults() {
        assert_eq!(parse_epsilon(None), 1e-6);
        assert_eq!(parse_epsilon(Some("")), 1e-6);
        assert_eq!(parse_epsilon(Some("abc")), 1e-6);
        assert_eq!(parse_epsilon(Some("-1e-3")), 1e-6);
        assert_eq!(parse_epsilon(Some("0")), 1e-6);
        assert_eq!(parse_epsilon(Some(" 1e-9 ")), 1e-9);
    }

    #[test]
    fn test_max_iterations_defaults() {
        assert_eq!(parse_max_iterations(None), 1000);
        assert_eq!(parse_max_iterations(Some("0")), 1000);
        assert_eq!(parse_max_iterations(Some("-5")), 1000);
        assert_eq!(parse_max_iterations(Some("2.5")), 1000);
        assert_eq!(parse_max_iterations(Some("25")), 25);
    }

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("1, 2,3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(parse_vector("1.5 -2e-1").unwrap(), vec![1.5, -0.2]);
        assert!(parse_vector("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_vector_reports_bad_component() {
        let err = parse_vector("1, x, 3").unwrap_err();
        match err {
            NewtonError::ParseError { field, value } => {
                assert_eq!(field, "x2");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_vector("1, NaN").is_err());
    }
}
