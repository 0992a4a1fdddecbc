// ============================================================================
// Aggregate Operations
// Reductions over finite sequences of real values
// ============================================================================

use super::errors::{EngineError, EngineResult};

const EMPTY_INPUT: &str = "Input values must not be empty";

/// Arithmetic mean of `values`.
///
/// # Errors
/// Returns `InvalidArgument` when `values` is empty.
pub fn average(values: &[f64]) -> EngineResult<f64> {
    if values.is_empty() {
        return Err(EngineError::InvalidArgument(EMPTY_INPUT));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Maximum element of `values`.
///
/// # Errors
/// Returns `InvalidArgument` when `values` is empty.
pub fn max(values: &[f64]) -> EngineResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(EngineError::InvalidArgument(EMPTY_INPUT))
}

/// Minimum element of `values`.
///
/// # Errors
/// Returns `InvalidArgument` when `values` is empty.
pub fn min(values: &[f64]) -> EngineResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(EngineError::InvalidArgument(EMPTY_INPUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_average() {
        assert_close(average(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
        assert_close(average(&[10.0, 20.0, 30.0]).unwrap(), 20.0);
        assert_close(average(&[-1.0, 0.0, 1.0]).unwrap(), 0.0);
        assert_close(average(&[2.5, 3.5, 4.5]).unwrap(), 3.5);
    }

    #[test]
    fn test_max() {
        assert_close(max(&[1.0, 5.0, 3.0, 9.0, 2.0]).unwrap(), 9.0);
        assert_close(max(&[-10.0, -5.0, -15.0, -2.0]).unwrap(), -2.0);
        assert_close(max(&[7.5]).unwrap(), 7.5);
        assert_close(max(&[-1.0, 0.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_min() {
        assert_close(min(&[1.0, 5.0, 3.0, 9.0, 2.0]).unwrap(), 1.0);
        assert_close(min(&[-10.0, -5.0, -15.0, -2.0]).unwrap(), -15.0);
        assert_close(min(&[7.5]).unwrap(), 7.5);
        assert_close(min(&[-1.0, 0.0, 1.0]).unwrap(), -1.0);
    }

    #[test]
    fn test_empty_input() {
        for result in [average(&[]), max(&[]), min(&[])] {
            assert_eq!(result, Err(EngineError::InvalidArgument(EMPTY_INPUT)));
        }
    }
}
