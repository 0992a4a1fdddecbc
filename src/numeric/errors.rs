// ============================================================================
// Engine Errors
// Error types for numeric engine operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors that can occur during numeric engine operations.
///
/// Every failure carries a fixed, descriptive message and is raised
/// synchronously at the offending call. Nothing is retried internally.
// Serialize only: the static message payload cannot be deserialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EngineError {
    /// Divisor was exactly zero
    DivisionByZero,
    /// Input violated an operation precondition
    InvalidArgument(&'static str),
    /// Operation token not recognized by the dispatcher
    UnknownOperation,
    /// Too few operands for the requested operation
    InvalidOperandCount {
        /// Minimum number of operands the operation accepts
        expected: usize,
        /// Number of operands actually supplied
        actual: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DivisionByZero => write!(f, "Division by zero is not allowed"),
            EngineError::InvalidArgument(message) => write!(f, "{}", message),
            EngineError::UnknownOperation => write!(f, "Unknown operation"),
            EngineError::InvalidOperandCount { expected, actual } => write!(
                f,
                "expected at least {} operand(s), got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for numeric engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            EngineError::InvalidArgument("Cannot calculate square root of negative number")
                .to_string(),
            "Cannot calculate square root of negative number"
        );
        assert_eq!(
            EngineError::InvalidOperandCount {
                expected: 2,
                actual: 1
            }
            .to_string(),
            "expected at least 2 operand(s), got 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EngineError::DivisionByZero, EngineError::DivisionByZero);
        assert_ne!(
            EngineError::DivisionByZero,
            EngineError::InvalidArgument("x")
        );
    }
}
