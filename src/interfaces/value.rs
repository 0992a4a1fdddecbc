// ============================================================================
// Result Values
// Typed results produced by engine evaluation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value produced by evaluating an operation.
///
/// `Display` renders the way the calculator front-end reports results:
/// reals with two-decimal precision, sequences as a bracketed list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Real-valued result (may be NaN or infinite per IEEE-754)
    Real(f64),
    /// Integer result (factorial, fibonacci, gcd, lcm)
    Int(i64),
    /// Boolean result (even / prime checks)
    Bool(bool),
    /// Ordered finite sequence of integers (prime generation)
    Sequence(Vec<i64>),
}

impl Value {
    /// The real value, if this is a `Real`.
    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer value, if this is an `Int`.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(v) => write!(f, "{:.2}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Sequence(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_real_two_decimals() {
        assert_eq!(Value::Real(2.5).to_string(), "2.50");
        assert_eq!(Value::Real(-0.676).to_string(), "-0.68");
        assert_eq!(Value::Real(3.0).to_string(), "3.00");
    }

    #[test]
    fn test_display_int_and_bool() {
        assert_eq!(Value::Int(5040).to_string(), "5040");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_display_sequence() {
        assert_eq!(Value::Sequence(vec![2, 3, 5, 7]).to_string(), "[2, 3, 5, 7]");
        assert_eq!(Value::Sequence(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Real(1.5).as_real(), Some(1.5));
        assert_eq!(Value::Int(7).as_real(), None);
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Bool(true).as_int(), None);
    }
}
