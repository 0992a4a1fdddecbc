// ============================================================================
// Real-Valued Operations
// Pure arithmetic over IEEE-754 double-precision values
// ============================================================================

use super::errors::{EngineError, EngineResult};

/// Add two values.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two values.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Follows IEEE-754 semantics for every nonzero divisor, including
/// infinities and NaN operands. Only an exactly-zero divisor is rejected.
///
/// # Errors
/// Returns `DivisionByZero` when `b == 0`.
#[inline]
pub fn divide(a: f64, b: f64) -> EngineResult<f64> {
    if b == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    Ok(a / b)
}

/// Compute `percentage` percent of `value`.
#[inline]
pub fn percentage(value: f64, percentage: f64) -> f64 {
    (value * percentage) / 100.0
}

/// Absolute value.
#[inline]
pub fn absolute(value: f64) -> f64 {
    value.abs()
}

/// Round `value` to `places` decimal digits.
///
/// Rounds half-up on the scaled value (`floor(value * 10^places + 0.5)`),
/// so ties go toward positive infinity: `round_to(2.5, 0) == 3.0` and
/// `round_to(-2.5, 0) == -2.0`.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale + 0.5).floor() / scale
}

/// Raise `base` to `exponent` using real exponentiation.
///
/// Negative, fractional, and zero exponents are all accepted; undefined
/// combinations (e.g. negative base with fractional exponent) yield NaN or
/// infinity per IEEE-754 rather than an error.
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Nonnegative square root of `value`.
///
/// # Errors
/// Returns `InvalidArgument` when the radicand is negative.
#[inline]
pub fn square_root(value: f64) -> EngineResult<f64> {
    if value < 0.0 {
        return Err(EngineError::InvalidArgument(
            "Cannot calculate square root of negative number",
        ));
    }
    Ok(value.sqrt())
}
