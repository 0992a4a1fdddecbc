// ============================================================================
// Numeric Module
// Stateless, side-effect-free numeric computations
// ============================================================================
//
// This module provides:
// - real: arithmetic over IEEE-754 doubles (add .. square_root)
// - integer: number-theory functions over i64 (primality, factorial, gcd, ...)
// - aggregate: reductions over finite sequences (average, max, min)
// - EngineError: error types shared by all operations
//
// Design principles:
// - Every function is pure; identical inputs always yield identical outputs
// - Validation failures return Result (no panics)
// - IEEE-754 special values (NaN, infinity) pass through; only structurally
//   invalid inputs are rejected
// - Integer overflow wraps rather than erroring; documented safe ranges

pub mod aggregate;
pub mod integer;
pub mod real;

mod errors;

pub use errors::{EngineError, EngineResult};
