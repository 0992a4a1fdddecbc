// ============================================================================
// Numeric Engine Library
// Stateless library of pure numeric functions with a thin calculator caller
// ============================================================================

//! # Numeric Engine
//!
//! A stateless library of pure numeric functions operating on machine
//! floating-point and integer values, consumed by a thin command-line
//! calculator front-end.
//!
//! ## Features
//!
//! - **Pure functions only** - no shared state, no I/O, every call is
//!   independently reproducible
//! - **Explicit validation contracts** - structurally invalid inputs return
//!   errors with fixed messages; IEEE-754 special values pass through
//! - **Number theory** - primality (wheel-of-6 trial division), factorial,
//!   Fibonacci, GCD/LCM, prime sieve
//! - **Token dispatch** - a small vocabulary mapping calculator tokens onto
//!   operations, shared by batch and interactive callers
//!
//! ## Example
//!
//! ```rust
//! use numeric_engine::prelude::*;
//!
//! let evaluator = Evaluator::new();
//!
//! let sum = evaluator.evaluate(Operation::Add, &[5.0, 3.0])?;
//! assert_eq!(sum, Value::Real(8.0));
//!
//! let primes = evaluator.evaluate(Operation::GeneratePrimes, &[10.0])?;
//! assert_eq!(primes, Value::Sequence(vec![2, 3, 5, 7]));
//!
//! // Failures carry fixed messages and are never retried
//! let err = evaluator.evaluate(Operation::Divide, &[1.0, 0.0]).unwrap_err();
//! assert_eq!(err.to_string(), "Division by zero is not allowed");
//! # Ok::<(), EngineError>(())
//! ```

pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::Evaluator;
    pub use crate::interfaces::{Arity, Operation, Value};
    pub use crate::numeric::{EngineError, EngineResult};
}
