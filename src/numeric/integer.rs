// ============================================================================
// Integer Operations
// Number-theory functions over 64-bit signed integers
// ============================================================================

use super::errors::{EngineError, EngineResult};

/// Check whether `n` is even. Works for negative values.
#[inline]
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Primality test by trial division with a wheel of 6.
///
/// After rejecting multiples of 2 and 3, only candidates of the form
/// `6k ± 1` up to `sqrt(n)` need to be checked. All `n <= 1` are
/// non-prime by definition.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i <= n / i avoids overflow of i * i near i64::MAX
    let mut i: i64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Factorial of `n`, computed as an iterative product.
///
/// Exact for `n <= 20`; larger inputs wrap in 64 bits rather than
/// erroring, matching the engine's overflow-is-not-an-error contract.
/// Callers needing stricter bounds must validate before calling.
///
/// # Errors
/// Returns `InvalidArgument` when `n` is negative.
pub fn factorial(n: i64) -> EngineResult<i64> {
    if n < 0 {
        return Err(EngineError::InvalidArgument(
            "Factorial is not defined for negative numbers",
        ));
    }

    let mut result: i64 = 1;
    for i in 2..=n {
        result = result.wrapping_mul(i);
    }
    Ok(result)
}

/// The `n`th Fibonacci number, with `fib(0) = 0` and `fib(1) = 1`.
///
/// Iterative, O(n) time and O(1) space. Wraps in 64 bits past `fib(92)`.
///
/// # Errors
/// Returns `InvalidArgument` when `n` is negative.
pub fn fibonacci(n: i64) -> EngineResult<i64> {
    if n < 0 {
        return Err(EngineError::InvalidArgument(
            "Fibonacci is not defined for negative numbers",
        ));
    }

    let mut previous: i64 = 0;
    let mut current: i64 = 1;
    for _ in 0..n {
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }
    Ok(previous)
}

/// Greatest common divisor via the Euclidean algorithm.
///
/// Operates on absolute values, so the result is always non-negative
/// regardless of input signs. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let remainder = x % y;
        x = y;
        y = remainder;
    }
    x as i64
}

/// Least common multiple.
///
/// Returns 0 when either input is 0; otherwise `|a * b| / gcd(a, b)`,
/// with the division applied first so intermediate values stay small.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let divisor = gcd(a, b) as u64;
    ((a.unsigned_abs() / divisor).wrapping_mul(b.unsigned_abs())) as i64
}

/// All primes up to and including `limit`, in ascending order.
///
/// Sieve of Eratosthenes; each call builds the sequence fresh. Any limit
/// below 2 yields an empty sequence.
pub fn generate_primes(limit: i64) -> Vec<i64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();

    for candidate in 2..=limit {
        if !composite[candidate] {
            primes.push(candidate as i64);
            let mut multiple = candidate * candidate;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += candidate;
            }
        }
    }
    primes
}
