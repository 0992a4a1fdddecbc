// ============================================================================
// Operation Vocabulary
// Token-addressable names for every engine operation
// ============================================================================

use crate::numeric::EngineError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly one operand
    Unary,
    /// Exactly two operands
    Binary,
    /// One or more operands (aggregates)
    Variadic,
}

impl Arity {
    /// Minimum number of operands required.
    #[inline]
    pub const fn min_operands(self) -> usize {
        match self {
            Arity::Unary | Arity::Variadic => 1,
            Arity::Binary => 2,
        }
    }
}

/// Every operation the engine can evaluate, addressable by its CLI token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
    Absolute,
    Round,
    IsEven,
    IsPrime,
    Power,
    SquareRoot,
    Factorial,
    Fibonacci,
    Gcd,
    Lcm,
    GeneratePrimes,
    Average,
    Max,
    Min,
}

impl Operation {
    /// All operations, in display order.
    pub const ALL: [Operation; 19] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Percentage,
        Operation::Absolute,
        Operation::Round,
        Operation::IsEven,
        Operation::IsPrime,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Factorial,
        Operation::Fibonacci,
        Operation::Gcd,
        Operation::Lcm,
        Operation::GeneratePrimes,
        Operation::Average,
        Operation::Max,
        Operation::Min,
    ];

    /// The CLI token naming this operation.
    pub const fn token(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Percentage => "%",
            Operation::Absolute => "abs",
            Operation::Round => "round",
            Operation::IsEven => "even",
            Operation::IsPrime => "prime",
            Operation::Power => "pow",
            Operation::SquareRoot => "sqrt",
            Operation::Factorial => "factorial",
            Operation::Fibonacci => "fib",
            Operation::Gcd => "gcd",
            Operation::Lcm => "lcm",
            Operation::GeneratePrimes => "primes",
            Operation::Average => "avg",
            Operation::Max => "max",
            Operation::Min => "min",
        }
    }

    /// Operand count contract for this operation.
    pub const fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Percentage
            | Operation::Round
            | Operation::Power
            | Operation::Gcd
            | Operation::Lcm => Arity::Binary,
            Operation::Absolute
            | Operation::IsEven
            | Operation::IsPrime
            | Operation::SquareRoot
            | Operation::Factorial
            | Operation::Fibonacci
            | Operation::GeneratePrimes => Arity::Unary,
            Operation::Average | Operation::Max | Operation::Min => Arity::Variadic,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or(EngineError::UnknownOperation)
    }
}
