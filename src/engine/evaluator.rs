// ============================================================================
// Evaluator
// Maps an operation plus operands onto the matching numeric function
// ============================================================================

use crate::interfaces::{Operation, Value};
use crate::numeric::{aggregate, integer, real, EngineError, EngineResult};

/// Stateless dispatcher from `Operation` to the core numeric functions.
///
/// Operands arrive as reals (the way a textual caller parses them) and are
/// truncated toward zero for integer-domain operations. Surplus operands
/// beyond an operation's arity are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluate one operation.
    ///
    /// # Errors
    /// - `InvalidOperandCount` when too few operands are supplied
    /// - any error the underlying operation raises (`DivisionByZero`,
    ///   `InvalidArgument`)
    pub fn evaluate(&self, operation: Operation, operands: &[f64]) -> EngineResult<Value> {
        self.check_operand_count(operation, operands.len())?;
        tracing::debug!(op = %operation, ?operands, "evaluating");

        let result = match operation {
            Operation::Add => Value::Real(real::add(operands[0], operands[1])),
            Operation::Subtract => Value::Real(real::subtract(operands[0], operands[1])),
            Operation::Multiply => Value::Real(real::multiply(operands[0], operands[1])),
            Operation::Divide => Value::Real(real::divide(operands[0], operands[1])?),
            Operation::Percentage => Value::Real(real::percentage(operands[0], operands[1])),
            Operation::Absolute => Value::Real(real::absolute(operands[0])),
            // Negative place counts are a precondition violation; the
            // saturating cast clamps them to zero
            Operation::Round => Value::Real(real::round_to(operands[0], operands[1] as u32)),
            Operation::IsEven => Value::Bool(integer::is_even(operands[0] as i64)),
            Operation::IsPrime => Value::Bool(integer::is_prime(operands[0] as i64)),
            Operation::Power => Value::Real(real::power(operands[0], operands[1])),
            Operation::SquareRoot => Value::Real(real::square_root(operands[0])?),
            Operation::Factorial => Value::Int(integer::factorial(operands[0] as i64)?),
            Operation::Fibonacci => Value::Int(integer::fibonacci(operands[0] as i64)?),
            Operation::Gcd => Value::Int(integer::gcd(operands[0] as i64, operands[1] as i64)),
            Operation::Lcm => Value::Int(integer::lcm(operands[0] as i64, operands[1] as i64)),
            Operation::GeneratePrimes => {
                Value::Sequence(integer::generate_primes(operands[0] as i64))
            },
            Operation::Average => Value::Real(aggregate::average(operands)?),
            Operation::Max => Value::Real(aggregate::max(operands)?),
            Operation::Min => Value::Real(aggregate::min(operands)?),
        };
        Ok(result)
    }

    fn check_operand_count(&self, operation: Operation, actual: usize) -> EngineResult<()> {
        let expected = operation.arity().min_operands();
        if actual < expected {
            return Err(EngineError::InvalidOperandCount { expected, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_dispatch() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::Add, &[5.0, 3.0]).unwrap(),
            Value::Real(8.0)
        );
        assert_eq!(
            evaluator.evaluate(Operation::Divide, &[5.0, 2.0]).unwrap(),
            Value::Real(2.5)
        );
        assert_eq!(
            evaluator.evaluate(Operation::Gcd, &[48.0, 36.0]).unwrap(),
            Value::Int(12)
        );
    }

    #[test]
    fn test_unary_dispatch() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::SquareRoot, &[16.0]).unwrap(),
            Value::Real(4.0)
        );
        assert_eq!(
            evaluator.evaluate(Operation::Factorial, &[5.0]).unwrap(),
            Value::Int(120)
        );
        assert_eq!(
            evaluator.evaluate(Operation::IsPrime, &[17.0]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluator.evaluate(Operation::GeneratePrimes, &[10.0]).unwrap(),
            Value::Sequence(vec![2, 3, 5, 7])
        );
    }

    #[test]
    fn test_variadic_dispatch() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator
                .evaluate(Operation::Average, &[1.0, 2.0, 3.0, 4.0, 5.0])
                .unwrap(),
            Value::Real(3.0)
        );
        assert_eq!(
            evaluator
                .evaluate(Operation::Max, &[-10.0, -5.0, -15.0, -2.0])
                .unwrap(),
            Value::Real(-2.0)
        );
        assert_eq!(
            evaluator
                .evaluate(Operation::Min, &[-10.0, -5.0, -15.0, -2.0])
                .unwrap(),
            Value::Real(-15.0)
        );
    }

    #[test]
    fn test_operand_truncation() {
        // Integer-domain operations truncate toward zero, like the
        // calculator front-end always did
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::Factorial, &[5.9]).unwrap(),
            Value::Int(120)
        );
        assert_eq!(
            evaluator.evaluate(Operation::IsEven, &[-4.2]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_too_few_operands() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::Add, &[1.0]),
            Err(EngineError::InvalidOperandCount {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            evaluator.evaluate(Operation::Average, &[]),
            Err(EngineError::InvalidOperandCount {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_surplus_operands_ignored() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::Add, &[1.0, 2.0, 99.0]).unwrap(),
            Value::Real(3.0)
        );
    }

    #[test]
    fn test_errors_propagate() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate(Operation::Divide, &[5.0, 0.0]),
            Err(EngineError::DivisionByZero)
        );
        assert!(matches!(
            evaluator.evaluate(Operation::SquareRoot, &[-1.0]),
            Err(EngineError::InvalidArgument(_))
        ));
    }
}
