// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_engine::prelude::*;

fn main() -> Result<(), EngineError> {
    println!("=== Numeric Engine Example ===\n");

    let evaluator = Evaluator::new();

    // Real arithmetic
    println!("Arithmetic:");
    for (op, operands) in [
        (Operation::Add, vec![5.0, 3.0]),
        (Operation::Divide, vec![5.0, 2.0]),
        (Operation::Percentage, vec![150.0, 25.0]),
        (Operation::Power, vec![2.0, 10.0]),
    ] {
        let value = evaluator.evaluate(op, &operands)?;
        println!("  {} {:?} = {}", op, operands, value);
    }

    // Number theory
    println!("\nNumber theory:");
    println!("  factorial(20) = {}", evaluator.evaluate(Operation::Factorial, &[20.0])?);
    println!("  fib(30)       = {}", evaluator.evaluate(Operation::Fibonacci, &[30.0])?);
    println!("  gcd(48, 36)   = {}", evaluator.evaluate(Operation::Gcd, &[48.0, 36.0])?);
    println!("  primes(30)    = {}", evaluator.evaluate(Operation::GeneratePrimes, &[30.0])?);

    // Aggregates
    println!("\nAggregates:");
    let samples = [12.5, 7.25, 19.0, 3.75];
    println!("  avg = {}", evaluator.evaluate(Operation::Average, &samples)?);
    println!("  max = {}", evaluator.evaluate(Operation::Max, &samples)?);
    println!("  min = {}", evaluator.evaluate(Operation::Min, &samples)?);

    // Validation failures carry fixed messages
    println!("\nValidation:");
    if let Err(error) = evaluator.evaluate(Operation::SquareRoot, &[-1.0]) {
        println!("  sqrt(-1) -> Error: {}", error);
    }
    if let Err(error) = evaluator.evaluate(Operation::Divide, &[1.0, 0.0]) {
        println!("  1 / 0    -> Error: {}", error);
    }

    Ok(())
}
