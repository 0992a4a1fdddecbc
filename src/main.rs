// ============================================================================
// calc - Command-Line Calculator
// Batch and interactive front-end over the numeric engine
// ============================================================================

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use numeric_engine::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Command-line calculator over the numeric engine.
///
/// With arguments, evaluates one operation and exits; without arguments,
/// starts an interactive loop.
#[derive(Debug, Parser)]
#[command(name = "calc", version, about)]
struct Cli {
    /// Operation token (e.g. "+", "sqrt", "factorial"); omit for
    /// interactive mode
    operation: Option<String>,

    /// Numeric operands for the operation
    #[arg(allow_negative_numbers = true)]
    operands: Vec<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let evaluator = Evaluator::new();

    match cli.operation {
        Some(token) => run_batch(&evaluator, &token, &cli.operands),
        None => run_interactive(&evaluator),
    }
}

/// Evaluate a single operation from the command line.
///
/// Any failure prints the error plus a usage block to stderr and yields a
/// non-zero exit code.
fn run_batch(evaluator: &Evaluator, token: &str, operands: &[f64]) -> ExitCode {
    match evaluate_line(evaluator, token, operands) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("Error: {}", error);
            print_usage();
            ExitCode::FAILURE
        },
    }
}

/// Prompt loop: read an operation line, evaluate, report, repeat.
///
/// Malformed input or evaluation errors print a message and re-prompt;
/// only `exit` (or end of input) terminates the loop.
fn run_interactive(evaluator: &Evaluator) -> ExitCode {
    println!("Numeric Engine Calculator");
    println!("Available operations: {}", operation_tokens().join(", "));
    println!("Type 'exit' to quit\n");

    let stdin = io::stdin();
    loop {
        print!("calc> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let mut parts = line.split_whitespace();
        let token = parts.next().unwrap_or_default();
        let operands: Result<Vec<f64>, _> = parts.map(str::parse).collect();

        let operands = match operands {
            Ok(values) => values,
            Err(_) => {
                println!("Invalid input. Please try again.");
                continue;
            },
        };

        match evaluate_line(evaluator, token, &operands) {
            Ok(rendered) => println!("{}", rendered),
            Err(error) => println!("Error: {}", error),
        }
    }

    println!("Goodbye!");
    ExitCode::SUCCESS
}

/// Parse the token, evaluate, and render a `Result: <call> = <value>` line.
fn evaluate_line(evaluator: &Evaluator, token: &str, operands: &[f64]) -> EngineResult<String> {
    let operation: Operation = token.parse()?;
    let value = evaluator.evaluate(operation, operands)?;
    Ok(format!(
        "Result: {} = {}",
        render_call(operation, operands),
        value
    ))
}

/// Render the invocation: infix for binary symbols, call syntax otherwise.
fn render_call(operation: Operation, operands: &[f64]) -> String {
    let is_symbol = matches!(
        operation,
        Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Percentage
    );

    if is_symbol && operands.len() >= 2 {
        format!("{:.2} {} {:.2}", operands[0], operation, operands[1])
    } else {
        let rendered: Vec<String> = operands.iter().map(|v| format!("{:.2}", v)).collect();
        format!("{}({})", operation, rendered.join(", "))
    }
}

fn operation_tokens() -> Vec<&'static str> {
    Operation::ALL.iter().map(|op| op.token()).collect()
}

fn print_usage() {
    eprintln!("Usage: calc <operation> <number1> [number2 ...]");
    eprintln!("Operations: {}", operation_tokens().join(", "));
    eprintln!("Examples:");
    eprintln!("  calc + 5 3");
    eprintln!("  calc sqrt 16");
    eprintln!("  calc factorial 5");
    eprintln!("  calc avg 1 2 3 4 5");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_line_binary() {
        let evaluator = Evaluator::new();
        let rendered = evaluate_line(&evaluator, "+", &[5.0, 3.0]).unwrap();
        assert_eq!(rendered, "Result: 5.00 + 3.00 = 8.00");
    }

    #[test]
    fn test_evaluate_line_unary() {
        let evaluator = Evaluator::new();
        let rendered = evaluate_line(&evaluator, "sqrt", &[16.0]).unwrap();
        assert_eq!(rendered, "Result: sqrt(16.00) = 4.00");
    }

    #[test]
    fn test_evaluate_line_variadic() {
        let evaluator = Evaluator::new();
        let rendered = evaluate_line(&evaluator, "avg", &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(rendered, "Result: avg(1.00, 2.00, 3.00) = 2.00");
    }

    #[test]
    fn test_evaluate_line_errors() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluate_line(&evaluator, "nope", &[1.0]),
            Err(EngineError::UnknownOperation)
        );
        assert_eq!(
            evaluate_line(&evaluator, "/", &[1.0, 0.0]),
            Err(EngineError::DivisionByZero)
        );
    }
}
