//! Console rendering of a run's outcome.

use colored::{ColoredString, Colorize};

use crate::error::GenerateError;

/// Colors the outcome: blue for a query, red for any error.
///
/// `colored` appends a reset sequence to every painted string, so the
/// terminal style is restored after each line.
pub fn render(outcome: &Result<String, GenerateError>) -> ColoredString {
    match outcome {
        Ok(query) => query.as_str().blue(),
        Err(e) => e.to_string().red(),
    }
}

/// Prints the outcome to stdout.
pub fn print(outcome: &Result<String, GenerateError>) {
    println!("{}", render(outcome));
}
