
//! Numerical values handled by the calculator.

mod real;
mod repr;
mod visitor;

pub use real::Number;
pub use repr::NumberRepr;

use thiserror::Error;

/// Error produced when a string is not a valid integer or
/// floating-point literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse number from {input:?}")]
#[non_exhaustive]
pub struct ParseNumberError {
  pub input: String,
}

impl ParseNumberError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}
