
use crate::operation::Operation;

use thiserror::Error;

/// An arithmetic operation refused to produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalculatorError {
  /// The divisor was exactly zero (`0`, `0.0`, or `-0.0`).
  #[error("attempt to divide by zero")]
  DivisionByZero,
  /// The divisor was within the configured tolerance of zero, or was
  /// itself NaN or infinite. Only raised under the finite policy.
  #[error("attempt to divide by (near) zero: {divisor}")]
  NearZeroDivisor { divisor: f64 },
  /// The result would exceed the largest finite `f64`. Only raised
  /// under the finite policy.
  #[error("{operation} would overflow (result magnitude above {max:e})", max = f64::MAX)]
  Overflow { operation: Operation },
  /// The result was NaN or infinite. Only raised under the finite
  /// policy.
  #[error("{operation} produced a non-finite result (inf/NaN)")]
  NonFiniteResult { operation: Operation },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(CalculatorError::DivisionByZero.to_string(), "attempt to divide by zero");
    assert_eq!(
      CalculatorError::NonFiniteResult { operation: Operation::Addition }.to_string(),
      "addition produced a non-finite result (inf/NaN)",
    );
    assert!(
      CalculatorError::Overflow { operation: Operation::Multiplication }
        .to_string()
        .starts_with("multiplication would overflow"),
    );
    assert!(CalculatorError::NearZeroDivisor { divisor: 1e-13 }.to_string().contains("near"));
  }
}
