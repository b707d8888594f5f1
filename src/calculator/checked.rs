
//! Arithmetic that refuses to produce NaN or infinite results.
//!
//! Each operation either returns a finite [`Number`] or a
//! [`CalculatorError`] explaining why no finite result exists. Where
//! possible, overflow is detected before the operation is carried
//! out, so that the error names the actual cause rather than the
//! resulting infinity.

use super::error::CalculatorError;
use crate::number::{Number, NumberRepr};
use crate::operation::Operation;
use crate::tolerance::is_near_zero;

use num::Zero;
use tracing::warn;

pub fn add(a: Number, b: Number) -> Result<Number, CalculatorError> {
  // May still go to infinity for very large operands.
  finite_or_error(a + b, Operation::Addition)
}

pub fn subtract(a: Number, b: Number) -> Result<Number, CalculatorError> {
  finite_or_error(a - b, Operation::Subtraction)
}

pub fn multiply(a: Number, b: Number) -> Result<Number, CalculatorError> {
  if a.repr() == NumberRepr::Integer && b.repr() == NumberRepr::Integer {
    return Ok(a * b);
  }
  let (x, y) = (a.to_f64(), b.to_f64());
  if x.is_finite() && y.is_finite() {
    let ay = y.abs();
    if ay != 0.0 && x.abs() > f64::MAX / ay {
      return Err(overflow(Operation::Multiplication));
    }
  }
  finite_or_error(a * b, Operation::Multiplication)
}

/// Finite division. `tolerance` is the distance from zero inside
/// which a divisor is rejected.
pub fn divide(a: Number, b: Number, tolerance: f64) -> Result<Number, CalculatorError> {
  if b.is_zero() {
    warn!("attempt to divide by zero");
    return Err(CalculatorError::DivisionByZero);
  }
  let y = b.to_f64();
  if !b.is_finite() || is_near_zero(y, tolerance) {
    warn!(divisor = y, tolerance, "attempt to divide by (near) zero");
    return Err(CalculatorError::NearZeroDivisor { divisor: y });
  }
  // |x| / |y| > max  <=>  |x| > max * |y|, which also holds up for
  // tiny |y|.
  let x = a.to_f64();
  if x.is_finite() && x.abs() > f64::MAX * y.abs() {
    return Err(overflow(Operation::Division));
  }
  finite_or_error(a / b, Operation::Division)
}

fn finite_or_error(value: Number, operation: Operation) -> Result<Number, CalculatorError> {
  if value.is_finite() {
    Ok(value)
  } else {
    warn!(%operation, "{operation} produced a non-finite result (inf/NaN)");
    Err(CalculatorError::NonFiniteResult { operation })
  }
}

fn overflow(operation: Operation) -> CalculatorError {
  warn!(%operation, "{operation} would overflow");
  CalculatorError::Overflow { operation }
}
