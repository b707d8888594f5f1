
//! The calculator proper: four binary operations on [`Number`]
//! operands.

pub mod checked;
mod error;

pub use error::CalculatorError;

use crate::config::{CalculatorConfig, Policy};
use crate::number::Number;
use crate::operation::Operation;

use num::Zero;
use tracing::{debug, warn};

/// A stateless two-operand calculator.
///
/// The four operations [`add`](Calculator::add),
/// [`subtract`](Calculator::subtract),
/// [`multiply`](Calculator::multiply), and
/// [`divide`](Calculator::divide) always use IEEE 754 semantics: NaN
/// and infinities propagate, and the only refused input is a zero
/// divisor. [`evaluate`](Calculator::evaluate) additionally honors
/// the configured [`Policy`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
  config: CalculatorConfig,
}

impl Calculator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: CalculatorConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CalculatorConfig {
    &self.config
  }

  pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing addition");
    a + b
  }

  pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing subtraction");
    a - b
  }

  pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing multiplication");
    a * b
  }

  /// Divides `a` by `b`.
  ///
  /// Fails with [`CalculatorError::DivisionByZero`] if `b` is zero,
  /// whatever `a` is. Otherwise NaN and infinite operands propagate
  /// as in IEEE 754.
  pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, CalculatorError> {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing division");
    if b.is_zero() {
      warn!(dividend = %a, "attempt to divide by zero");
      return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
  }

  /// Runs `operation` on the two operands under the configured
  /// policy.
  pub fn evaluate(
    &self,
    operation: Operation,
    a: impl Into<Number>,
    b: impl Into<Number>,
  ) -> Result<Number, CalculatorError> {
    let (a, b) = (a.into(), b.into());
    debug!(%operation, %a, %b, policy = %self.config.policy, "evaluating");
    match self.config.policy {
      Policy::Ieee => match operation {
        Operation::Addition => Ok(self.add(a, b)),
        Operation::Subtraction => Ok(self.subtract(a, b)),
        Operation::Multiplication => Ok(self.multiply(a, b)),
        Operation::Division => self.divide(a, b),
      },
      Policy::Finite => match operation {
        Operation::Addition => checked::add(a, b),
        Operation::Subtraction => checked::subtract(a, b),
        Operation::Multiplication => checked::multiply(a, b),
        Operation::Division => checked::divide(a, b, self.config.tolerance),
      },
    }
  }
}
