
//! A fixed set of sample calculations, covering both ordinary
//! arithmetic and the edge cases the calculator refuses or
//! propagates.

use crate::calculator::Calculator;
use crate::number::Number;
use crate::operation::Operation;

use std::io::{self, Write};

struct DemoCase {
  description: &'static str,
  operation: Operation,
  lhs: Number,
  rhs: Number,
}

impl DemoCase {
  fn new(description: &'static str, operation: Operation, lhs: impl Into<Number>, rhs: impl Into<Number>) -> Self {
    Self { description, operation, lhs: lhs.into(), rhs: rhs.into() }
  }
}

fn demo_cases() -> Vec<DemoCase> {
  vec![
    DemoCase::new("10 + 2", Operation::Addition, 10, 2),
    DemoCase::new("10 - 2", Operation::Subtraction, 10, 2),
    DemoCase::new("10 * 2", Operation::Multiplication, 10, 2),
    DemoCase::new("10 / 2", Operation::Division, 10, 2),
    DemoCase::new("5 / 0", Operation::Division, 5, 0),
    // Divisor below the smallest normal f64.
    DemoCase::new("5 / 1e-308", Operation::Division, 5, 1e-308),
    DemoCase::new("max * 2", Operation::Multiplication, f64::MAX, 2.0),
  ]
}

/// Writes every sample calculation, one per line, as
/// `<description> = <result>` or `<description> = ERROR: <message>`.
pub fn run_demo(calculator: &Calculator, out: &mut impl Write) -> io::Result<()> {
  writeln!(out, "\nSample calculations ({} policy):", calculator.config().policy)?;
  for case in demo_cases() {
    match calculator.evaluate(case.operation, case.lhs, case.rhs) {
      Ok(value) => writeln!(out, "{} = {}", case.description, value)?,
      Err(err) => writeln!(out, "{} = ERROR: {}", case.description, err)?,
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{CalculatorConfig, Policy};

  fn demo_output(calculator: &Calculator) -> String {
    let mut out = Vec::new();
    run_demo(calculator, &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn test_demo_ieee() {
    let out = demo_output(&Calculator::new());
    assert!(out.contains("(ieee policy)"));
    assert!(out.contains("10 + 2 = 12\n"));
    assert!(out.contains("10 - 2 = 8\n"));
    assert!(out.contains("10 * 2 = 20\n"));
    assert!(out.contains("10 / 2 = 5\n"));
    assert!(out.contains("5 / 0 = ERROR: attempt to divide by zero\n"));
    assert!(out.contains("5 / 1e-308 = inf\n"));
    assert!(out.contains("max * 2 = inf\n"));
  }

  #[test]
  fn test_demo_finite() {
    let calc = Calculator::with_config(CalculatorConfig::default().with_policy(Policy::Finite));
    let out = demo_output(&calc);
    assert!(out.contains("10 / 2 = 5\n"));
    assert!(out.contains("5 / 0 = ERROR: attempt to divide by zero\n"));
    assert!(out.contains("5 / 1e-308 = ERROR: attempt to divide by (near) zero"));
    assert!(out.contains("max * 2 = ERROR: multiplication would overflow"));
  }
}
