
//! Private module used to implement promotion for our numerical
//! representation. None of this functionality is directly exposed
//! outside of `crate::number`.

use super::real::{Number, NumberImpl};

use num::{BigInt, ToPrimitive};
use num::bigint::Sign;

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub(super) enum NumberPair {
  Integers(BigInt, BigInt),
  Floats(f64, f64),
}

impl NumberPair {
  /// Promote two numbers to a common representation, so we can do
  /// arithmetic on them.
  pub fn promote(left: Number, right: Number) -> NumberPair {
    use NumberImpl::*;
    use NumberPair::*;
    match (left.inner, right.inner) {
      (Integer(left), Integer(right)) => Integers(left, right),
      (Integer(left), Float(right)) => Floats(int_to_float(&left), right),
      (Float(left), Integer(right)) => Floats(left, int_to_float(&right)),
      (Float(left), Float(right)) => Floats(left, right),
    }
  }
}

/// Integers too large for an `f64` saturate to the matching infinity.
pub(super) fn int_to_float(i: &BigInt) -> f64 {
  i.to_f64().unwrap_or_else(|| {
    if i.sign() == Sign::Minus { f64::NEG_INFINITY } else { f64::INFINITY }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_promote_integers() {
    let pair = NumberPair::promote(Number::from(3), Number::from(-4));
    assert_eq!(pair, NumberPair::Integers(BigInt::from(3), BigInt::from(-4)));
  }

  #[test]
  fn test_promote_mixed() {
    let pair = NumberPair::promote(Number::from(3), Number::from(0.5));
    assert_eq!(pair, NumberPair::Floats(3.0, 0.5));
    let pair = NumberPair::promote(Number::from(0.5), Number::from(3));
    assert_eq!(pair, NumberPair::Floats(0.5, 3.0));
  }

  #[test]
  fn test_oversized_integers_saturate() {
    let huge = num::pow(BigInt::from(10), 400);
    assert_eq!(int_to_float(&huge), f64::INFINITY);
    assert_eq!(int_to_float(&-huge), f64::NEG_INFINITY);
  }
}
