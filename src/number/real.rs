
use super::visitor::{NumberPair, int_to_float};
use super::repr::NumberRepr;
use super::ParseNumberError;

use num::{BigInt, BigRational, Zero, Integer};
use num::traits::ToPrimitive;
use once_cell::sync::Lazy;
use regex::Regex;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::ops;
use std::cmp::Ordering;

/// A calculator operand or result.
///
/// A number is represented either as an exact (arbitrary-precision)
/// integer or as an IEEE 754 floating point value. Use
/// [`Number::repr`] to get the number's current representation.
///
/// Unlike the exact representation, the floating-point
/// representation is allowed to hold NaN and the two infinities, and
/// arithmetic on those values follows IEEE 754.
#[derive(Debug, Clone)]
pub struct Number {
  pub(super) inner: NumberImpl,
}

#[derive(Debug, Clone)]
pub(super) enum NumberImpl {
  Integer(BigInt),
  Float(f64),
}

impl Number {
  pub fn nan() -> Number {
    Number::from(f64::NAN)
  }

  pub fn infinity() -> Number {
    Number::from(f64::INFINITY)
  }

  pub fn neg_infinity() -> Number {
    Number::from(f64::NEG_INFINITY)
  }

  /// Gets the current representation of the number.
  pub fn repr(&self) -> NumberRepr {
    match &self.inner {
      NumberImpl::Integer(_) => NumberRepr::Integer,
      NumberImpl::Float(_) => NumberRepr::Float,
    }
  }

  /// Converts `self` to an `f64`. Integers outside the range of `f64`
  /// become the infinity of the same sign.
  pub fn to_f64(&self) -> f64 {
    match &self.inner {
      NumberImpl::Integer(i) => int_to_float(i),
      NumberImpl::Float(f) => *f,
    }
  }

  pub fn is_nan(&self) -> bool {
    matches!(self.inner, NumberImpl::Float(f) if f.is_nan())
  }

  pub fn is_infinite(&self) -> bool {
    matches!(self.inner, NumberImpl::Float(f) if f.is_infinite())
  }

  /// True for every integer and for every float that is neither NaN
  /// nor infinite.
  pub fn is_finite(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(_) => true,
      NumberImpl::Float(f) => f.is_finite(),
    }
  }
}

impl From<i32> for Number {
  fn from(i: i32) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

/// Constructs an integer number from an `i64`.
impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number { inner: NumberImpl::Integer(i.into()) }
  }
}

/// Constructs an integer number from an arbitrary-sized `BigInt`
/// integer.
impl From<BigInt> for Number {
  fn from(i: BigInt) -> Number {
    Number { inner: NumberImpl::Integer(i) }
  }
}

/// Constructs a floating-point number from an `f64` value. NaN and
/// the infinities are accepted as-is.
impl From<f64> for Number {
  fn from(f: f64) -> Number {
    Number { inner: NumberImpl::Float(f) }
  }
}

impl Default for Number {
  fn default() -> Number {
    Number::from(0)
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      NumberImpl::Integer(i) => {
        i.fmt(f)
      }
      NumberImpl::Float(d) => {
        // If the float is actually a (small) integer, force one decimal
        // point. Otherwise, use default printer.
        if d.fract().is_zero() && d.abs() < u64::MAX as f64 {
          write!(f, "{:.1}", d)
        } else {
          write!(f, "{}", d)
        }
      }
    }
  }
}

/// `PartialEq` impl for `Number` compares the numerical value and
/// ignores the representation, so `3 == 3.0`. NaN is not equal to
/// anything, including itself.
impl PartialEq for Number {
  fn eq(&self, other: &Number) -> bool {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left == right,
      NumberPair::Floats(left, right) => left == right,
    }
  }
}

impl PartialOrd for Number {
  fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
    match NumberPair::promote(self.clone(), other.clone()) {
      NumberPair::Integers(left, right) => left.partial_cmp(&right),
      NumberPair::Floats(left, right) => left.partial_cmp(&right),
    }
  }
}

impl AbsDiffEq for Number {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Number, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl RelativeEq for Number {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Number, epsilon: f64, max_relative: f64) -> bool {
    self.to_f64().relative_eq(&other.to_f64(), epsilon, max_relative)
  }
}

impl UlpsEq for Number {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Number, epsilon: f64, max_ulps: u32) -> bool {
    self.to_f64().ulps_eq(&other.to_f64(), epsilon, max_ulps)
  }
}

impl ops::Add for Number {
  type Output = Number;

  fn add(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left + right),
      NumberPair::Floats(left, right) => Number::from(left + right),
    }
  }
}

impl ops::Add for &Number {
  type Output = Number;

  fn add(self, other: &Number) -> Number {
    self.clone() + other.clone()
  }
}

impl ops::Sub for Number {
  type Output = Number;

  fn sub(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left - right),
      NumberPair::Floats(left, right) => Number::from(left - right),
    }
  }
}

impl ops::Sub for &Number {
  type Output = Number;

  fn sub(self, other: &Number) -> Number {
    self.clone() - other.clone()
  }
}

impl ops::Mul for Number {
  type Output = Number;

  fn mul(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => Number::from(left * right),
      NumberPair::Floats(left, right) => Number::from(left * right),
    }
  }
}

impl ops::Mul for &Number {
  type Output = Number;

  fn mul(self, other: &Number) -> Number {
    self.clone() * other.clone()
  }
}

/// Raw IEEE 754 division. Two integers that divide evenly produce an
/// exact integer; every other case (including an integer zero
/// divisor) is carried out in `f64`, so this operator never panics.
///
/// This does not reject zero divisors. Use
/// [`Calculator::divide`](crate::calculator::Calculator::divide) for
/// checked division.
impl ops::Div for Number {
  type Output = Number;

  fn div(self, other: Number) -> Number {
    match NumberPair::promote(self, other) {
      NumberPair::Integers(left, right) => {
        if right.is_zero() {
          Number::from(int_to_float(&left) / 0.0)
        } else if left.is_multiple_of(&right) {
          Number::from(left / right)
        } else {
          // Converting the exact quotient keeps operands beyond the
          // range of f64 from turning into inf / inf.
          let quotient = BigRational::new(left, right);
          Number::from(quotient.to_f64().unwrap_or(f64::NAN))
        }
      }
      NumberPair::Floats(left, right) => Number::from(left / right),
    }
  }
}

impl ops::Div for &Number {
  type Output = Number;

  fn div(self, other: &Number) -> Number {
    self.clone() / other.clone()
  }
}

impl Zero for Number {
  fn zero() -> Number {
    Number::from(0i64)
  }

  /// Both `0.0` and `-0.0` count as zero.
  fn is_zero(&self) -> bool {
    match &self.inner {
      NumberImpl::Integer(i) => i.is_zero(),
      NumberImpl::Float(f) => f.is_zero(),
    }
  }
}

impl FromStr for Number {
  type Err = ParseNumberError;

  /// Parses an integer or floating-point literal. Surrounding
  /// whitespace is ignored and a comma may stand in for the decimal
  /// point. `NaN` and `inf` parse to the matching float values.
  fn from_str(s: &str) -> Result<Number, ParseNumberError> {
    let s = s.trim();
    parse_integer(s).or_else(|| {
      parse_float(s)
    }).ok_or_else(|| ParseNumberError::new(s))
  }
}

fn parse_integer(s: &str) -> Option<Number> {
  static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());
  if !RE.is_match(s) {
    return None;
  }
  BigInt::from_str(s.trim_start_matches('+')).map(Number::from).ok()
}

fn parse_float(s: &str) -> Option<Number> {
  static DECIMAL_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?\d*),(\d+(?:[eE][+-]?\d+)?)$").unwrap());
  let normalized = DECIMAL_COMMA.replace(s, "$1.$2");
  f64::from_str(&normalized).map(Number::from).ok()
}
