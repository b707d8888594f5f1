
//! Tolerance-based comparison of floating-point values.
//!
//! Floating-point rounding means that results which are "equal" on
//! paper often differ in the last few bits. These helpers treat two
//! values as equal when their absolute difference is below a fixed
//! threshold.

/// Default tolerance for treating a value as "close to zero" or two
/// values as equal.
pub const NEAR_ZERO_TOL: f64 = 1e-12;

/// Compares `x` and `y` with the default tolerance [`NEAR_ZERO_TOL`].
pub fn approx_eq(x: f64, y: f64) -> bool {
  approx_eq_with(x, y, NEAR_ZERO_TOL)
}

/// True if `|x - y| < tol`. NaN is never equal to anything. Two
/// infinities compare equal if they have the same sign, even though
/// their difference is NaN.
pub fn approx_eq_with(x: f64, y: f64, tol: f64) -> bool {
  if x.is_nan() || y.is_nan() {
    return false;
  }
  if x.is_infinite() || y.is_infinite() {
    return x == y;
  }
  (x - y).abs() < tol
}

/// True if `x` lies within `tol` of zero, inclusive. NaN is never near
/// zero.
pub fn is_near_zero(x: f64, tol: f64) -> bool {
  x.abs() <= tol
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tolerance_is_small_and_positive() {
    assert!(NEAR_ZERO_TOL > 0.0);
    assert!(NEAR_ZERO_TOL < 1e-6);
  }

  #[test]
  fn test_approx_eq() {
    assert!(approx_eq(0.1 + 0.2, 0.3));
    assert!(approx_eq(1e-13, 0.0));
    assert!(approx_eq(-1e-13, 0.0));
    assert!(!approx_eq(1e-11, 0.0));
    assert!(!approx_eq(1.0, 1.0 + 1e-9));
  }

  #[test]
  fn test_approx_eq_is_strict() {
    assert!(!approx_eq_with(1.0, 2.0, 1.0));
    assert!(approx_eq_with(1.0, 1.75, 1.0));
  }

  #[test]
  fn test_approx_eq_special_values() {
    assert!(!approx_eq(f64::NAN, f64::NAN));
    assert!(!approx_eq(f64::NAN, 0.0));
    assert!(approx_eq(f64::INFINITY, f64::INFINITY));
    assert!(approx_eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
    assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
    assert!(!approx_eq(f64::INFINITY, f64::MAX));
  }

  #[test]
  fn test_is_near_zero() {
    assert!(is_near_zero(0.0, NEAR_ZERO_TOL));
    assert!(is_near_zero(-0.0, NEAR_ZERO_TOL));
    assert!(is_near_zero(1e-13, NEAR_ZERO_TOL));
    assert!(is_near_zero(NEAR_ZERO_TOL, NEAR_ZERO_TOL));
    assert!(!is_near_zero(1e-11, NEAR_ZERO_TOL));
    assert!(!is_near_zero(f64::NAN, NEAR_ZERO_TOL));
  }
}
