
/// The different ways a number can be represented. These are ordered
/// in terms of priority, so if `a <= b`, that implies that arithmetic
/// will try to use representation `a` before resorting to
/// representation `b`. Two integers stay integers; anything involving
/// a float becomes a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberRepr {
  /// An integer, exact.
  Integer,
  /// An IEEE 754 floating-point value, possibly NaN or infinite.
  Float,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_repr_ordering() {
    assert!(NumberRepr::Integer < NumberRepr::Float);
    assert_eq!(NumberRepr::Integer.max(NumberRepr::Float), NumberRepr::Float);
  }
}
