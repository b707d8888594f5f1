
//! The four arithmetic operations the calculator knows about.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// One of the four binary operations offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
  Addition,
  Subtraction,
  Multiplication,
  Division,
}

impl Operation {
  /// All operations, in menu order.
  pub const ALL: [Operation; 4] = [
    Operation::Addition,
    Operation::Subtraction,
    Operation::Multiplication,
    Operation::Division,
  ];

  /// The key a user enters to select this operation from a menu.
  pub fn menu_key(self) -> &'static str {
    match self {
      Operation::Addition => "1",
      Operation::Subtraction => "2",
      Operation::Multiplication => "3",
      Operation::Division => "4",
    }
  }

  /// Looks up an operation by its menu key. Surrounding whitespace is
  /// ignored.
  pub fn from_menu_key(key: &str) -> Option<Operation> {
    let key = key.trim();
    Operation::ALL.into_iter().find(|op| op.menu_key() == key)
  }

  pub fn label(self) -> &'static str {
    match self {
      Operation::Addition => "Addition",
      Operation::Subtraction => "Subtraction",
      Operation::Multiplication => "Multiplication",
      Operation::Division => "Division",
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Operation::Addition => "+",
      Operation::Subtraction => "-",
      Operation::Multiplication => "*",
      Operation::Division => "/",
    }
  }

  /// Lowercase name used in diagnostics, e.g. "multiplication".
  pub fn verb(self) -> &'static str {
    match self {
      Operation::Addition => "addition",
      Operation::Subtraction => "subtraction",
      Operation::Multiplication => "multiplication",
      Operation::Division => "division",
    }
  }
}

impl Display for Operation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.verb())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_menu_keys_cover_one_to_four() {
    let keys: Vec<_> = Operation::ALL.iter().map(|op| op.menu_key()).collect();
    assert_eq!(keys, vec!["1", "2", "3", "4"]);
  }

  #[test]
  fn test_from_menu_key() {
    assert_eq!(Operation::from_menu_key("1"), Some(Operation::Addition));
    assert_eq!(Operation::from_menu_key(" 2 "), Some(Operation::Subtraction));
    assert_eq!(Operation::from_menu_key("4\n"), Some(Operation::Division));
    assert_eq!(Operation::from_menu_key("9"), None);
    assert_eq!(Operation::from_menu_key(""), None);
    assert_eq!(Operation::from_menu_key("+"), None);
  }

  #[test]
  fn test_labels_and_symbols() {
    assert_eq!(Operation::Addition.label(), "Addition");
    assert_eq!(Operation::Multiplication.symbol(), "*");
    assert_eq!(Operation::Division.to_string(), "division");
  }

  #[test]
  fn test_serde_names() {
    assert_eq!(serde_json::to_string(&Operation::Subtraction).unwrap(), "\"subtraction\"");
    let op: Operation = serde_json::from_str("\"division\"").unwrap();
    assert_eq!(op, Operation::Division);
  }
}
