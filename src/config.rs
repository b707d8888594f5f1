
//! Calculator configuration, loadable from a JSON file.

use crate::tolerance::NEAR_ZERO_TOL;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How the calculator treats results that are not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
  /// Plain IEEE 754 semantics. Only an exact zero divisor is
  /// rejected; NaN and infinities propagate.
  #[default]
  Ieee,
  /// Every operation must produce a finite result. Near-zero
  /// divisors, overflow, and non-finite results are all errors.
  Finite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown policy {0:?} (expected \"ieee\" or \"finite\")")]
pub struct ParsePolicyError(String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
  pub policy: Policy,
  /// Distance from zero inside which a divisor is rejected under
  /// [`Policy::Finite`].
  pub tolerance: f64,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("Failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Malformed config: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Tolerance must be finite and non-negative, got {0}")]
  InvalidTolerance(f64),
}

impl Policy {
  pub fn name(self) -> &'static str {
    match self {
      Policy::Ieee => "ieee",
      Policy::Finite => "finite",
    }
  }
}

impl Display for Policy {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Policy {
  type Err = ParsePolicyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "ieee" => Ok(Policy::Ieee),
      "finite" => Ok(Policy::Finite),
      _ => Err(ParsePolicyError(s.to_owned())),
    }
  }
}

impl CalculatorConfig {
  /// Reads and validates a JSON configuration file. Missing fields
  /// take their default values.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io { path: path.to_owned(), source }
    })?;
    Self::from_json_str(&text)
  }

  pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
    let config: CalculatorConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.tolerance.is_finite() || self.tolerance < 0.0 {
      return Err(ConfigError::InvalidTolerance(self.tolerance));
    }
    Ok(())
  }

  pub fn with_policy(mut self, policy: Policy) -> Self {
    self.policy = policy;
    self
  }

  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }
}

impl Default for CalculatorConfig {
  fn default() -> Self {
    Self {
      policy: Policy::default(),
      tolerance: NEAR_ZERO_TOL,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = CalculatorConfig::default();
    assert_eq!(config.policy, Policy::Ieee);
    assert_eq!(config.tolerance, NEAR_ZERO_TOL);
    config.validate().unwrap();
  }

  #[test]
  fn test_parse_empty_object() {
    let config = CalculatorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, CalculatorConfig::default());
  }

  #[test]
  fn test_parse_full_config() {
    let config = CalculatorConfig::from_json_str(r#"{"policy": "finite", "tolerance": 1e-9}"#).unwrap();
    assert_eq!(config.policy, Policy::Finite);
    assert_eq!(config.tolerance, 1e-9);
  }

  #[test]
  fn test_reject_unknown_fields() {
    let err = CalculatorConfig::from_json_str(r#"{"precision": 3}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
  }

  #[test]
  fn test_reject_bad_tolerance() {
    let err = CalculatorConfig::from_json_str(r#"{"tolerance": -1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance(t) if t == -1.0));
    let err = CalculatorConfig::default().with_tolerance(f64::NAN).validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance(_)));
    CalculatorConfig::default().with_tolerance(0.0).validate().unwrap();
  }

  #[test]
  fn test_load_missing_file() {
    let err = CalculatorConfig::load("/nonexistent/purecalc/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
  }

  #[test]
  fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("purecalc-config-{}.json", std::process::id()));
    fs::write(&path, r#"{"policy": "finite"}"#).unwrap();
    let config = CalculatorConfig::load(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(config.unwrap().policy, Policy::Finite);
  }

  #[test]
  fn test_policy_from_str() {
    assert_eq!(Policy::from_str("ieee"), Ok(Policy::Ieee));
    assert_eq!(Policy::from_str("FINITE"), Ok(Policy::Finite));
    assert!(Policy::from_str("strict").is_err());
    assert_eq!(Policy::Finite.to_string(), "finite");
  }
}
