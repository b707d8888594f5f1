
use crate::config::ConfigError;

use thiserror::Error;

use std::io;

/// Failures that end a calculator run. Calculator and parse errors
/// are reported to the user inside the session and never reach here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ConfigError(#[from] ConfigError),
  #[error("I/O error: {0}")]
  IoError(#[from] io::Error),
}
