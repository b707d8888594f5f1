
//! Entry point shared by the `purecalc` binary: resolves the
//! configuration, then runs the demo and the interactive session.

use crate::calculator::Calculator;
use crate::config::{CalculatorConfig, Policy};
use crate::demo::run_demo;
use crate::error::Error;
use crate::session::{Session, SessionSummary};

use tracing::{debug, info};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
  /// JSON configuration file. Defaults apply when absent.
  pub config_path: Option<PathBuf>,
  /// Overrides the policy from the configuration file.
  pub policy: Option<Policy>,
  /// Overrides the tolerance from the configuration file.
  pub tolerance: Option<f64>,
  pub demo: bool,
  pub session: bool,
}

impl RunOptions {
  /// Loads the configuration file, if any, and applies the overrides.
  pub fn resolve_config(&self) -> Result<CalculatorConfig, Error> {
    let mut config = match &self.config_path {
      Some(path) => {
        debug!(path = %path.display(), "loading configuration");
        CalculatorConfig::load(path)?
      }
      None => CalculatorConfig::default(),
    };
    if let Some(policy) = self.policy {
      config = config.with_policy(policy);
    }
    if let Some(tolerance) = self.tolerance {
      config = config.with_tolerance(tolerance);
    }
    config.validate()?;
    Ok(config)
  }
}

/// Runs against the process's standard input and output.
pub fn run(options: &RunOptions) -> Result<Option<SessionSummary>, Error> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  run_with_io(options, stdin.lock(), stdout.lock())
}

/// Runs the demo (if requested) followed by the session (if
/// requested). Returns the session summary when a session ran.
pub fn run_with_io<R: BufRead, W: Write>(
  options: &RunOptions,
  input: R,
  mut output: W,
) -> Result<Option<SessionSummary>, Error> {
  let config = options.resolve_config()?;
  info!(policy = %config.policy, tolerance = config.tolerance, "starting calculator");
  let calculator = Calculator::with_config(config);
  if options.demo {
    run_demo(&calculator, &mut output)?;
  }
  if !options.session {
    return Ok(None);
  }
  if options.demo {
    writeln!(output, "\n--- Launching the interactive session ---")?;
  }
  let mut session = Session::new(&calculator, input, output);
  let summary = session.run()?;
  Ok(Some(summary))
}
