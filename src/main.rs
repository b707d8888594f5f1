
use purecalc::config::Policy;
use purecalc::runner::{self, RunOptions};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "purecalc")]
#[command(version, about = "A pure two-operand calculator", long_about = None)]
struct Cli {
  /// Configuration file (JSON)
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Result policy: "ieee" propagates NaN/Infinity, "finite" refuses them
  #[arg(short, long)]
  policy: Option<Policy>,

  /// Near-zero divisor tolerance used by the finite policy
  #[arg(short, long)]
  tolerance: Option<f64>,

  /// Print the sample calculations before starting
  #[arg(long)]
  demo: bool,

  /// Do not start the interactive session
  #[arg(long)]
  no_session: bool,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn setup_logging(verbose: u8) {
  let level = match verbose {
    0 => "purecalc=warn",
    1 => "purecalc=info",
    2 => "purecalc=debug",
    _ => "purecalc=trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
  // Session output goes to stdout, so keep logs out of its way.
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let options = RunOptions {
    config_path: cli.config,
    policy: cli.policy,
    tolerance: cli.tolerance,
    demo: cli.demo,
    session: !cli.no_session,
  };
  runner::run(&options).context("calculator failed")?;
  Ok(())
}
