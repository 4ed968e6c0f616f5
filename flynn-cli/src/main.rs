//! # Flynn CLI Entry Point
//!
//! The main entry point for the flynn command-line client. Loads the
//! persisted server configuration, builds the invocation context, and
//! dispatches to the matched subcommand. This is also the single fatal
//! error boundary: handlers propagate errors and only this function
//! terminates the process.

use clap::Parser;
use flynn_cli::cli;
use flynn_core::output::print_error;
use flynn_core::{Config, RuntimeContext};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
  // Flag-parse failures and unknown commands exit with code 2 here,
  // printing usage, before any handler runs.
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  // Load the stored config. Located at ~/.flynnrc
  let config = match Config::load() {
    Ok(config) => config,
    Err(e) => {
      print_error(&format!("Failed to load config file: {e:#}"));
      std::process::exit(2);
    }
  };

  let ctx = RuntimeContext::new(config, cmd.app.clone());

  if let Err(e) = cli::handle_cli(cmd, &ctx) {
    print_error(&format!("{e:#}"));
    std::process::exit(1);
  }
}
