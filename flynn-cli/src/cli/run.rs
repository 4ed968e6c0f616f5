//! # Run Command
//!
//! Submits a one-off job to the controller in the resolved app's
//! environment.

use anyhow::{Context, Result};
use clap::Args;
use flynn_core::RuntimeContext;
use tokio::runtime::Runtime;

use crate::clients::api_client;

/// Arguments for the run command
#[derive(Args)]
pub struct RunArgs {
  /// Command and arguments to run
  #[arg(required = true, trailing_var_arg = true)]
  pub command: Vec<String>,
}

pub(crate) fn handle_run_command(run: RunArgs, ctx: &RuntimeContext) -> Result<()> {
  let app = ctx.app()?;
  let client = api_client(ctx);

  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let job = rt.block_on(client.run_job(&app, run.command))?;

  println!("{}\t{}\t{}", job.id, job.job_type, job.state);
  Ok(())
}
