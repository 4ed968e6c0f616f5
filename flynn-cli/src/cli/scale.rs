//! # Scale Command
//!
//! Replaces the resolved app's formation with the requested per-type
//! process counts.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Args;
use flynn_core::RuntimeContext;
use flynn_core::output::print_success;
use tokio::runtime::Runtime;

use crate::clients::api_client;

/// Arguments for the scale command
#[derive(Args)]
pub struct ScaleArgs {
  /// Process counts per type, e.g. web=2 worker=1
  #[arg(required = true, value_name = "TYPE=N")]
  pub types: Vec<String>,
}

pub(crate) fn handle_scale_command(scale: ScaleArgs, ctx: &RuntimeContext) -> Result<()> {
  let app = ctx.app()?;
  let processes = parse_counts(&scale.types)?;

  let client = api_client(ctx);
  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let formation = rt.block_on(client.put_formation(&app, processes))?;

  for (job_type, count) in &formation.processes {
    print_success(&format!("scaled {job_type} to {count}"));
  }

  Ok(())
}

/// Parse `TYPE=N` arguments into a process count map.
fn parse_counts(types: &[String]) -> Result<BTreeMap<String, i32>> {
  let mut processes = BTreeMap::new();

  for pair in types {
    let (job_type, count) = pair
      .split_once('=')
      .with_context(|| format!("Invalid scale argument '{pair}', expected TYPE=N"))?;

    let count: i32 = count
      .parse()
      .with_context(|| format!("Invalid count in scale argument '{pair}'"))?;

    processes.insert(job_type.to_string(), count);
  }

  Ok(processes)
}
