//! # Ps Command
//!
//! Lists the resolved app's running processes, tab-separated.

use anyhow::{Context, Result};
use flynn_core::RuntimeContext;
use tokio::runtime::Runtime;

use crate::clients::api_client;

pub(crate) fn handle_ps_command(ctx: &RuntimeContext) -> Result<()> {
  let app = ctx.app()?;
  let client = api_client(ctx);

  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let jobs = rt.block_on(client.list_jobs(&app))?;

  println!("ID\tTYPE\tSTATE");
  for job in jobs {
    println!("{}\t{}\t{}", job.id, job.job_type, job.state);
  }

  Ok(())
}
