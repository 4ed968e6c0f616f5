//! # Logs Command
//!
//! Prints the resolved app's log output.

use anyhow::{Context, Result};
use flynn_core::RuntimeContext;
use tokio::runtime::Runtime;

use crate::clients::api_client;

pub(crate) fn handle_logs_command(ctx: &RuntimeContext) -> Result<()> {
  let app = ctx.app()?;
  let client = api_client(ctx);

  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let log = rt.block_on(client.get_log(&app))?;

  print!("{log}");
  Ok(())
}
