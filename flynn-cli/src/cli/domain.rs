//! # Domain Command
//!
//! Routes a domain to the resolved app.

use anyhow::{Context, Result};
use clap::Args;
use flynn_core::RuntimeContext;
use flynn_core::output::print_success;
use tokio::runtime::Runtime;

use crate::clients::api_client;

/// Arguments for the domain command
#[derive(Args)]
pub struct DomainArgs {
  /// Domain name to route to the app
  pub domain: String,
}

pub(crate) fn handle_domain_command(domain: DomainArgs, ctx: &RuntimeContext) -> Result<()> {
  let app = ctx.app()?;
  let client = api_client(ctx);

  let rt = Runtime::new().context("Failed to create tokio runtime")?;
  let routed = rt.block_on(client.add_domain(&app, &domain.domain))?;

  print_success(&format!("routed {} to {}", routed.domain, app));
  Ok(())
}
