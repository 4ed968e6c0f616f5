//! # Create Command
//!
//! Registers a `flynn` remote in the current git repository pointing at
//! the first configured server's git host.

use anyhow::Result;
use clap::Args;
use flynn_core::consts::FLYNN_REMOTE;
use flynn_core::output::{format_url, print_success};
use flynn_core::{RuntimeContext, add_remote};

/// Arguments for the create command
#[derive(Args)]
pub struct CreateArgs {
  /// Name of the app to create a remote for
  pub app: String,
}

pub(crate) fn handle_create_command(create: CreateArgs, ctx: &RuntimeContext) -> Result<()> {
  let url = ctx.config().git_remote_url(&create.app)?;
  add_remote(FLYNN_REMOTE, &url)?;

  print_success(&format!("Created remote {} at {}", FLYNN_REMOTE, format_url(&url)));
  Ok(())
}
