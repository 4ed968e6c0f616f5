//! # Login Command
//!
//! Interactively collects the details of a Flynn instance and appends it
//! to the persisted server list.

use std::io::{self, Write};

use anyhow::{Context, Result};
use flynn_core::config::Server;
use flynn_core::output::print_success;
use flynn_core::{RuntimeContext, flynnrc_path};

pub(crate) fn handle_login_command(ctx: &RuntimeContext) -> Result<()> {
  let server = Server {
    git_host: prompt("Git Host: ")?,
    api_url: prompt("Api Url: ")?,
    api_key: prompt("Api Key: ")?,
    api_tls_pin: prompt("Api TLS Pin: ")?,
  };

  let mut config = ctx.config().clone();
  config.servers.push(server);
  config.save()?;

  print_success(&format!("Server added to {}", flynnrc_path()?.display()));
  Ok(())
}

/// Prompt on stdout and read one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
  print!("{label}");
  io::stdout().flush()?;

  let mut input = String::new();
  io::stdin()
    .read_line(&mut input)
    .context("Couldn't retrieve user input")?;

  Ok(input.trim().to_string())
}
