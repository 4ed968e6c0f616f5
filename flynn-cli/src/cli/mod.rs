//! # Command Line Interface
//!
//! Defines the CLI structure and the closed command registry for the
//! flynn tool. Each subcommand parses its own arguments through clap and
//! receives the invocation context by reference.

mod create;
mod domain;
mod login;
mod logs;
mod ps;
mod run;
mod scale;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use flynn_core::RuntimeContext;
use flynn_core::output::ColorMode;
use tracing::debug;

/// Top-level CLI command for the flynn tool
#[derive(Parser)]
#[command(name = "flynn")]
#[command(about = "Command-line client for Flynn")]
#[command(
  long_about = "Flynn is a command-line client for Flynn clusters.\n\n\
        Commands operate on an app resolved from the -a flag, the FLYNN_APP\n\
        environment variable, or the local 'flynn' git remote, against the\n\
        API endpoint of the matching configured server."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(arg_required_else_help = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// App name, or a configured git remote to resolve one from
  #[arg(short = 'a', long = "app", global = true, value_name = "APP")]
  pub app: Option<String>,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    global = true,
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    global = true,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// How a command appears in help listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
  /// Always listed with its short description
  Listed,
  /// Listed under the extra command group
  Extra,
  /// Not listed at all
  Hidden,
}

/// Subcommands for the flynn tool
#[derive(Subcommand)]
pub enum Commands {
  /// Log in to a Flynn instance
  #[command(long_about = "Log in to a Flynn instance by providing its git host, API URL,\n\
            API key, and TLS pin. The server is appended to ~/.flynnrc and\n\
            becomes available for context resolution in future invocations.")]
  Login,

  /// Create a Flynn app
  #[command(long_about = "Creates a 'flynn' remote in your current git repository to push\n\
            an app to, derived from the git host of the first configured server.")]
  Create(create::CreateArgs),

  /// Run a one-off command in the app environment
  Run(run::RunArgs),

  /// List the app's running processes
  Ps,

  /// Show the app's log output
  Logs,

  /// Scale process types, e.g. web=2 worker=1
  Scale(scale::ScaleArgs),

  /// Domain routing management
  Domain(domain::DomainArgs),

  /// Print the flynn version
  #[command(hide = true)]
  Version,
}

impl Commands {
  /// The registry name the command dispatches under.
  pub fn name(&self) -> &'static str {
    match self {
      Commands::Login => "login",
      Commands::Create(_) => "create",
      Commands::Run(_) => "run",
      Commands::Ps => "ps",
      Commands::Logs => "logs",
      Commands::Scale(_) => "scale",
      Commands::Domain(_) => "domain",
      Commands::Version => "version",
    }
  }

  /// How the command appears in help listings.
  pub fn visibility(&self) -> Visibility {
    match self {
      Commands::Domain(_) => Visibility::Extra,
      Commands::Version => Visibility::Hidden,
      _ => Visibility::Listed,
    }
  }
}

pub fn handle_cli(cli: Cli, ctx: &RuntimeContext) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always => owo_colors::set_override(true),
    ColorMode::Never => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its terminal auto-detection
    }
  }

  debug!(command = cli.command.name(), "dispatching command");

  match cli.command {
    Commands::Login => login::handle_login_command(ctx),
    Commands::Create(create) => create::handle_create_command(create, ctx),
    Commands::Run(run) => run::handle_run_command(run, ctx),
    Commands::Ps => ps::handle_ps_command(ctx),
    Commands::Logs => logs::handle_logs_command(ctx),
    Commands::Scale(scale) => scale::handle_scale_command(scale, ctx),
    Commands::Domain(domain) => domain::handle_domain_command(domain, ctx),
    Commands::Version => {
      println!("flynn {}", env!("CARGO_PKG_VERSION"));
      Ok(())
    }
  }
}
