//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use owo_colors::OwoColorize;
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Format an app name
pub fn format_app_name(name: &str) -> String {
  name.bright_cyan().bold().to_string()
}

/// Format a remote or API URL
pub fn format_url(url: &str) -> String {
  url.bright_green().to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.purple().to_string()
}
