//! HOME directory management for testing
//!
//! This module provides utilities for isolating the HOME directory during
//! testing so configuration files land in a temporary directory instead
//! of the user's real home.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A test guard that overrides the HOME directory with a temporary
/// directory and restores the original value on drop.
pub struct HomeDirTestGuard {
  /// The temporary directory that will be used as HOME
  pub temp_dir: TempDir,
  /// The original HOME value, if any
  original_home: Option<String>,
}

impl HomeDirTestGuard {
  /// Create a new guard with a temporary HOME directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let original_home = env::var("HOME").ok();
    unsafe {
      env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      original_home,
    }
  }

  /// Get the path to the temporary HOME directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to a file in the temporary HOME directory
  pub fn home_path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }
}

impl Default for HomeDirTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for HomeDirTestGuard {
  fn drop(&mut self) {
    match &self.original_home {
      Some(val) => unsafe {
        env::set_var("HOME", val);
      },
      None => unsafe {
        env::remove_var("HOME");
      },
    }
  }
}
