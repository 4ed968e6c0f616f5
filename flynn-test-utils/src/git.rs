//! Git repository management for testing
//!
//! This module provides utilities for creating temporary git repositories
//! and changing the current working directory for testing.

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

/// A test guard that creates a temporary git repository and optionally
/// changes the current working directory to that repository. The original
/// working directory is restored when the guard is dropped.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
  /// The original working directory, if changed
  original_dir: Option<PathBuf>,
}

impl GitRepoTestGuard {
  /// Create a new test git repository without changing the current
  /// working directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path();

    let repo = Repository::init(temp_path).expect("Failed to initialize git repository");

    let mut config = repo.config().expect("Failed to get repository config");
    config
      .set_str("user.name", "Flynn Test User")
      .expect("Failed to set user.name");
    config
      .set_str("user.email", "flynn-test@example.com")
      .expect("Failed to set user.email");

    Self {
      temp_dir,
      repo,
      original_dir: None,
    }
  }

  /// Create a new test git repository and change the current working
  /// directory to it
  pub fn new_and_change_dir() -> Self {
    let mut guard = Self::new();
    guard.change_dir();
    guard
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Change the current working directory to the git repository
  pub fn change_dir(&mut self) {
    if self.original_dir.is_some() {
      return;
    }

    let original_dir = env::current_dir().expect("Failed to get current directory");
    self.original_dir = Some(original_dir);

    env::set_current_dir(self.temp_dir.path()).expect("Failed to change current directory");
  }

  /// Restore the original working directory if it was changed
  pub fn restore_dir(&mut self) {
    if let Some(original_dir) = self.original_dir.take() {
      env::set_current_dir(original_dir).expect("Failed to restore original directory");
    }
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for GitRepoTestGuard {
  fn drop(&mut self) {
    self.restore_dir();
  }
}
