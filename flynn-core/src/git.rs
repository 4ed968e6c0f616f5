//! # Git Remote Access
//!
//! Reads and writes named remotes through the local git binary. Reading
//! distinguishes a missing remote (git exits 1 for an unset config key)
//! from any other invocation failure, because callers fall back through
//! the context precedence chain on the former but not the latter.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::consts::GIT_EXECUTABLE;
use crate::remote_url::app_from_remote_url;

/// Errors reading a remote's URL from local git configuration.
#[derive(Debug, Error)]
pub enum RemoteError {
  /// The named remote is not configured in this repository.
  #[error("Could not find git remote {remote} in {}", .dir.display())]
  NotFound { remote: String, dir: PathBuf },

  /// git exited nonzero for a reason other than a missing config key.
  #[error("git config failed for remote {remote}: {stderr}")]
  CommandFailed { remote: String, stderr: String },

  /// The git binary could not be executed at all.
  #[error("Failed to execute git: {0}")]
  Io(#[from] std::io::Error),
}

/// Read `remote.<name>.url` from local git configuration.
///
/// The returned string keeps git's trailing newline; callers trim before
/// pattern matching.
pub fn url_from_remote(remote: &str) -> Result<String, RemoteError> {
  let output = Command::new(GIT_EXECUTABLE)
    .args(["config", &format!("remote.{remote}.url")])
    .output()?;

  if output.status.success() {
    return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
  }

  // git config exits 1 when the requested key is not set
  if output.status.code() == Some(1) {
    let dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    debug!(remote, dir = %dir.display(), "git remote not configured");
    return Err(RemoteError::NotFound {
      remote: remote.to_string(),
      dir,
    });
  }

  Err(RemoteError::CommandFailed {
    remote: remote.to_string(),
    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
  })
}

/// Register a new remote in the repository at the current directory.
pub fn add_remote(remote: &str, url: &str) -> Result<()> {
  let output = Command::new(GIT_EXECUTABLE)
    .args(["remote", "add", remote, url])
    .output()
    .context("Failed to execute git")?;

  if !output.status.success() {
    anyhow::bail!(
      "git remote add {} failed: {}",
      remote,
      String::from_utf8_lossy(&output.stderr).trim()
    );
  }

  Ok(())
}

/// Derive the app name from a named remote's URL.
pub fn app_from_git_remote(remote: &str) -> Result<String> {
  let url = url_from_remote(remote)?;
  app_from_remote_url(&url)
}

#[cfg(test)]
mod tests {
  use flynn_test_utils::{GitRepoTestGuard, process_lock};

  use super::*;

  #[test]
  fn test_url_from_remote_keeps_trailing_newline() {
    let _lock = process_lock();
    let git_repo = GitRepoTestGuard::new_and_change_dir();

    git_repo
      .repo
      .remote("flynn", "git@git.example.com:demoapp")
      .unwrap();

    let url = url_from_remote("flynn").unwrap();
    assert!(url.ends_with('\n'));
    assert_eq!(url.trim_end(), "git@git.example.com:demoapp");
  }

  #[test]
  fn test_url_from_missing_remote_is_not_found() {
    let _lock = process_lock();
    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    let err = url_from_remote("flynn").unwrap_err();
    assert!(matches!(err, RemoteError::NotFound { .. }));

    let cwd = env::current_dir().unwrap();
    let message = err.to_string();
    assert!(message.contains("flynn"));
    assert!(message.contains(&cwd.display().to_string()));
  }

  #[test]
  fn test_add_remote_round_trips_through_git_config() {
    let _lock = process_lock();
    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    add_remote("flynn", "git@git.example.com:myapp").unwrap();

    let url = url_from_remote("flynn").unwrap();
    assert_eq!(url.trim_end(), "git@git.example.com:myapp");
  }

  #[test]
  fn test_add_remote_twice_is_an_error() {
    let _lock = process_lock();
    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    add_remote("flynn", "git@git.example.com:myapp").unwrap();

    let result = add_remote("flynn", "git@git.example.com:otherapp");
    assert!(result.is_err());
  }

  #[test]
  fn test_app_from_git_remote() {
    let _lock = process_lock();
    let git_repo = GitRepoTestGuard::new_and_change_dir();

    git_repo
      .repo
      .remote("flynn", "git@git.example.com:demoapp")
      .unwrap();

    let app = app_from_git_remote("flynn").unwrap();
    assert_eq!(app, "demoapp");
  }
}
