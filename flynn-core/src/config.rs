//! # Configuration Store
//!
//! The persisted multi-server configuration, stored as TOML in
//! `~/.flynnrc`. The file is loaded wholesale at startup and rewritten
//! wholesale after mutation; there is no partial persistence and no
//! locking (concurrent invocations are last-writer-wins).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

/// One configured backend endpoint, keyed by the git host it serves.
///
/// Field names are PascalCase on disk to keep the `.flynnrc` format
/// stable across client versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Server {
  pub git_host: String,
  pub api_url: String,
  pub api_key: String,
  pub api_tls_pin: String,
}

/// Ordered list of configured servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
  #[serde(rename = "Servers", default)]
  pub servers: Vec<Server>,
}

/// Get the path to the `.flynnrc` file in the user's home directory.
pub fn flynnrc_path() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Could not determine home directory")?;
  Ok(base_dirs.home_dir().join(".flynnrc"))
}

impl Config {
  /// Load the configuration from `~/.flynnrc`.
  ///
  /// A missing or unparseable file is an error; the caller decides
  /// whether that is fatal.
  pub fn load() -> Result<Self> {
    Self::load_from(&flynnrc_path()?)
  }

  /// Load the configuration from an explicit path.
  pub fn load_from(path: &Path) -> Result<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
  }

  /// Write the full configuration back to `~/.flynnrc`, creating the
  /// file if absent and truncating it otherwise.
  pub fn save(&self) -> Result<()> {
    self.save_to(&flynnrc_path()?)
  }

  /// Write the full configuration to an explicit path.
  pub fn save_to(&self, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

    fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
  }

  /// Remote URL for pushing an app to the first configured server.
  pub fn git_remote_url(&self, app: &str) -> Result<String> {
    let server = self
      .servers
      .first()
      .context("No servers configured; run 'flynn login' first")?;

    Ok(format!("git@{}:{}", server.git_host, app))
  }
}

#[cfg(test)]
mod tests {
  use flynn_test_utils::{HomeDirTestGuard, process_lock};
  use tempfile::TempDir;

  use super::*;

  fn sample_server(host: &str, api_url: &str) -> Server {
    Server {
      git_host: host.to_string(),
      api_url: api_url.to_string(),
      api_key: "s3cret".to_string(),
      api_tls_pin: "pin".to_string(),
    }
  }

  #[test]
  fn test_round_trip_preserves_servers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".flynnrc");

    let config = Config {
      servers: vec![
        sample_server("git.one.example.com", "https://api.one.example.com"),
        sample_server("git.two.example.com", "https://api.two.example.com"),
        sample_server("git.three.example.com", "https://api.three.example.com"),
      ],
    };

    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();

    assert_eq!(reloaded.servers, config.servers);
  }

  #[test]
  fn test_on_disk_format_uses_pascal_case_tables() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".flynnrc");

    let config = Config {
      servers: vec![sample_server("git.example.com", "https://api.example.com")],
    };
    config.save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[Servers]]"));
    assert!(content.contains("GitHost"));
    assert!(content.contains("ApiUrl"));
    assert!(content.contains("ApiKey"));
    assert!(content.contains("ApiTlsPin"));
  }

  #[test]
  fn test_load_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".flynnrc");

    let result = Config::load_from(&path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to read config"));
  }

  #[test]
  fn test_load_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".flynnrc");
    std::fs::write(&path, "[[Servers]\nGitHost = ").unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to parse config"));
  }

  #[test]
  fn test_flynnrc_path_is_in_home_dir() {
    let _lock = process_lock();
    let home = HomeDirTestGuard::new();

    let path = flynnrc_path().unwrap();
    assert_eq!(path, home.home_dir().join(".flynnrc"));
  }

  #[test]
  fn test_git_remote_url_uses_first_server() {
    let config = Config {
      servers: vec![
        sample_server("git.first.example.com", "https://api.first.example.com"),
        sample_server("git.second.example.com", "https://api.second.example.com"),
      ],
    };

    let url = config.git_remote_url("myapp").unwrap();
    assert_eq!(url, "git@git.first.example.com:myapp");
  }

  #[test]
  fn test_git_remote_url_without_servers_is_an_error() {
    let config = Config::default();

    let result = config.git_remote_url("myapp");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No servers configured"));
  }
}
