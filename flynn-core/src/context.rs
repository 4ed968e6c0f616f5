//! # Invocation Context Resolution
//!
//! Determines which application and API endpoint the current command
//! targets. App resolution walks a precedence chain (explicit `-a` flag,
//! `FLYNN_APP`, the local `flynn` git remote); API URL resolution prefers
//! `FLYNN_API_URL` and otherwise scans the configured server list against
//! the git host of the `flynn` remote, falling back to the built-in
//! default endpoint. The context is built once at startup and passed by
//! reference into command handlers.

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Config, Server};
use crate::consts::{DEFAULT_API_URL, ENV_API_URL, ENV_APP, FLYNN_REMOTE};
use crate::git::{app_from_git_remote, url_from_remote};
use crate::remote_url::git_host_from_remote_url;

/// Immutable per-invocation context.
#[derive(Debug)]
pub struct RuntimeContext {
  config: Config,
  flag_app: Option<String>,
  api_url: String,
  api_key: Option<String>,
}

impl RuntimeContext {
  /// Build the context from the loaded configuration and the raw `-a`
  /// flag value.
  ///
  /// A `-a` value naming a configured git remote is resolved to the app
  /// embedded in that remote's URL; any value that does not resolve is
  /// kept as a literal app name.
  pub fn new(config: Config, flag_app: Option<String>) -> Self {
    let flag_app = flag_app.map(|value| match app_from_git_remote(&value) {
      Ok(app) => {
        debug!(remote = %value, app, "resolved -a flag through git remote");
        app
      }
      Err(_) => value,
    });

    let (api_url, api_key) = resolve_api_url(&config);

    Self {
      config,
      flag_app,
      api_url,
      api_key,
    }
  }

  /// Resolve the effective app name.
  ///
  /// Precedence, first match wins: the `-a` flag, a non-empty
  /// `FLYNN_APP`, then the app derived from the `flynn` git remote.
  pub fn app(&self) -> Result<String> {
    if let Some(app) = &self.flag_app {
      return Ok(app.clone());
    }

    if let Ok(app) = env::var(ENV_APP) {
      if !app.is_empty() {
        return Ok(app);
      }
    }

    app_from_git_remote(FLYNN_REMOTE).context(
      "No application context: pass -a APP, set FLYNN_APP, or add a 'flynn' git remote",
    )
  }

  /// The effective API base URL for this invocation.
  pub fn api_url(&self) -> &str {
    &self.api_url
  }

  /// API key of the configured server the API URL was taken from, if any.
  pub fn api_key(&self) -> Option<&str> {
    self.api_key.as_deref()
  }

  /// The loaded server configuration.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// The resolved `-a` flag value, if one was supplied.
  pub fn flag_app(&self) -> Option<&str> {
    self.flag_app.as_deref()
  }
}

/// Pick the API base URL and key for this invocation.
///
/// `FLYNN_API_URL` short-circuits (trailing slash stripped). Otherwise
/// the server list is scanned in order against the git host of the
/// `flynn` remote; every matching entry overwrites the selection, so the
/// last match wins. No match leaves the default endpoint in effect.
fn resolve_api_url(config: &Config) -> (String, Option<String>) {
  if let Ok(url) = env::var(ENV_API_URL) {
    if !url.is_empty() {
      return (url.trim_end_matches('/').to_string(), None);
    }
  }

  let mut selected: Option<&Server> = None;
  if let Ok(remote_url) = url_from_remote(FLYNN_REMOTE) {
    if let Some(host) = git_host_from_remote_url(&remote_url) {
      for server in &config.servers {
        if server.git_host == host {
          selected = Some(server);
        }
      }
    }
  }

  match selected {
    Some(server) => {
      debug!(git_host = %server.git_host, api_url = %server.api_url, "matched configured server");
      (server.api_url.clone(), Some(server.api_key.clone()))
    }
    None => (DEFAULT_API_URL.to_string(), None),
  }
}

#[cfg(test)]
mod tests {
  use flynn_test_utils::{EnvVarGuard, GitRepoTestGuard, process_lock};

  use super::*;

  fn server(git_host: &str, api_url: &str, api_key: &str) -> Server {
    Server {
      git_host: git_host.to_string(),
      api_url: api_url.to_string(),
      api_key: api_key.to_string(),
      api_tls_pin: String::new(),
    }
  }

  fn config_with(servers: Vec<Server>) -> Config {
    Config { servers }
  }

  #[test]
  fn test_flag_wins_over_env_and_remote() {
    let _lock = process_lock();
    let app_guard = EnvVarGuard::new(ENV_APP);
    app_guard.set("envapp");
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:remoteapp")
      .unwrap();

    let ctx = RuntimeContext::new(Config::default(), Some("explicitapp".to_string()));
    assert_eq!(ctx.app().unwrap(), "explicitapp");
  }

  #[test]
  fn test_env_wins_over_remote_without_flag() {
    let _lock = process_lock();
    let app_guard = EnvVarGuard::new(ENV_APP);
    app_guard.set("envapp");
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:remoteapp")
      .unwrap();

    let ctx = RuntimeContext::new(Config::default(), None);
    assert_eq!(ctx.app().unwrap(), "envapp");
  }

  #[test]
  fn test_remote_derived_app_without_flag_or_env() {
    let _lock = process_lock();
    let app_guard = EnvVarGuard::new(ENV_APP);
    app_guard.remove();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:remoteapp")
      .unwrap();

    let ctx = RuntimeContext::new(Config::default(), None);
    assert_eq!(ctx.app().unwrap(), "remoteapp");
  }

  #[test]
  fn test_no_context_is_an_error() {
    let _lock = process_lock();
    let app_guard = EnvVarGuard::new(ENV_APP);
    app_guard.remove();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    let ctx = RuntimeContext::new(Config::default(), None);
    let result = ctx.app();
    assert!(result.is_err());
    assert!(
      result
        .unwrap_err()
        .to_string()
        .contains("No application context")
    );
  }

  #[test]
  fn test_flag_naming_a_remote_resolves_to_its_app() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("staging", "git@git.example.com:realapp")
      .unwrap();

    let ctx = RuntimeContext::new(Config::default(), Some("staging".to_string()));
    assert_eq!(ctx.app().unwrap(), "realapp");
  }

  #[test]
  fn test_flag_not_naming_a_remote_stays_literal() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    let ctx = RuntimeContext::new(Config::default(), Some("literalapp".to_string()));
    assert_eq!(ctx.app().unwrap(), "literalapp");
  }

  #[test]
  fn test_api_url_env_override_wins_and_strips_trailing_slash() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.set("https://override.example.com/");

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:demoapp")
      .unwrap();

    // A matching configured server exists but the override still wins.
    let config = config_with(vec![server("git.example.com", "https://api.example.com", "key")]);
    let ctx = RuntimeContext::new(config, None);

    assert_eq!(ctx.api_url(), "https://override.example.com");
    assert_eq!(ctx.api_key(), None);
  }

  #[test]
  fn test_api_url_from_matching_server() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();
    let app_guard = EnvVarGuard::new(ENV_APP);
    app_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:demoapp")
      .unwrap();

    let config = config_with(vec![
      server("git.other.example.com", "https://api.other.example.com", "other"),
      server("git.example.com", "https://api.example.com", "key"),
    ]);
    let ctx = RuntimeContext::new(config, None);

    assert_eq!(ctx.app().unwrap(), "demoapp");
    assert_eq!(ctx.api_url(), "https://api.example.com");
    assert_eq!(ctx.api_key(), Some("key"));
  }

  #[test]
  fn test_api_url_last_matching_server_wins() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let git_repo = GitRepoTestGuard::new_and_change_dir();
    git_repo
      .repo
      .remote("flynn", "git@git.example.com:demoapp")
      .unwrap();

    let config = config_with(vec![
      server("git.example.com", "https://api.first.example.com", "first"),
      server("git.example.com", "https://api.second.example.com", "second"),
    ]);
    let ctx = RuntimeContext::new(config, None);

    assert_eq!(ctx.api_url(), "https://api.second.example.com");
    assert_eq!(ctx.api_key(), Some("second"));
  }

  #[test]
  fn test_api_url_defaults_without_remote_or_match() {
    let _lock = process_lock();
    let url_guard = EnvVarGuard::new(ENV_API_URL);
    url_guard.remove();

    let _git_repo = GitRepoTestGuard::new_and_change_dir();

    let config = config_with(vec![server("git.example.com", "https://api.example.com", "key")]);
    let ctx = RuntimeContext::new(config, None);

    assert_eq!(ctx.api_url(), DEFAULT_API_URL);
    assert_eq!(ctx.api_key(), None);
  }
}
