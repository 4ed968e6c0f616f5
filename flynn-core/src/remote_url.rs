//! # Remote URL Parsing
//!
//! Extracts app names and git hosts from remote URLs. The app pattern is
//! a single composed alternation over the three URL shapes that carry an
//! app segment; the shapes overlap in their use of `:` and `/`, so they
//! must be tried as one alternation rather than as separate passes.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

// Matches, in order: `user@localhost[:port]/app`, `user@<ip>[:port]/app`,
// and SCP-style `host:app`, each optionally prefixed with `ssh://`. The
// final `.+:` arm is deliberately permissive and takes the segment after
// the last colon as the app name.
static APP_FROM_REMOTE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?:ssh://)?(?:\w+)@(?:localhost(?::\d+)?/|\d{1,3}.\d{1,3}.\d{1,3}.\d{1,3}(?::\d+)?/|.+:)(.+)")
    .expect("Failed to compile remote URL regex")
});

/// Extract the app name from a remote URL.
///
/// Surrounding whitespace and newlines are trimmed first, so output read
/// straight from `git config` can be passed in unchanged.
pub fn app_from_remote_url(url: &str) -> Result<String> {
  let url = url.trim_matches(['\r', '\n', ' ']);

  let captures = APP_FROM_REMOTE_URL_REGEX
    .captures(url)
    .ok_or_else(|| anyhow::anyhow!("Could not find app name in {url} git remote"))?;

  Ok(captures[1].to_string())
}

/// Extract the git host from a remote URL.
///
/// Recognizes the same shapes as [`app_from_remote_url`]: the host is the
/// portion between the `user@` prefix and the first `:` or `/`. Returns
/// `None` when the URL has no such shape.
pub fn git_host_from_remote_url(url: &str) -> Option<String> {
  let url = url.trim_matches(['\r', '\n', ' ']);
  let rest = url.strip_prefix("ssh://").unwrap_or(url);

  let (_, host_and_path) = rest.split_once('@')?;
  let host = host_and_path.split([':', '/']).next()?;

  (!host.is_empty()).then(|| host.to_string())
}
