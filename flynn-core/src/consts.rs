//! Constants shared across flynn components.

/// Environment variable overriding the controller API URL.
pub const ENV_API_URL: &str = "FLYNN_API_URL";

/// Environment variable overriding the application name.
pub const ENV_APP: &str = "FLYNN_APP";

/// Controller endpoint used when no override or configured server applies.
pub const DEFAULT_API_URL: &str = "http://localhost:1200";

/// Name of the git remote flynn reads app context from and writes on
/// `flynn create`.
pub const FLYNN_REMOTE: &str = "flynn";

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";
