//! Test utilities shared across the flynn workspace
//!
//! This crate provides common testing infrastructure including:
//! - HOME directory isolation ([`HomeDirTestGuard`])
//! - Environment variable save/restore ([`EnvVarGuard`])
//! - Temporary git repository management ([`GitRepoTestGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

pub mod env;
pub mod git;
pub mod home;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use git::GitRepoTestGuard;
pub use home::HomeDirTestGuard;

static PROCESS_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that mutate process-global state (environment
/// variables, the current working directory, HOME).
///
/// Cargo runs tests on parallel threads but environment and working
/// directory are per-process; hold this guard for the duration of any
/// test that touches them.
pub fn process_lock() -> MutexGuard<'static, ()> {
  PROCESS_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
