//! # Flynn Core Library
//!
//! Core library for the flynn command-line client: the persisted
//! multi-server configuration store, git remote access, remote-URL app
//! extraction, and per-invocation context resolution. The CLI crate and
//! the API client build on the types exposed here.

pub mod config;
pub mod consts;
pub mod context;
pub mod git;
pub mod output;
pub mod remote_url;

// Re-export main types for the CLI and tests
pub use config::{Config, Server, flynnrc_path};
pub use context::RuntimeContext;
pub use git::{RemoteError, add_remote, app_from_git_remote, url_from_remote};
pub use remote_url::{app_from_remote_url, git_host_from_remote_url};
