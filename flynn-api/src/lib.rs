//! # Flynn Controller API Client
//!
//! Provides a minimal REST client for the Flynn controller: one-off jobs,
//! process listing, logs, formation scaling, and domain routing. The CLI
//! treats these endpoints as opaque; context resolution decides which
//! base URL and key the client is built with.

mod client;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::Client;
// Re-export models
pub use models::{Domain, Formation, Job, NewJob};
