//! # Flynn CLI Library
//!
//! Library modules for the flynn command-line client: the command
//! registry and dispatcher, per-command handlers, and API client
//! construction from the resolved invocation context.

pub mod cli;

mod clients;
