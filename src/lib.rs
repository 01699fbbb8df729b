//! `issue_tracker` - in-memory issue tracking service
//!
//! This crate provides the `issued` HTTP server on top of the
//! [`tracker_lib`] core.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered configuration (CLI, env, YAML, defaults)
//! - [`error`] - HTTP error mapping
//! - [`logging`] - Tracing subscriber setup
//! - [`server`] - axum router, handlers and shared state

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{AppState, router};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration or command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
