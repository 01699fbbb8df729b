//! Serve command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ServerConfig;
use crate::server;

/// Execute the serve command. Blocks until shutdown.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the server fails.
pub fn execute(config: &ServerConfig) -> Result<()> {
    info!(
        bind = %config.bind,
        id_prefix = %config.id_prefix,
        origins = ?config.cors_origins,
        "starting issued {}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(server::serve(config))
}
