//! Config command implementation.

use anyhow::Result;

use crate::cli::ConfigArgs;
use crate::config::ServerConfig;

/// Print the effective configuration to stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn execute(args: &ConfigArgs, config: &ServerConfig) -> Result<()> {
    let rendered = render(args, config)?;
    print!("{rendered}");
    Ok(())
}

fn render(args: &ConfigArgs, config: &ServerConfig) -> Result<String> {
    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(config)?))
    } else {
        Ok(serde_yaml::to_string(config)?)
    }
}
