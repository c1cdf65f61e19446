//! Implementation of the `gantry init` command.

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write a default `gantry.toml`.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::FileExists { path: args.path });
    }

    let text = AppConfig::default_toml().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })?;

    std::fs::write(&args.path, text)?;
    info!(path = %args.path.display(), "configuration written");

    output.success(&format!("Wrote {}", args.path.display()))?;
    output.print("Edit the marker names and layer namespaces to match your solution.")?;
    Ok(())
}
