//! Implementation of the `gantry completions` command.

use clap::CommandFactory;
use clap_complete::generate;

use crate::{cli::Cli, cli::CompletionsArgs, error::CliResult};

/// Generate completion script for the requested shell on stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "gantry", &mut std::io::stdout());
    Ok(())
}
