//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use gantry_core::domain::GenerationTarget;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// clap value parser for generation targets.
fn parse_target(s: &str) -> Result<GenerationTarget, String> {
    s.parse()
}

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gantry",
    bin_name = "gantry",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Layered-API artifact generation from one seed type",
    long_about = "Gantry introspects a pre-exported symbol table, resolves the \
                  seed type's whole reference graph, and generates persistence \
                  configurations, command shapes, and query responses for it.",
    after_help = "EXAMPLES:\n\
        \x20 gantry generate ./symbols Order\n\
        \x20 gantry generate ./symbols Order --target configuration --out ./generated\n\
        \x20 gantry inspect ./symbols Order --target get-query\n\
        \x20 gantry completions bash > /usr/share/bash-completion/completions/gantry",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate artifacts for a seed type.
    #[command(
        visible_alias = "gen",
        about = "Generate artifacts for a seed type",
        after_help = "EXAMPLES:\n\
            \x20 gantry generate ./symbols Order\n\
            \x20 gantry generate ./symbols Order --target configuration --target get-query\n\
            \x20 gantry generate ./symbols Order --out ./generated"
    )]
    Generate(GenerateArgs),

    /// Resolve one closure and print the metadata graph as JSON.
    #[command(
        about = "Inspect resolved metadata without writing files",
        after_help = "EXAMPLES:\n\
            \x20 gantry inspect ./symbols Order --target configuration\n\
            \x20 gantry inspect ./symbols Order --target get-query | jq ."
    )]
    Inspect(InspectArgs),

    /// Initialise a gantry configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gantry init            # ./gantry.toml\n\
            \x20 gantry init --force    # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry\n\
            \x20 gantry completions zsh  > ~/.zfunc/_gantry"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `gantry generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project root containing *.symbols.json tables.
    #[arg(value_name = "PROJECT_ROOT", help = "Directory with exported symbol tables")]
    pub project_root: PathBuf,

    /// Simple name of the seed type (resolved in the configured domain
    /// namespace).
    #[arg(value_name = "SEED_TYPE", help = "Seed type name, e.g. Order")]
    pub seed: String,

    /// Output root for generated artifacts.  Defaults to the project root.
    #[arg(short = 'o', long = "out", value_name = "DIR", help = "Artifact output root")]
    pub out: Option<PathBuf>,

    /// Restrict generation to specific targets (repeatable).
    #[arg(
        short = 't',
        long = "target",
        value_name = "TARGET",
        value_parser = parse_target,
        help = "Generation target (configuration, base-command, create-command, update-command, get-query)"
    )]
    pub targets: Vec<GenerationTarget>,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `gantry inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Project root containing *.symbols.json tables.
    #[arg(value_name = "PROJECT_ROOT")]
    pub project_root: PathBuf,

    /// Simple name of the seed type.
    #[arg(value_name = "SEED_TYPE")]
    pub seed: String,

    /// The target whose closure to inspect.
    #[arg(
        short = 't',
        long = "target",
        value_name = "TARGET",
        value_parser = parse_target,
        default_value = "configuration"
    )]
    pub target: GenerationTarget,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gantry init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the configuration file.
    #[arg(
        long = "path",
        value_name = "FILE",
        default_value = "gantry.toml",
        help = "Configuration file to create"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long = "force", help = "Overwrite an existing configuration file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gantry completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}
