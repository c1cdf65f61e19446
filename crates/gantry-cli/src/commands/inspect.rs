//! Implementation of the `gantry inspect` command.
//!
//! Runs one closure and prints the resolved ClassMeta graph as JSON on
//! stdout. Nothing is written to disk.

use std::sync::Arc;

use tracing::instrument;

use gantry_adapters::JsonSymbolLoader;
use gantry_core::application::{ClosureWalker, LookupError, SymbolIndex, ports::SymbolProvider};
use gantry_core::domain::{ClassMeta, DomainError};
use gantry_core::error::GantryError;

use crate::{
    cli::InspectArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Execute the `gantry inspect` command.
#[instrument(skip_all, fields(seed = %args.seed, target = %args.target))]
pub fn execute(args: InspectArgs, config: AppConfig) -> CliResult<()> {
    let symbols = JsonSymbolLoader::new()
        .load_symbols(&args.project_root)
        .map_err(CliError::Core)?;
    let index = SymbolIndex::build(symbols, &config.engine.markers);

    let namespace = &config.engine.namespaces.domain;
    let seed = match index.find_by_name(&args.seed, Some(namespace)) {
        Ok(symbol) => Arc::clone(symbol),
        Err(LookupError::NotFound) => {
            return Err(CliError::Core(GantryError::Domain(
                DomainError::SeedNotFound {
                    name: args.seed.clone(),
                    namespace: namespace.clone(),
                },
            )));
        }
        Err(LookupError::Ambiguous { candidates }) => {
            return Err(CliError::Core(GantryError::Domain(
                DomainError::AmbiguousReference {
                    name: args.seed.clone(),
                    candidates,
                },
            )));
        }
    };

    let walker = ClosureWalker::new(&index, args.target);
    let (built, _) = walker
        .run(&seed)
        .map_err(|e| CliError::Core(GantryError::Domain(e)))?;

    let metas: Vec<&ClassMeta> = built.iter().map(|b| &b.meta).collect();
    let json = serde_json::to_string_pretty(&metas).map_err(|e| {
        CliError::Core(GantryError::Internal {
            message: format!("metadata serialization failed: {e}"),
        })
    })?;

    // JSON goes straight to stdout so it can be piped into jq etc.
    println!("{json}");
    Ok(())
}
