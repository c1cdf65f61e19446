//! Implementation of the `gantry generate` command.
//!
//! Responsibility: wire adapters to the core generate service and display
//! results. No resolution logic lives here.

use tracing::{debug, info, instrument};

use gantry_adapters::{JsonSymbolLoader, LocalFilesystem, SimpleRenderer};
use gantry_core::application::{GenerateService, SymbolIndex, ports::SymbolProvider};
use gantry_core::domain::GenerationTarget;

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gantry generate` command.
///
/// Sequence:
/// 1. Load symbol tables from the project root (with progress display)
/// 2. Build the symbol index (markers resolved here, once)
/// 3. Run the multi-target generation
/// 4. Print the per-target summary
#[instrument(skip_all, fields(seed = %args.seed))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let output_root = args.out.clone().unwrap_or_else(|| args.project_root.clone());
    let targets = resolve_targets(&args.targets);

    debug!(
        root = %args.project_root.display(),
        out = %output_root.display(),
        targets = targets.len(),
        verbose = global.verbose,
        "generate started"
    );

    // 1. Load symbols
    let spinner = output.spinner("Loading symbol tables...");
    let loader = match &spinner {
        Some(bar) => {
            let bar = bar.clone();
            JsonSymbolLoader::with_progress(move |path| {
                bar.set_message(format!("Loading {}", path.display()));
            })
        }
        None => JsonSymbolLoader::new(),
    };

    let symbols = loader
        .load_symbols(&args.project_root)
        .map_err(CliError::Core)?;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    info!(symbols = symbols.len(), "symbol tables loaded");

    // 2. Index
    let index = SymbolIndex::build(symbols, &config.engine.markers);
    output.info(&format!("{} symbols indexed", index.len()))?;

    // 3. Generate
    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Generating artifacts for '{}'...", args.seed))?;
    let report = service
        .generate(&index, &args.seed, &config.engine, &output_root, &targets)
        .map_err(CliError::Core)?;

    // 4. Summary
    for (target, count) in &report.per_target {
        output.print(&format!("  {target}: {count} artifact(s)"))?;
    }
    output.success(&format!(
        "{} artifacts written under {}",
        report.total(),
        output_root.display()
    ))?;

    Ok(())
}

/// The requested targets, deduplicated in request order; all five when
/// none were requested.
fn resolve_targets(requested: &[GenerationTarget]) -> Vec<GenerationTarget> {
    if requested.is_empty() {
        return GenerationTarget::ALL.to_vec();
    }

    let mut targets = Vec::new();
    for target in requested {
        if !targets.contains(target) {
            targets.push(*target);
        }
    }
    targets
}
