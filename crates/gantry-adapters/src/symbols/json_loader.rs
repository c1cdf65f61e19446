//! Filesystem symbol loader.
//!
//! A project root is expected to contain one or more `*.symbols.json`
//! files, each a JSON array of symbols exported ahead of time by a
//! language-side analyzer. The loader walks the tree, parses every table
//! it finds, and concatenates the results — later deduplication is the
//! symbol index's job.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use gantry_core::{
    application::{ApplicationError, ports::SymbolProvider},
    domain::Symbol,
    error::GantryResult,
};

use super::SYMBOL_FILE_SUFFIX;

/// Callback invoked once per discovered symbol file, before parsing.
/// Drives load-progress display in the CLI.
pub type ProgressFn = Arc<dyn Fn(&Path) + Send + Sync>;

/// Loads symbol tables from `*.symbols.json` files under a project root.
#[derive(Clone, Default)]
pub struct JsonSymbolLoader {
    progress: Option<ProgressFn>,
}

impl JsonSymbolLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a per-file progress callback.
    pub fn with_progress(progress: impl Fn(&Path) + Send + Sync + 'static) -> Self {
        Self {
            progress: Some(Arc::new(progress)),
        }
    }

    fn symbol_files(&self, project_root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(project_root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "unreadable entry skipped");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(SYMBOL_FILE_SUFFIX))
            })
            .map(|entry| entry.into_path())
            .collect();

        // Walk order is platform-dependent; loading order must not be.
        files.sort();
        files
    }
}

impl SymbolProvider for JsonSymbolLoader {
    #[instrument(skip_all, fields(root = %project_root.display()))]
    fn load_symbols(&self, project_root: &Path) -> GantryResult<Vec<Symbol>> {
        if !project_root.exists() {
            return Err(ApplicationError::SymbolLoad {
                path: project_root.to_path_buf(),
                reason: "project root does not exist".into(),
            }
            .into());
        }

        let files = self.symbol_files(project_root);
        if files.is_empty() {
            return Err(ApplicationError::SymbolLoad {
                path: project_root.to_path_buf(),
                reason: format!("no {SYMBOL_FILE_SUFFIX} files found"),
            }
            .into());
        }

        let mut symbols = Vec::new();
        for file in files {
            if let Some(progress) = &self.progress {
                progress(&file);
            }

            let text = std::fs::read_to_string(&file).map_err(|e| ApplicationError::SymbolLoad {
                path: file.clone(),
                reason: e.to_string(),
            })?;

            let table: Vec<Symbol> =
                serde_json::from_str(&text).map_err(|e| ApplicationError::SymbolLoad {
                    path: file.clone(),
                    reason: format!("malformed symbol table: {e}"),
                })?;

            debug!(file = %file.display(), symbols = table.len(), "symbol table loaded");
            symbols.extend(table);
        }

        info!(symbols = symbols.len(), "symbol loading complete");
        Ok(symbols)
    }
}
