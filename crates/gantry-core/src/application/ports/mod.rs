//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gantry-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ClassMeta, Symbol};
use crate::error::GantryResult;

/// Port for symbol-table acquisition.
///
/// Implemented by:
/// - `gantry_adapters::symbols::JsonSymbolLoader` (production)
/// - `gantry_adapters::symbols::MemorySymbolProvider` (testing)
///
/// The core never parses source text; providers deliver finished symbol
/// facts. Loading may block on I/O — it is the only externally observable
/// blocking step, and its retry/cancellation policy belongs to the
/// provider, not the engine.
pub trait SymbolProvider: Send + Sync {
    /// Load every symbol reachable under the given project root.
    fn load_symbols(&self, project_root: &Path) -> GantryResult<Vec<Symbol>>;
}

/// Port for artifact rendering.
///
/// Deliberately infallible: template failures come back as plain
/// diagnostic text, which the engine writes through unchanged. A broken
/// template produces a file describing the breakage instead of a silently
/// missing artifact.
pub trait TemplateRenderer: Send + Sync {
    /// Render one artifact from its template id, target namespace, and
    /// resolved metadata.
    fn render(&self, template_id: &str, namespace: &str, meta: &ClassMeta) -> String;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gantry_adapters::filesystem::LocalFilesystem` (production)
/// - `gantry_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> GantryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
