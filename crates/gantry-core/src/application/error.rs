//! Application layer errors.
//!
//! These represent orchestration failures (loading, writing), not
//! metadata-resolution rule violations — those are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A symbol table could not be loaded from the project root.
    #[error("failed to load symbols from {path}: {reason}")]
    SymbolLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed (writes fail loudly).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Directory creation failed. Callers log this and continue; the
    /// subsequent write surfaces the real problem if one exists.
    #[error("could not create directory {path}: {reason}")]
    DirectoryCreate { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SymbolLoad { path, .. } => vec![
                format!("Could not read symbols under: {}", path.display()),
                "Check that the project root contains *.symbols.json files".into(),
                "Run with -vv to see which files were attempted".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DirectoryCreate { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check permissions on the output root".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SymbolLoad { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } | Self::DirectoryCreate { .. } => ErrorCategory::Internal,
        }
    }
}
