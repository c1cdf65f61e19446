//! Domain-layer errors: violations of the metadata resolution rules.

use thiserror::Error;

/// Root domain error type.
///
/// Unresolvable property references are deliberately *not* represented
/// here — they are the recoverable omit-and-continue path and never become
/// errors (the property is dropped and the omission logged).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The requested seed type could not be resolved in the configured
    /// namespace. Fatal before any artifact is written.
    #[error("seed type '{name}' not found in namespace '{namespace}'")]
    SeedNotFound { name: String, namespace: String },

    /// A by-name lookup matched more than one type and the caller required
    /// a unique answer.
    #[error("reference '{name}' is ambiguous: matches {candidates:?}")]
    AmbiguousReference {
        name: String,
        candidates: Vec<String>,
    },

    /// A symbol carries no retrievable declaration, so its properties
    /// cannot be enumerated. The only fatal condition a builder raises.
    #[error("symbol '{full_name}' has no retrievable declaration")]
    InvalidSymbol { full_name: String },

    /// A built ClassMeta violated an internal invariant. Indicates a bug
    /// in a builder policy, not bad input.
    #[error("invalid metadata for '{type_name}': {reason}")]
    InvalidMeta { type_name: String, reason: String },
}

impl DomainError {
    pub fn invalid_symbol(full_name: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            full_name: full_name.into(),
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SeedNotFound { .. } => ErrorCategory::NotFound,
            Self::AmbiguousReference { .. } => ErrorCategory::Validation,
            Self::InvalidSymbol { .. } => ErrorCategory::Validation,
            Self::InvalidMeta { .. } => ErrorCategory::Internal,
        }
    }

    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SeedNotFound { name, namespace } => vec![
                format!("No type named '{name}' was found under '{namespace}'"),
                "Check the seed type name and the configured domain namespace".into(),
                "Run with -vv to see which symbol files were loaded".into(),
            ],
            Self::AmbiguousReference { candidates, .. } => vec![
                "More than one type matches this name".into(),
                format!("Candidates: {}", candidates.join(", ")),
                "Qualify the name with its namespace".into(),
            ],
            Self::InvalidSymbol { full_name } => vec![
                format!("The symbol table entry for '{full_name}' has no property list"),
                "Re-export the symbol table with declarations included".into(),
            ],
            Self::InvalidMeta { .. } => vec![
                "This is a bug in gantry, please report it".into(),
            ],
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
