//! Application layer for gantry.
//!
//! This layer contains:
//! - **Services**: the resolution pipeline (index, builder, closure,
//!   generation)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Settings**: the static configuration surface the engine consumes
//! - **Errors**: application-specific error types
//!
//! Business rules (classification, flattening, relationship inference
//! policies) live in the services; `crate::domain` holds the data model
//! and pure classification functions.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export main services
pub use services::{
    ClosureWalker, GenerateReport, GenerateService, LookupError, MetaBuilder, SymbolIndex,
    TargetPolicy, VisitedSet,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SymbolProvider, TemplateRenderer};

pub use error::ApplicationError;
pub use settings::{EngineSettings, LayerNamespaces, LayerPaths};
