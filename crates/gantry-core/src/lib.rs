//! Gantry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gantry
//! artifact generator: a metadata resolution engine that turns one seed
//! domain type into typed, deduplicated graphs of class/property
//! descriptors — one graph per generation target — ready for template
//! rendering.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gantry-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SymbolIndex, MetaBuilder,             │
//! │   ClosureWalker, GenerateService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SymbolProvider, Renderer, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gantry-adapters (Infrastructure)    │
//! │ (JsonSymbolLoader, SimpleRenderer, fs)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Symbol, ClassMeta, classification)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gantry_core::{
//!     application::{EngineSettings, GenerateService, SymbolIndex},
//!     domain::GenerationTarget,
//! };
//!
//! # fn demo(symbols: Vec<gantry_core::domain::Symbol>,
//! #         renderer: Box<dyn gantry_core::application::TemplateRenderer>,
//! #         filesystem: Box<dyn gantry_core::application::Filesystem>)
//! #         -> gantry_core::error::GantryResult<()> {
//! let settings = EngineSettings::default();
//! let index = SymbolIndex::build(symbols, &settings.markers);
//!
//! let service = GenerateService::new(renderer, filesystem);
//! let report = service.generate(
//!     &index,
//!     "Order",
//!     &settings,
//!     "./output".as_ref(),
//!     &GenerationTarget::ALL,
//! )?;
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EngineSettings, GenerateReport, GenerateService, LayerNamespaces, LayerPaths, SymbolIndex,
        ports::{Filesystem, SymbolProvider, TemplateRenderer},
    };
    pub use crate::domain::{
        ClassMeta, GenerationTarget, MarkerNames, PropertyDescriptor, PropertyFact, Symbol,
        TypeFacts,
    };
    pub use crate::error::{GantryError, GantryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
