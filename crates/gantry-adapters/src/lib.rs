//! Infrastructure adapters for gantry.
//!
//! This crate implements the ports defined in `gantry-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod symbols;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use symbols::{JsonSymbolLoader, MemorySymbolProvider};
