//! Core domain layer for gantry.
//!
//! Pure data and pure functions: symbols, classification, resolved
//! metadata, and the domain error taxonomy. No I/O, no async, no external
//! services — everything effectful lives behind application-layer ports.

pub mod classify;
pub mod error;
pub mod meta;
pub mod symbol;

// Re-exports for convenience
pub use classify::{TypeCategory, classify, classify_fact, element_type_name};
pub use error::{DomainError, ErrorCategory};
pub use meta::{ClassMeta, GenerationTarget, PropertyDescriptor};
pub use symbol::{
    Marker, MarkerNames, MarkerSet, PropertyFact, Symbol, TypeFacts, is_nullable, split_full_name,
    strip_nullable,
};
