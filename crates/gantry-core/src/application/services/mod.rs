//! Application services: the metadata resolution pipeline.
//!
//! Dependency order, leaves first: symbol index → relationship resolver →
//! meta builder → closure walker → generate service.

pub mod builder;
pub mod closure;
pub mod generate;
pub mod relationship;
pub mod symbol_index;

pub use builder::{
    DictionaryPolicy, EntityPolicy, MetaBuilder, RecursePredicate, TargetPolicy, ValueObjectPolicy,
};
pub use closure::{BuiltMeta, ClosureWalker, VisitedSet};
pub use generate::{GenerateReport, GenerateService};
pub use relationship::{RelationshipLinks, find_collection_of, identifier_type_for, resolve_links};
pub use symbol_index::{LookupError, SymbolIndex};
