//! Resolved metadata: [`ClassMeta`] and [`PropertyDescriptor`].
//!
//! A `ClassMeta` is the target-specific, render-ready description of one
//! type. Instances are built fresh per (symbol, generation target) and are
//! never shared between targets. Cloning is deep — a clone can be mutated
//! (extra namespaces, reordered embedding) without touching the original,
//! which is how the same logical metadata gets embedded into several
//! emitted artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One generation target. Each target runs its own closure over the
/// reference graph with its own filtering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationTarget {
    /// Persistence-layer configuration with relationship metadata.
    Configuration,
    /// Shared command payload: scalars plus flattened value objects.
    BaseCommand,
    /// Creation command: nested entity shapes, no identity yet.
    CreateCommand,
    /// Update command: nested entity shapes addressed by identifier.
    UpdateCommand,
    /// Read-side response shape.
    GetQuery,
}

impl GenerationTarget {
    /// All targets, in generation order.
    pub const ALL: [GenerationTarget; 5] = [
        Self::Configuration,
        Self::BaseCommand,
        Self::CreateCommand,
        Self::UpdateCommand,
        Self::GetQuery,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::BaseCommand => "base-command",
            Self::CreateCommand => "create-command",
            Self::UpdateCommand => "update-command",
            Self::GetQuery => "get-query",
        }
    }
}

impl fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GenerationTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "configuration" | "config" => Ok(Self::Configuration),
            "base-command" | "base" => Ok(Self::BaseCommand),
            "create-command" | "create" => Ok(Self::CreateCommand),
            "update-command" | "update" => Ok(Self::UpdateCommand),
            "get-query" | "get" | "query" => Ok(Self::GetQuery),
            other => Err(format!("unknown generation target: {other}")),
        }
    }
}

/// One property's resolved, classified description.
///
/// Field names mirror the renderer contract: short JSON keys keep the
/// serialized context compact, as template payloads are embedded verbatim
/// in generated files when a template fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(rename = "n")]
    pub name: String,

    /// Resolved type name for the artifact (element simple name for
    /// collections, flattened scalar for value objects).
    #[serde(rename = "t")]
    pub type_name: String,

    #[serde(rename = "s")]
    pub is_simple: bool,

    /// Stable source declaration order (1-based, unique per ClassMeta).
    #[serde(rename = "o")]
    pub order: u32,

    #[serde(rename = "c")]
    pub is_collection: bool,

    #[serde(rename = "v")]
    pub is_value_object: bool,

    #[serde(rename = "sp", default)]
    pub is_setter_public: bool,

    /// Reciprocal property on the related type (the scalar back-reference
    /// for collections).
    #[serde(rename = "w", skip_serializing_if = "Option::is_none", default)]
    pub paired_with: Option<String>,

    /// Scalar identifier property representing the relation.
    #[serde(rename = "f", skip_serializing_if = "Option::is_none", default)]
    pub foreign_key: Option<String>,

    /// Collection on the "one" side, when this side is the "many".
    #[serde(rename = "m", skip_serializing_if = "Option::is_none", default)]
    pub paired_with_many: Option<String>,
}

impl PropertyDescriptor {
    /// A plain descriptor with no relationship metadata.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_simple: false,
            order,
            is_collection: false,
            is_value_object: false,
            is_setter_public: true,
            paired_with: None,
            foreign_key: None,
            paired_with_many: None,
        }
    }

    pub fn simple(name: impl Into<String>, type_name: impl Into<String>, order: u32) -> Self {
        Self {
            is_simple: true,
            ..Self::new(name, type_name, order)
        }
    }
}

/// The resolved, target-specific metadata for one type, ready for
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMeta {
    #[serde(rename = "n")]
    pub name: String,

    #[serde(rename = "ns")]
    pub namespace: String,

    /// Dependency rank within the closure run (1-based visit order).
    /// Used to number generated artifacts within a batch.
    #[serde(rename = "o")]
    pub order: u32,

    #[serde(rename = "p")]
    pub properties: Vec<PropertyDescriptor>,

    /// Auxiliary namespaces the emitted artifact must import.
    /// BTreeSet keeps emission deterministic.
    #[serde(rename = "u", default)]
    pub namespaces: BTreeSet<String>,
}

impl ClassMeta {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            order: 0,
            properties: Vec::new(),
            namespaces: BTreeSet::new(),
        }
    }

    pub fn push(&mut self, descriptor: PropertyDescriptor) {
        self.properties.push(descriptor);
    }

    pub fn add_namespace(&mut self, namespace: impl Into<String>) {
        let ns = namespace.into();
        if !ns.is_empty() && ns != self.namespace {
            self.namespaces.insert(ns);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Validate internal invariants: unique property orders and category
    /// exclusivity.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = BTreeSet::new();
        for prop in &self.properties {
            if !seen.insert(prop.order) {
                return Err(format!(
                    "{}: duplicate property order {} ({})",
                    self.name, prop.order, prop.name
                ));
            }
            if prop.is_simple && prop.is_collection {
                return Err(format!(
                    "{}: property {} is both simple and collection",
                    self.name, prop.name
                ));
            }
            if prop.is_value_object && prop.is_collection {
                return Err(format!(
                    "{}: collection property {} marked as value object",
                    self.name, prop.name
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClassMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} ({} properties)",
            self.namespace,
            self.name,
            self.properties.len()
        )
    }
}
