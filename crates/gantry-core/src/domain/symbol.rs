//! Symbol model: the semantic description of one declared type.
//!
//! Symbols are produced by a [`SymbolProvider`](crate::application::ports::SymbolProvider)
//! and are immutable once loaded. The core never parses source text — every
//! fact it reasons about (ancestry, properties, genericity) arrives here as
//! plain data.
//!
//! ## Marker identities
//!
//! The engine cares about three configurable "marker" base types: the
//! value-object base, the lookup-table (dictionary) base, and the entity
//! base. Whether a symbol satisfies a marker is resolved **once**, when the
//! symbol index is built, by walking `full_name` + `base_types` +
//! `interfaces` with the `== X || ends_with(".X")` rule — afterwards every
//! consumer reads the precomputed [`MarkerSet`] instead of re-walking
//! ancestor chains.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three marker identities a referenced type can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Single-concept scalar wrapper, flattened in generated artifacts.
    ValueObject,
    /// Lookup-table style type, represented by a synthesized identifier.
    DictionaryEntity,
    /// First-class domain type with its own identity.
    Entity,
}

/// Configured names of the three marker base types.
///
/// Names may be simple (`ValueObject`) or fully qualified
/// (`Domain.Common.ValueObject`); matching accepts either form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerNames {
    pub value_object: String,
    pub dictionary: String,
    pub entity: String,
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            value_object: "ValueObject".into(),
            dictionary: "DictionaryEntity".into(),
            entity: "EntityBase".into(),
        }
    }
}

/// Precomputed marker membership for one symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    value_object: bool,
    dictionary: bool,
    entity: bool,
}

impl MarkerSet {
    /// No marker satisfied — the symbol is an unclassified reference.
    pub const NONE: Self = Self {
        value_object: false,
        dictionary: false,
        entity: false,
    };

    /// Resolve marker membership from a symbol's identity facts.
    ///
    /// A marker is satisfied when the type itself, any ancestor in its
    /// base-type chain, or any implemented interface has a fully-qualified
    /// name equal to the marker name or ending in `.{marker name}`.
    pub fn resolve(
        full_name: &str,
        base_types: &[String],
        interfaces: &[String],
        names: &MarkerNames,
    ) -> Self {
        let satisfied = |marker: &str| {
            identity_matches(full_name, marker)
                || base_types.iter().any(|b| identity_matches(b, marker))
                || interfaces.iter().any(|i| identity_matches(i, marker))
        };

        Self {
            value_object: satisfied(&names.value_object),
            dictionary: satisfied(&names.dictionary),
            entity: satisfied(&names.entity),
        }
    }

    pub fn satisfies(&self, marker: Marker) -> bool {
        match marker {
            Marker::ValueObject => self.value_object,
            Marker::DictionaryEntity => self.dictionary,
            Marker::Entity => self.entity,
        }
    }

    pub fn is_value_object(&self) -> bool {
        self.value_object
    }

    pub fn is_dictionary(&self) -> bool {
        self.dictionary
    }

    pub fn is_entity(&self) -> bool {
        self.entity
    }

    pub fn is_none(&self) -> bool {
        !(self.value_object || self.dictionary || self.entity)
    }
}

/// `candidate` names the marker when it equals it outright or ends with
/// `.{marker}` (namespace-qualified form).
fn identity_matches(candidate: &str, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    candidate == marker
        || (candidate.len() > marker.len()
            && candidate.ends_with(marker)
            && candidate.as_bytes()[candidate.len() - marker.len() - 1] == b'.')
}

/// Semantic description of one declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Simple name (`Order`).
    pub name: String,
    /// Containing namespace (`Shop.Domain.Orders`).
    pub namespace: String,
    /// Unique fully-qualified name (`Shop.Domain.Orders.Order`).
    pub full_name: String,
    /// Fully-qualified base-type chain, nearest-first.
    #[serde(default)]
    pub base_types: Vec<String>,
    /// Fully-qualified implemented interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Generic type arguments, in declaration order.
    #[serde(default)]
    pub generic_args: Vec<String>,
    /// Ordered public instance properties. `None` means the provider could
    /// not retrieve a declaration for this type — builders raise
    /// `InvalidSymbol` rather than fabricate an empty shape.
    #[serde(default)]
    pub properties: Option<Vec<PropertyFact>>,
    /// Names of properties assigned from constructor parameters.
    /// Consulted by value-object flattening when a wrapper exposes more
    /// than one public property.
    #[serde(default)]
    pub constructor_assigned: Vec<String>,
    /// Property names declared as navigation-only by a companion
    /// configuration type. Empty for ordinary domain symbols.
    #[serde(default)]
    pub declared_navigations: Vec<String>,
    /// Precomputed marker membership. Never trusted from input data —
    /// always recomputed when the symbol index is built.
    #[serde(skip)]
    pub markers: MarkerSet,
}

impl Symbol {
    /// Convenience constructor for providers and tests; `full_name` is
    /// derived as `namespace.name`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        let full_name = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{namespace}.{name}")
        };
        Self {
            name,
            namespace,
            full_name,
            base_types: Vec::new(),
            interfaces: Vec::new(),
            generic_args: Vec::new(),
            properties: None,
            constructor_assigned: Vec::new(),
            declared_navigations: Vec::new(),
            markers: MarkerSet::NONE,
        }
    }

    /// Whether the provider supplied a retrievable declaration.
    pub fn has_declaration(&self) -> bool {
        self.properties.is_some()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_types.push(base.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyFact>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_constructor_assigned(mut self, names: Vec<String>) -> Self {
        self.constructor_assigned = names;
        self
    }

    pub fn with_navigations(mut self, names: Vec<String>) -> Self {
        self.declared_navigations = names;
        self
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// One public instance property, as declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFact {
    pub name: String,
    /// Declared type name; may carry a trailing `?` nullability marker.
    pub type_name: String,
    /// 1-based source declaration order.
    pub order: u32,
    #[serde(default)]
    pub is_setter_public: bool,
    /// Resolved type information, when the provider could resolve the
    /// declared type semantically. Absent for unresolvable types — the
    /// classifier then falls back to name heuristics.
    #[serde(default)]
    pub semantic: Option<TypeFacts>,
}

impl PropertyFact {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            order,
            is_setter_public: true,
            semantic: None,
        }
    }

    pub fn with_semantic(mut self, semantic: TypeFacts) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// The referenced type's fully-qualified name, when known.
    pub fn referenced_full_name(&self) -> Option<&str> {
        self.semantic.as_ref().map(|s| s.full_name.as_str())
    }
}

/// Semantic facts about a property's declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeFacts {
    /// Fully-qualified display name of the declared type.
    pub full_name: String,
    #[serde(default)]
    pub is_builtin_scalar: bool,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub implements_enumerable: bool,
    /// Generic type arguments (fully qualified). For arrays, providers
    /// surface the element type here as the single entry.
    #[serde(default)]
    pub generic_args: Vec<String>,
}

impl TypeFacts {
    pub fn reference(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            is_builtin_scalar: false,
            is_array: false,
            implements_enumerable: false,
            generic_args: Vec::new(),
        }
    }

    pub fn enumerable_of(full_name: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            is_builtin_scalar: false,
            is_array: false,
            implements_enumerable: true,
            generic_args: vec![element.into()],
        }
    }
}

/// Strip one trailing nullability marker, if present.
pub fn strip_nullable(type_name: &str) -> &str {
    type_name.trim_end_matches('?')
}

/// Whether the declared type carries a trailing nullability marker.
pub fn is_nullable(type_name: &str) -> bool {
    type_name.ends_with('?')
}

/// Split a fully-qualified name into `(namespace, simple name)`.
///
/// Names without a namespace segment yield an empty namespace.
pub fn split_full_name(full_name: &str) -> (&str, &str) {
    match full_name.rsplit_once('.') {
        Some((namespace, simple)) => (namespace, simple),
        None => ("", full_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_resolution_walks_bases_and_interfaces() {
        let names = MarkerNames::default();

        let markers = MarkerSet::resolve(
            "Shop.Domain.Order",
            &["Shop.Domain.Common.EntityBase".into()],
            &[],
            &names,
        );
        assert!(markers.is_entity());
        assert!(!markers.is_value_object());

        let markers = MarkerSet::resolve(
            "Shop.Domain.Country",
            &[],
            &["Shop.Domain.Common.DictionaryEntity".into()],
            &names,
        );
        assert!(markers.is_dictionary());
    }

    #[test]
    fn marker_matches_exact_or_dotted_suffix_only() {
        let names = MarkerNames::default();

        // "MyValueObject" must not satisfy "ValueObject".
        let markers = MarkerSet::resolve("A.B", &["A.MyValueObject".into()], &[], &names);
        assert!(markers.is_none());

        // Unqualified marker name matches outright.
        let markers = MarkerSet::resolve("ValueObject", &[], &[], &names);
        assert!(markers.is_value_object());
    }

    #[test]
    fn marker_checks_the_type_itself() {
        let names = MarkerNames::default();
        let markers = MarkerSet::resolve("Shop.Domain.Common.ValueObject", &[], &[], &names);
        assert!(markers.is_value_object());
    }

    #[test]
    fn nullable_helpers() {
        assert_eq!(strip_nullable("OrderId?"), "OrderId");
        assert_eq!(strip_nullable("OrderId"), "OrderId");
        assert!(is_nullable("int?"));
        assert!(!is_nullable("int"));
    }

    #[test]
    fn split_full_name_handles_missing_namespace() {
        assert_eq!(split_full_name("A.B.C"), ("A.B", "C"));
        assert_eq!(split_full_name("Bare"), ("", "Bare"));
    }

    #[test]
    fn symbol_display_is_full_name() {
        let s = Symbol::new("Shop.Domain", "Order");
        assert_eq!(s.to_string(), "Shop.Domain.Order");
        assert!(!s.has_declaration());
    }
}
