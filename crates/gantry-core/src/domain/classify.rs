//! Type classification: Simple, Collection, or Reference.
//!
//! Classification prefers exact semantic facts from the symbol provider and
//! only falls back to documented name heuristics when semantic resolution
//! failed. The fallback tables are deliberately explicit — they are part of
//! the engine's observable contract, not an implementation accident.

use crate::domain::symbol::{PropertyFact, TypeFacts, strip_nullable};

/// The three top-level categories a declared property type can take.
///
/// `Simple` and `Collection` are mutually exclusive: the collection check
/// only runs on types that are not simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Simple,
    Collection,
    Reference,
}

/// Built-in scalar type names, matched after stripping nullability.
const BUILTIN_SCALARS: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long", "ulong",
    "short", "ushort", "string",
];

/// Name-suffix fallback for scalar-like system types the provider may not
/// mark as built-in (identifiers, dates, durations).
const SCALAR_SUFFIXES: &[&str] = &["Guid", "DateOnly", "DateTime", "DateTimeOffset", "TimeSpan"];

/// Name-suffix fallback for collection-like types, applied to the simple
/// name with generic arguments stripped.
const COLLECTION_SUFFIXES: &[&str] = &["Collection", "List"];

/// Classify a declared property type.
pub fn classify(type_name: &str, semantic: Option<&TypeFacts>) -> TypeCategory {
    if is_simple(type_name, semantic) {
        TypeCategory::Simple
    } else if is_collection(type_name, semantic) {
        TypeCategory::Collection
    } else {
        TypeCategory::Reference
    }
}

/// Classify directly from a property fact.
pub fn classify_fact(fact: &PropertyFact) -> TypeCategory {
    classify(&fact.type_name, fact.semantic.as_ref())
}

/// Built-in scalar, nullable built-in scalar, or scalar-suffix fallback.
pub fn is_simple(type_name: &str, semantic: Option<&TypeFacts>) -> bool {
    let stripped = strip_nullable(type_name);

    if BUILTIN_SCALARS.contains(&stripped) {
        return true;
    }

    if semantic.is_some_and(|s| s.is_builtin_scalar) {
        return true;
    }

    SCALAR_SUFFIXES.iter().any(|suffix| stripped.ends_with(suffix))
}

/// Array, enumerable (by semantic fact), or collection-suffix fallback.
pub fn is_collection(type_name: &str, semantic: Option<&TypeFacts>) -> bool {
    if let Some(facts) = semantic {
        if facts.is_array || facts.implements_enumerable {
            return true;
        }
    }

    let base = generic_base_name(strip_nullable(type_name));
    COLLECTION_SUFFIXES.iter().any(|suffix| base.ends_with(suffix))
}

/// The element type of a collection/generic property: the first generic
/// argument's fully-qualified name, when the provider resolved one.
pub fn element_type_name(fact: &PropertyFact) -> Option<&str> {
    fact.semantic
        .as_ref()
        .and_then(|s| s.generic_args.first())
        .map(String::as_str)
}

/// `List<OrderLine>` → `List`; non-generic names pass through.
fn generic_base_name(type_name: &str) -> &str {
    match type_name.find('<') {
        Some(idx) => &type_name[..idx],
        None => type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbol::TypeFacts;

    #[test]
    fn builtin_scalars_are_simple() {
        for name in ["int", "string", "bool", "decimal", "int?", "string?"] {
            assert_eq!(classify(name, None), TypeCategory::Simple, "{name}");
        }
    }

    #[test]
    fn scalar_suffix_fallback() {
        for name in [
            "Guid",
            "Guid?",
            "System.DateTime",
            "DateTimeOffset?",
            "TimeSpan",
            "DateOnly?",
        ] {
            assert_eq!(classify(name, None), TypeCategory::Simple, "{name}");
        }
    }

    #[test]
    fn semantic_scalar_flag_wins_over_unknown_name() {
        let facts = TypeFacts {
            is_builtin_scalar: true,
            ..TypeFacts::reference("System.Int128")
        };
        assert_eq!(classify("Int128", Some(&facts)), TypeCategory::Simple);
    }

    #[test]
    fn enumerable_semantic_is_collection() {
        let facts = TypeFacts::enumerable_of(
            "System.Collections.Generic.List<Shop.Domain.OrderLine>",
            "Shop.Domain.OrderLine",
        );
        assert_eq!(
            classify("List<OrderLine>", Some(&facts)),
            TypeCategory::Collection
        );
    }

    #[test]
    fn array_semantic_is_collection() {
        let facts = TypeFacts {
            is_array: true,
            generic_args: vec!["Shop.Domain.Tag".into()],
            ..TypeFacts::reference("Shop.Domain.Tag[]")
        };
        assert_eq!(classify("Tag[]", Some(&facts)), TypeCategory::Collection);
    }

    #[test]
    fn collection_suffix_fallback_without_semantics() {
        assert_eq!(classify("OrderLineCollection", None), TypeCategory::Collection);
        assert_eq!(classify("List<OrderLine>", None), TypeCategory::Collection);
        assert_eq!(classify("Customer", None), TypeCategory::Reference);
    }

    #[test]
    fn simple_is_never_collection() {
        // A nullable scalar with a suspicious suffix must stay Simple — the
        // collection check only runs on non-simple types.
        assert_eq!(classify("string", None), TypeCategory::Simple);
        let fact = PropertyFact::new("Tags", "string", 1);
        assert_eq!(classify_fact(&fact), TypeCategory::Simple);
    }

    #[test]
    fn classification_is_idempotent() {
        let facts = TypeFacts::reference("Shop.Domain.Customer");
        let first = classify("Customer", Some(&facts));
        let second = classify("Customer", Some(&facts));
        assert_eq!(first, second);
        assert_eq!(first, TypeCategory::Reference);
    }

    #[test]
    fn element_type_comes_from_generic_args() {
        let fact = PropertyFact::new("Lines", "List<OrderLine>", 3).with_semantic(
            TypeFacts::enumerable_of(
                "System.Collections.Generic.List<Shop.Domain.OrderLine>",
                "Shop.Domain.OrderLine",
            ),
        );
        assert_eq!(element_type_name(&fact), Some("Shop.Domain.OrderLine"));

        let bare = PropertyFact::new("Lines", "List<OrderLine>", 3);
        assert_eq!(element_type_name(&bare), None);
    }
}
