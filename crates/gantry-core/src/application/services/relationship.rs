//! Relationship inference between paired types.
//!
//! Given a "one" side and a candidate "many" side, finds which property on
//! the many side scalar-references the one side and which identifier
//! property represents the foreign key. Pure scans over property facts —
//! nothing here requires the related type to have been processed first.

use crate::domain::{Symbol, classify, element_type_name, strip_nullable};

/// The reciprocal property names found on the "many" side of a
/// relationship. Absent properties stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipLinks {
    /// Scalar property whose type is the "one" side's type.
    pub paired_with: Option<String>,
    /// Scalar property whose type is the identifier type.
    pub foreign_key: Option<String>,
}

/// Conventional identifier type name for an entity: `Order` → `OrderId`.
pub fn identifier_type_for(one: &Symbol) -> String {
    format!("{}Id", one.name)
}

/// Scan `many` for the back-reference and foreign-key properties pointing
/// at `one`. Type-name comparison strips nullability and ignores case.
pub fn resolve_links(one: &Symbol, many: &Symbol, identifier_type: &str) -> RelationshipLinks {
    let Some(facts) = &many.properties else {
        return RelationshipLinks::default();
    };

    let mut links = RelationshipLinks::default();
    for fact in facts {
        let type_name = strip_nullable(&fact.type_name);
        if links.paired_with.is_none() && type_name.eq_ignore_ascii_case(&one.name) {
            links.paired_with = Some(fact.name.clone());
        }
        if links.foreign_key.is_none() && type_name.eq_ignore_ascii_case(identifier_type) {
            links.foreign_key = Some(fact.name.clone());
        }
    }

    links
}

/// Name of the first collection property on `symbol` whose element type is
/// `element_full_name`, if any. Used to pair an entity reference with the
/// reciprocal collection on the "one" side.
pub fn find_collection_of(symbol: &Symbol, element_full_name: &str) -> Option<String> {
    let facts = symbol.properties.as_deref()?;

    facts
        .iter()
        .filter(|fact| {
            classify(&fact.type_name, fact.semantic.as_ref()) == crate::domain::TypeCategory::Collection
        })
        .find(|fact| element_type_name(fact) == Some(element_full_name))
        .map(|fact| fact.name.clone())
}
