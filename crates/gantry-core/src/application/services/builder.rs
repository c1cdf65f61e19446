//! Policy-driven ClassMeta construction.
//!
//! One [`MetaBuilder`] serves every generation target. What varies per
//! target is a small [`TargetPolicy`] record — which property categories
//! are kept, how value objects and lookup references are represented, and
//! whether recursion may follow a child type. The policy records replace a
//! family of near-identical builder implementations that differed only in
//! these switches.

use tracing::{debug, warn};

use crate::application::services::closure::VisitedSet;
use crate::application::services::relationship::{
    find_collection_of, identifier_type_for, resolve_links,
};
use crate::application::services::symbol_index::{LookupError, SymbolIndex};
use crate::domain::{
    ClassMeta, DomainError, GenerationTarget, PropertyDescriptor, PropertyFact, Symbol,
    TypeCategory, classify, classify_fact, element_type_name, is_nullable, split_full_name,
    strip_nullable,
};

/// How value-object references are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueObjectPolicy {
    /// Replace the reference with its underlying scalar (or `<Type>Dto`
    /// when no single underlying property can be determined), marked
    /// `is_value_object`.
    Flatten,
    /// Omit the property.
    Exclude,
}

/// How lookup-table (dictionary) references are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryPolicy {
    /// Emit a foreign-key style descriptor with a synthesized `IdDict`
    /// key name.
    SynthesizeForeignKey,
    /// Omit the property; the read side carries a synthesized identifier
    /// instead.
    Drop,
}

/// How entity references are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityPolicy {
    /// Foreign-key-bearing reference with reciprocal navigation metadata.
    ForeignKey,
    /// Kept as a nested reference (recursed into separately).
    Nested,
    /// Omit the property.
    Exclude,
}

/// Which referenced types the closure walker may recurse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursePredicate {
    OnlyEntities,
    EntitiesAndLookupTables,
}

impl RecursePredicate {
    pub fn includes(&self, markers: crate::domain::MarkerSet) -> bool {
        match self {
            Self::OnlyEntities => markers.is_entity(),
            Self::EntitiesAndLookupTables => markers.is_entity() || markers.is_dictionary(),
        }
    }
}

/// Per-target filtering and enrichment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPolicy {
    pub target: GenerationTarget,
    /// Keep scalar properties. Targets that inherit scalars from the base
    /// command describe structure only and skip them.
    pub include_simple: bool,
    /// Synthesize an `Id: int` descriptor ahead of all source properties.
    pub emits_identifier_first: bool,
    pub value_objects: ValueObjectPolicy,
    pub dictionaries: DictionaryPolicy,
    pub entities: EntityPolicy,
    pub keep_collections: bool,
    /// Populate reciprocal navigation fields on collection descriptors.
    pub collection_relationships: bool,
    pub recurse: RecursePredicate,
    /// Skip properties whose referenced type is already in the run's
    /// visited set (it is, or will be, emitted as its own artifact).
    pub skip_emitted: bool,
    /// Skip properties declared navigation-only by the companion
    /// configuration type.
    pub exclude_navigations: bool,
    /// A symbol that is itself a lookup table yields a bare ClassMeta
    /// (name and namespace only).
    pub bare_meta_for_lookups: bool,
}

impl TargetPolicy {
    pub fn for_target(target: GenerationTarget) -> Self {
        match target {
            GenerationTarget::Configuration => Self {
                target,
                include_simple: true,
                emits_identifier_first: false,
                value_objects: ValueObjectPolicy::Flatten,
                dictionaries: DictionaryPolicy::SynthesizeForeignKey,
                entities: EntityPolicy::ForeignKey,
                keep_collections: true,
                collection_relationships: true,
                recurse: RecursePredicate::EntitiesAndLookupTables,
                skip_emitted: false,
                exclude_navigations: false,
                bare_meta_for_lookups: false,
            },
            GenerationTarget::BaseCommand => Self {
                target,
                include_simple: true,
                emits_identifier_first: false,
                value_objects: ValueObjectPolicy::Flatten,
                dictionaries: DictionaryPolicy::Drop,
                entities: EntityPolicy::Exclude,
                keep_collections: false,
                collection_relationships: false,
                recurse: RecursePredicate::OnlyEntities,
                skip_emitted: false,
                exclude_navigations: true,
                bare_meta_for_lookups: false,
            },
            GenerationTarget::CreateCommand => Self {
                target,
                include_simple: false,
                emits_identifier_first: false,
                value_objects: ValueObjectPolicy::Exclude,
                dictionaries: DictionaryPolicy::Drop,
                entities: EntityPolicy::Nested,
                keep_collections: true,
                collection_relationships: false,
                recurse: RecursePredicate::OnlyEntities,
                skip_emitted: true,
                exclude_navigations: true,
                bare_meta_for_lookups: false,
            },
            GenerationTarget::UpdateCommand => Self {
                // An update payload addresses an existing aggregate, so it
                // carries the synthesized identifier; create does not.
                emits_identifier_first: true,
                ..Self::for_target(GenerationTarget::CreateCommand).retarget(target)
            },
            GenerationTarget::GetQuery => Self {
                target,
                include_simple: false,
                emits_identifier_first: true,
                value_objects: ValueObjectPolicy::Exclude,
                dictionaries: DictionaryPolicy::Drop,
                entities: EntityPolicy::Nested,
                keep_collections: true,
                collection_relationships: false,
                recurse: RecursePredicate::OnlyEntities,
                skip_emitted: true,
                exclude_navigations: false,
                bare_meta_for_lookups: true,
            },
        }
    }

    fn retarget(mut self, target: GenerationTarget) -> Self {
        self.target = target;
        self
    }
}

/// Converts a symbol's public properties into a [`ClassMeta`] under one
/// target policy.
pub struct MetaBuilder<'a> {
    index: &'a SymbolIndex,
    policy: TargetPolicy,
}

impl<'a> MetaBuilder<'a> {
    pub fn new(index: &'a SymbolIndex, policy: TargetPolicy) -> Self {
        Self { index, policy }
    }

    pub fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    /// Build the metadata for one symbol.
    ///
    /// Fails with `InvalidSymbol` when the provider supplied no
    /// declaration — the only fatal condition here. Unresolvable property
    /// references are omitted and logged.
    pub fn build(&self, symbol: &Symbol, emitted: &VisitedSet) -> Result<ClassMeta, DomainError> {
        let facts = symbol
            .properties
            .as_deref()
            .ok_or_else(|| DomainError::invalid_symbol(&symbol.full_name))?;

        let mut meta = ClassMeta::new(&symbol.name, &symbol.namespace);

        if self.policy.bare_meta_for_lookups && symbol.markers.is_dictionary() {
            return Ok(meta);
        }

        let navigations = if self.policy.exclude_navigations {
            self.navigation_exclusions(symbol)
        } else {
            Vec::new()
        };

        if self.policy.emits_identifier_first && !facts.is_empty() {
            // Order 0 sorts the synthesized identifier ahead of every
            // source property without colliding with declaration orders.
            meta.push(PropertyDescriptor::simple("Id", "int", 0));
        }

        for fact in facts {
            if navigations.iter().any(|n| n == &fact.name) {
                debug!(
                    symbol = %symbol.full_name,
                    property = %fact.name,
                    "navigation-only property excluded"
                );
                continue;
            }

            match classify_fact(fact) {
                TypeCategory::Simple => {
                    if self.policy.include_simple {
                        let mut descriptor =
                            PropertyDescriptor::simple(&fact.name, &fact.type_name, fact.order);
                        descriptor.is_setter_public = fact.is_setter_public;
                        meta.push(descriptor);
                    }
                }
                TypeCategory::Reference => self.append_reference(&mut meta, symbol, fact, emitted),
                TypeCategory::Collection => self.append_collection(&mut meta, symbol, fact, emitted),
            }
        }

        meta.validate().map_err(|reason| DomainError::InvalidMeta {
            type_name: symbol.full_name.clone(),
            reason,
        })?;

        Ok(meta)
    }

    fn append_reference(
        &self,
        meta: &mut ClassMeta,
        declaring: &Symbol,
        fact: &PropertyFact,
        emitted: &VisitedSet,
    ) {
        let referenced = match self.index.find_by_name(&fact.type_name, None) {
            Ok(symbol) => symbol,
            Err(LookupError::NotFound) => {
                debug!(
                    symbol = %declaring.full_name,
                    property = %fact.name,
                    type_name = %fact.type_name,
                    "unresolved reference, property omitted"
                );
                return;
            }
            Err(LookupError::Ambiguous { candidates }) => {
                warn!(
                    symbol = %declaring.full_name,
                    property = %fact.name,
                    ?candidates,
                    "ambiguous reference, property omitted"
                );
                return;
            }
        };

        if self.policy.skip_emitted && emitted.contains(&referenced.full_name) {
            debug!(
                symbol = %declaring.full_name,
                property = %fact.name,
                "referenced type already emitted, property skipped"
            );
            return;
        }

        if referenced.markers.is_value_object() {
            if self.policy.value_objects == ValueObjectPolicy::Flatten {
                meta.push(self.flatten_value_object(referenced, fact));
                meta.add_namespace(&referenced.namespace);
            }
        } else if referenced.markers.is_dictionary() {
            if self.policy.dictionaries == DictionaryPolicy::SynthesizeForeignKey {
                let mut descriptor =
                    PropertyDescriptor::new(&fact.name, &fact.type_name, fact.order);
                descriptor.is_setter_public = fact.is_setter_public;
                descriptor.foreign_key =
                    Some(format!("IdDict{}", strip_nullable(&fact.type_name)));
                meta.push(descriptor);
                meta.add_namespace(&referenced.namespace);
            }
        } else if referenced.markers.is_entity() {
            match self.policy.entities {
                EntityPolicy::ForeignKey => {
                    let identifier = identifier_type_for(referenced);
                    let links = resolve_links(referenced, declaring, &identifier);

                    let mut descriptor =
                        PropertyDescriptor::new(&fact.name, &fact.type_name, fact.order);
                    descriptor.is_setter_public = fact.is_setter_public;
                    descriptor.foreign_key = Some(
                        links
                            .foreign_key
                            .unwrap_or_else(|| format!("{}Id", fact.name)),
                    );
                    descriptor.paired_with_many =
                        find_collection_of(referenced, &declaring.full_name);
                    meta.push(descriptor);
                    meta.add_namespace(&referenced.namespace);
                }
                EntityPolicy::Nested => {
                    let mut descriptor =
                        PropertyDescriptor::new(&fact.name, &fact.type_name, fact.order);
                    descriptor.is_setter_public = fact.is_setter_public;
                    meta.push(descriptor);
                    meta.add_namespace(&referenced.namespace);
                }
                EntityPolicy::Exclude => {}
            }
        } else {
            // Unmarked references are structural noise for configuration
            // and base commands; nested targets keep them as-is.
            if self.policy.entities == EntityPolicy::Nested {
                let mut descriptor =
                    PropertyDescriptor::new(&fact.name, &fact.type_name, fact.order);
                descriptor.is_setter_public = fact.is_setter_public;
                meta.push(descriptor);
                meta.add_namespace(&referenced.namespace);
            } else {
                debug!(
                    symbol = %declaring.full_name,
                    property = %fact.name,
                    "reference satisfies no marker, property skipped"
                );
            }
        }
    }

    fn append_collection(
        &self,
        meta: &mut ClassMeta,
        declaring: &Symbol,
        fact: &PropertyFact,
        emitted: &VisitedSet,
    ) {
        if !self.policy.keep_collections {
            return;
        }

        let Some(element_full) = element_type_name(fact) else {
            debug!(
                symbol = %declaring.full_name,
                property = %fact.name,
                "collection element type unresolved, property omitted"
            );
            return;
        };

        if self.policy.skip_emitted && emitted.contains(element_full) {
            return;
        }

        let (element_ns, element_name) = split_full_name(element_full);
        let element = match self
            .index
            .get(element_full)
            .ok_or(LookupError::NotFound)
            .or_else(|_| self.index.find_by_name(element_name, None))
        {
            Ok(symbol) => symbol,
            Err(_) => {
                debug!(
                    symbol = %declaring.full_name,
                    property = %fact.name,
                    element = %element_full,
                    "collection element not in index, property omitted"
                );
                return;
            }
        };

        // Dictionary and unmarked elements follow the same fate as their
        // scalar-reference counterparts under this target.
        let keep = if element.markers.is_dictionary() {
            self.policy.dictionaries == DictionaryPolicy::SynthesizeForeignKey
        } else if element.markers.is_entity() || element.markers.is_value_object() {
            true
        } else {
            self.policy.entities == EntityPolicy::Nested
        };
        if !keep {
            return;
        }

        let mut descriptor = PropertyDescriptor::new(&fact.name, element_name, fact.order);
        descriptor.is_collection = true;
        descriptor.is_setter_public = fact.is_setter_public;

        if self.policy.collection_relationships && element.markers.is_entity() {
            let identifier = identifier_type_for(declaring);
            let links = resolve_links(declaring, element, &identifier);
            descriptor.paired_with = links.paired_with;
            descriptor.foreign_key = links.foreign_key;
        }

        meta.push(descriptor);
        meta.add_namespace(element_ns);
    }

    /// Resolve a value object down to its single underlying scalar.
    ///
    /// Resolution order: exactly one public property → its type; else
    /// exactly one constructor-assigned property → its type; else the
    /// `<Type>Dto` fallback. Nullability of the *referencing* property is
    /// preserved on the single-property path.
    fn flatten_value_object(&self, value_object: &Symbol, fact: &PropertyFact) -> PropertyDescriptor {
        let nullable = if is_nullable(&fact.type_name) { "?" } else { "" };

        let flattened = value_object.properties.as_deref().and_then(|props| {
            if props.len() == 1 {
                let inner = &props[0];
                return Some((
                    format!("{}{nullable}", inner.type_name),
                    classify(&inner.type_name, inner.semantic.as_ref()) == TypeCategory::Simple,
                ));
            }

            if let [assigned] = value_object.constructor_assigned.as_slice() {
                let inner = props.iter().find(|p| &p.name == assigned)?;
                return Some((
                    inner.type_name.clone(),
                    classify(&inner.type_name, inner.semantic.as_ref()) == TypeCategory::Simple,
                ));
            }

            None
        });

        let (type_name, is_simple) = flattened.unwrap_or_else(|| {
            (
                format!("{}Dto{nullable}", strip_nullable(&fact.type_name)),
                false,
            )
        });

        let mut descriptor = PropertyDescriptor::new(&fact.name, type_name, fact.order);
        descriptor.is_simple = is_simple;
        descriptor.is_value_object = true;
        descriptor.is_setter_public = fact.is_setter_public;
        descriptor
    }

    /// Property names declared navigation-only by the companion
    /// `<Name>Configuration` symbol, when one exists.
    fn navigation_exclusions(&self, symbol: &Symbol) -> Vec<String> {
        match self
            .index
            .find_by_name(&format!("{}Configuration", symbol.name), None)
        {
            Ok(companion) => companion.declared_navigations.clone(),
            Err(LookupError::NotFound) => Vec::new(),
            Err(LookupError::Ambiguous { candidates }) => {
                warn!(
                    symbol = %symbol.full_name,
                    ?candidates,
                    "ambiguous companion configuration, navigation exclusions skipped"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarkerNames, TypeFacts};

    const ENTITY: &str = "Shop.Domain.Common.EntityBase";
    const VALUE_OBJECT: &str = "Shop.Domain.Common.ValueObject";
    const DICTIONARY: &str = "Shop.Domain.Common.DictionaryEntity";

    fn index_of(symbols: Vec<Symbol>) -> SymbolIndex {
        SymbolIndex::build(symbols, &MarkerNames::default())
    }

    fn build(
        index: &SymbolIndex,
        target: GenerationTarget,
        symbol_name: &str,
    ) -> Result<ClassMeta, DomainError> {
        let builder = MetaBuilder::new(index, TargetPolicy::for_target(target));
        let symbol = index.get(symbol_name).expect("fixture symbol");
        builder.build(symbol, &VisitedSet::new())
    }

    fn money_value_object(properties: Vec<PropertyFact>, assigned: Vec<String>) -> Symbol {
        Symbol::new("Shop.Domain.Shared", "Money")
            .with_base(VALUE_OBJECT)
            .with_properties(properties)
            .with_constructor_assigned(assigned)
    }

    fn holder_of(type_name: &str) -> Symbol {
        Symbol::new("Shop.Domain.Orders", "Invoice")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Total", type_name, 1)
                .with_semantic(TypeFacts::reference("Shop.Domain.Shared.Money"))])
    }

    #[test]
    fn missing_declaration_is_invalid_symbol() {
        let index = index_of(vec![Symbol::new("Shop.Domain", "Ghost").with_base(ENTITY)]);
        let err = build(&index, GenerationTarget::Configuration, "Shop.Domain.Ghost").unwrap_err();
        assert!(matches!(err, DomainError::InvalidSymbol { .. }));
    }

    #[test]
    fn flatten_uses_single_public_property() {
        let vo = money_value_object(vec![PropertyFact::new("Amount", "decimal", 1)], vec![]);
        let index = index_of(vec![vo, holder_of("Money")]);

        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Orders.Invoice")
            .unwrap();
        let prop = &meta.properties[0];
        assert_eq!(prop.type_name, "decimal");
        assert!(prop.is_simple);
        assert!(prop.is_value_object);
    }

    #[test]
    fn flatten_preserves_nullability_of_referencing_property() {
        let vo = money_value_object(vec![PropertyFact::new("Amount", "decimal", 1)], vec![]);
        let index = index_of(vec![vo, holder_of("Money?")]);

        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Orders.Invoice")
            .unwrap();
        assert_eq!(meta.properties[0].type_name, "decimal?");
    }

    #[test]
    fn flatten_falls_back_to_constructor_assigned_property() {
        let vo = money_value_object(
            vec![
                PropertyFact::new("Amount", "decimal", 1),
                PropertyFact::new("Currency", "string", 2),
            ],
            vec!["Amount".into()],
        );
        let index = index_of(vec![vo, holder_of("Money")]);

        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Orders.Invoice")
            .unwrap();
        assert_eq!(meta.properties[0].type_name, "decimal");
        assert!(meta.properties[0].is_value_object);
    }

    #[test]
    fn flatten_falls_back_to_dto_name() {
        let vo = money_value_object(
            vec![
                PropertyFact::new("Amount", "decimal", 1),
                PropertyFact::new("Currency", "string", 2),
            ],
            vec![],
        );
        let index = index_of(vec![vo.clone(), holder_of("Money")]);
        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Orders.Invoice")
            .unwrap();
        assert_eq!(meta.properties[0].type_name, "MoneyDto");
        assert!(!meta.properties[0].is_simple);

        // Nullable reference keeps the marker after the Dto suffix.
        let index = index_of(vec![vo, holder_of("Money?")]);
        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Orders.Invoice")
            .unwrap();
        assert_eq!(meta.properties[0].type_name, "MoneyDto?");
    }

    #[test]
    fn base_command_drops_entities_dictionaries_and_collections() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "Country").with_base(DICTIONARY).with_properties(vec![]),
            Symbol::new("Shop.Domain", "Customer").with_base(ENTITY).with_properties(vec![]),
            Symbol::new("Shop.Domain", "Order")
                .with_base(ENTITY)
                .with_properties(vec![
                    PropertyFact::new("Number", "string", 1),
                    PropertyFact::new("Customer", "Customer", 2)
                        .with_semantic(TypeFacts::reference("Shop.Domain.Customer")),
                    PropertyFact::new("Country", "Country", 3)
                        .with_semantic(TypeFacts::reference("Shop.Domain.Country")),
                    PropertyFact::new("Tags", "List<Customer>", 4).with_semantic(
                        TypeFacts::enumerable_of("List<Shop.Domain.Customer>", "Shop.Domain.Customer"),
                    ),
                ]),
        ]);

        let meta = build(&index, GenerationTarget::BaseCommand, "Shop.Domain.Order").unwrap();
        let names: Vec<&str> = meta.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Number"]);
    }

    #[test]
    fn navigation_properties_are_excluded_from_commands() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "OrderLine").with_base(ENTITY).with_properties(vec![]),
            Symbol::new("Shop.Domain", "Order")
                .with_base(ENTITY)
                .with_properties(vec![
                    PropertyFact::new("Number", "string", 1),
                    PropertyFact::new("Lines", "List<OrderLine>", 2).with_semantic(
                        TypeFacts::enumerable_of(
                            "List<Shop.Domain.OrderLine>",
                            "Shop.Domain.OrderLine",
                        ),
                    ),
                ]),
            Symbol::new("Shop.Infrastructure.Configurations", "OrderConfiguration")
                .with_navigations(vec!["Lines".into()]),
        ]);

        let meta = build(&index, GenerationTarget::CreateCommand, "Shop.Domain.Order").unwrap();
        assert!(meta.properties.iter().all(|p| p.name != "Lines"));

        // The read side keeps navigations: exclusion applies to commands.
        let meta = build(&index, GenerationTarget::GetQuery, "Shop.Domain.Order").unwrap();
        assert!(meta.properties.iter().any(|p| p.name == "Lines"));
    }

    #[test]
    fn emitted_types_are_skipped_where_the_target_requires() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "Customer").with_base(ENTITY).with_properties(vec![]),
            Symbol::new("Shop.Domain", "Order")
                .with_base(ENTITY)
                .with_properties(vec![PropertyFact::new("Customer", "Customer", 1)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Customer"))]),
        ]);

        let mut emitted = VisitedSet::new();
        emitted.insert("Shop.Domain.Customer");

        let builder = MetaBuilder::new(
            &index,
            TargetPolicy::for_target(GenerationTarget::UpdateCommand),
        );
        let symbol = index.get("Shop.Domain.Order").unwrap();
        let meta = builder.build(symbol, &emitted).unwrap();
        assert!(meta.properties.iter().all(|p| p.name != "Customer"));

        // Configuration ignores the emitted set.
        let builder = MetaBuilder::new(
            &index,
            TargetPolicy::for_target(GenerationTarget::Configuration),
        );
        let meta = builder.build(symbol, &emitted).unwrap();
        assert!(meta.properties.iter().any(|p| p.name == "Customer"));
    }

    #[test]
    fn get_query_yields_bare_meta_for_lookup_symbols() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "Country")
                .with_base(DICTIONARY)
                .with_properties(vec![PropertyFact::new("Name", "string", 1)]),
        ]);

        let meta = build(&index, GenerationTarget::GetQuery, "Shop.Domain.Country").unwrap();
        assert!(meta.is_empty());
        assert_eq!(meta.name, "Country");
    }

    #[test]
    fn configuration_synthesizes_dictionary_foreign_key() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain.Dictionaries", "Country")
                .with_base(DICTIONARY)
                .with_properties(vec![]),
            Symbol::new("Shop.Domain", "Order")
                .with_base(ENTITY)
                .with_properties(vec![PropertyFact::new("Country", "Country?", 1)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Dictionaries.Country"))]),
        ]);

        let meta = build(&index, GenerationTarget::Configuration, "Shop.Domain.Order").unwrap();
        let prop = &meta.properties[0];
        assert_eq!(prop.foreign_key.as_deref(), Some("IdDictCountry"));
        assert!(!prop.is_value_object);
        assert!(meta.namespaces.contains("Shop.Domain.Dictionaries"));
    }

    #[test]
    fn unresolved_reference_is_omitted_not_fatal() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "Widget")
                .with_base(ENTITY)
                .with_properties(vec![
                    PropertyFact::new("Name", "string", 1),
                    PropertyFact::new("Gadget", "Gadget", 2),
                ]),
        ]);

        let meta = build(&index, GenerationTarget::Configuration, "Shop.Domain.Widget").unwrap();
        let names: Vec<&str> = meta.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Name"]);
    }

    #[test]
    fn update_synthesizes_identifier_create_does_not() {
        let index = index_of(vec![
            Symbol::new("Shop.Domain", "Order")
                .with_base(ENTITY)
                .with_properties(vec![PropertyFact::new("Number", "string", 1)]),
        ]);

        let update = build(&index, GenerationTarget::UpdateCommand, "Shop.Domain.Order").unwrap();
        assert_eq!(update.properties.first().map(|p| p.name.as_str()), Some("Id"));
        assert_eq!(update.properties[0].order, 0);

        let create = build(&index, GenerationTarget::CreateCommand, "Shop.Domain.Order").unwrap();
        assert!(create.properties.iter().all(|p| p.name != "Id"));
    }
}
