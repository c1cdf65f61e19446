//! Integration tests for the metadata resolution pipeline: closure runs
//! over a realistic shop-domain symbol graph.

use gantry_core::application::{ClosureWalker, SymbolIndex};
use gantry_core::domain::{
    GenerationTarget, MarkerNames, PropertyFact, Symbol, TypeFacts,
};

const ENTITY: &str = "Shop.Domain.Common.EntityBase";
const VALUE_OBJECT: &str = "Shop.Domain.Common.ValueObject";
const DICTIONARY: &str = "Shop.Domain.Common.DictionaryEntity";

/// Order → {OrderId (VO), Customer (entity), Country (dictionary),
/// List<OrderLine>}; OrderLine back-references Order; Customer holds the
/// reciprocal collection.
fn shop_symbols() -> Vec<Symbol> {
    vec![
        Symbol::new("Shop.Domain.Orders", "Order")
            .with_base(ENTITY)
            .with_properties(vec![
                PropertyFact::new("Id", "OrderId", 1)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Orders.OrderId")),
                PropertyFact::new("Number", "string", 2),
                PropertyFact::new("Customer", "Customer", 3)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Customers.Customer")),
                PropertyFact::new("Country", "Country", 4)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Dictionaries.Country")),
                PropertyFact::new("Lines", "List<OrderLine>", 5).with_semantic(
                    TypeFacts::enumerable_of(
                        "System.Collections.Generic.List<Shop.Domain.Orders.OrderLine>",
                        "Shop.Domain.Orders.OrderLine",
                    ),
                ),
            ]),
        Symbol::new("Shop.Domain.Orders", "OrderId")
            .with_base(VALUE_OBJECT)
            .with_properties(vec![PropertyFact::new("Value", "int", 1)])
            .with_constructor_assigned(vec!["Value".into()]),
        Symbol::new("Shop.Domain.Orders", "OrderLine")
            .with_base(ENTITY)
            .with_properties(vec![
                PropertyFact::new("Quantity", "int", 1),
                PropertyFact::new("Order", "Order", 2)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Orders.Order")),
                PropertyFact::new("OrderId", "OrderId", 3)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Orders.OrderId")),
            ]),
        Symbol::new("Shop.Domain.Customers", "Customer")
            .with_base(ENTITY)
            .with_properties(vec![
                PropertyFact::new("Id", "CustomerId", 1)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Customers.CustomerId")),
                PropertyFact::new("Name", "string", 2),
                PropertyFact::new("Orders", "List<Order>", 3).with_semantic(
                    TypeFacts::enumerable_of(
                        "System.Collections.Generic.List<Shop.Domain.Orders.Order>",
                        "Shop.Domain.Orders.Order",
                    ),
                ),
            ]),
        Symbol::new("Shop.Domain.Customers", "CustomerId")
            .with_base(VALUE_OBJECT)
            .with_properties(vec![PropertyFact::new("Value", "int", 1)]),
        Symbol::new("Shop.Domain.Dictionaries", "Country")
            .with_base(DICTIONARY)
            .with_properties(vec![PropertyFact::new("Name", "string", 1)]),
    ]
}

fn shop_index() -> SymbolIndex {
    SymbolIndex::build(shop_symbols(), &MarkerNames::default())
}

fn run(
    index: &SymbolIndex,
    target: GenerationTarget,
    seed: &str,
) -> Vec<gantry_core::application::services::BuiltMeta> {
    let walker = ClosureWalker::new(index, target);
    let seed = index.get(seed).expect("seed fixture");
    let (built, _) = walker.run(seed).expect("closure run");
    built
}

// ── Configuration target ─────────────────────────────────────────────────

#[test]
fn configuration_meta_for_order_classifies_every_property() {
    let index = shop_index();
    let built = run(&index, GenerationTarget::Configuration, "Shop.Domain.Orders.Order");

    let order = &built[0].meta;
    assert_eq!(order.name, "Order");
    assert_eq!(order.order, 1);

    // Value-object identifier flattened to its underlying scalar.
    let id = order.properties.iter().find(|p| p.name == "Id").unwrap();
    assert_eq!(id.type_name, "int");
    assert!(id.is_value_object);
    assert!(id.is_simple);

    // Plain scalar carried as-is.
    let number = order.properties.iter().find(|p| p.name == "Number").unwrap();
    assert!(number.is_simple);
    assert!(!number.is_collection);

    // Entity reference becomes a foreign-key-bearing reference with the
    // reciprocal collection resolved on the other side.
    let customer = order.properties.iter().find(|p| p.name == "Customer").unwrap();
    assert_eq!(customer.foreign_key.as_deref(), Some("CustomerId"));
    assert_eq!(customer.paired_with_many.as_deref(), Some("Orders"));
    assert!(!customer.is_value_object);

    // Lookup reference becomes a synthesized dictionary key.
    let country = order.properties.iter().find(|p| p.name == "Country").unwrap();
    assert_eq!(country.foreign_key.as_deref(), Some("IdDictCountry"));

    // Collection resolved to its element with both reciprocal names.
    let lines = order.properties.iter().find(|p| p.name == "Lines").unwrap();
    assert!(lines.is_collection);
    assert_eq!(lines.type_name, "OrderLine");
    assert_eq!(lines.paired_with.as_deref(), Some("Order"));
    assert_eq!(lines.foreign_key.as_deref(), Some("OrderId"));

    assert!(order.namespaces.contains("Shop.Domain.Customers"));
    assert!(order.namespaces.contains("Shop.Domain.Dictionaries"));
}

#[test]
fn configuration_closure_includes_lookup_tables() {
    let index = shop_index();
    let built = run(&index, GenerationTarget::Configuration, "Shop.Domain.Orders.Order");

    let visited: Vec<&str> = built.iter().map(|b| b.full_name.as_str()).collect();
    assert_eq!(
        visited,
        vec![
            "Shop.Domain.Orders.Order",
            "Shop.Domain.Customers.Customer",
            "Shop.Domain.Dictionaries.Country",
            "Shop.Domain.Orders.OrderLine",
        ]
    );

    // Dependency ranks follow visit order.
    for (i, item) in built.iter().enumerate() {
        assert_eq!(item.meta.order, i as u32 + 1);
    }
}

// ── Determinism and visit guarantees ─────────────────────────────────────

#[test]
fn closure_runs_are_deterministic() {
    let index = shop_index();
    for target in GenerationTarget::ALL {
        let first = run(&index, target, "Shop.Domain.Orders.Order");
        let second = run(&index, target, "Shop.Domain.Orders.Order");
        assert_eq!(first, second, "{target} produced differing graphs");
    }
}

#[test]
fn type_reachable_twice_is_processed_once() {
    let symbols = vec![
        Symbol::new("Shop.Domain", "Pair")
            .with_base(ENTITY)
            .with_properties(vec![
                PropertyFact::new("First", "Node", 1)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Node")),
                PropertyFact::new("Second", "Node", 2)
                    .with_semantic(TypeFacts::reference("Shop.Domain.Node")),
            ]),
        Symbol::new("Shop.Domain", "Node")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Label", "string", 1)]),
    ];
    let index = SymbolIndex::build(symbols, &MarkerNames::default());

    let built = run(&index, GenerationTarget::Configuration, "Shop.Domain.Pair");
    let node_count = built
        .iter()
        .filter(|b| b.full_name == "Shop.Domain.Node")
        .count();
    assert_eq!(node_count, 1);
    assert_eq!(built.len(), 2);
}

#[test]
fn reference_cycles_terminate_with_each_type_once() {
    let symbols = vec![
        Symbol::new("Shop.Domain", "Alpha")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Beta", "Beta", 1)
                .with_semantic(TypeFacts::reference("Shop.Domain.Beta"))]),
        Symbol::new("Shop.Domain", "Beta")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Alpha", "Alpha", 1)
                .with_semantic(TypeFacts::reference("Shop.Domain.Alpha"))]),
    ];
    let index = SymbolIndex::build(symbols, &MarkerNames::default());

    for target in GenerationTarget::ALL {
        let walker = ClosureWalker::new(&index, target);
        let seed = index.get("Shop.Domain.Alpha").unwrap();
        let (built, visited) = walker.run(seed).expect("cycle must terminate");

        let names: Vec<&str> = built.iter().map(|b| b.full_name.as_str()).collect();
        assert_eq!(names, vec!["Shop.Domain.Alpha", "Shop.Domain.Beta"], "{target}");
        assert_eq!(visited.len(), 2);
    }
}

#[test]
fn each_target_runs_an_independent_closure() {
    let index = shop_index();

    // A configuration run must not poison a later get run: both start
    // from empty visited sets and build their own metadata.
    let config = run(&index, GenerationTarget::Configuration, "Shop.Domain.Orders.Order");
    let get = run(&index, GenerationTarget::GetQuery, "Shop.Domain.Orders.Order");

    assert_eq!(config.len(), 4); // includes the Country lookup table
    assert_eq!(get.len(), 3); // entities only
    assert_ne!(config[0].meta, get[0].meta);
}

// ── Get target ───────────────────────────────────────────────────────────

#[test]
fn get_meta_synthesizes_identifier_and_drops_dictionary_references() {
    let index = shop_index();
    let built = run(&index, GenerationTarget::GetQuery, "Shop.Domain.Orders.Order");

    let order = &built[0].meta;
    assert_eq!(order.properties[0].name, "Id");
    assert_eq!(order.properties[0].type_name, "int");
    assert!(order.properties.iter().all(|p| p.name != "Country"));

    // Scalars ride on the base command; nested references are kept.
    assert!(order.properties.iter().all(|p| p.name != "Number"));
    assert!(order.properties.iter().any(|p| p.name == "Customer"));
    let lines = order.properties.iter().find(|p| p.name == "Lines").unwrap();
    assert_eq!(lines.type_name, "OrderLine");
}

#[test]
fn get_meta_for_dictionary_element_collection_is_identifier_only() {
    let mut symbols = shop_symbols();
    symbols.push(
        Symbol::new("Shop.Domain.Shipping", "Shipment")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Regions", "List<Country>", 1)
                .with_semantic(TypeFacts::enumerable_of(
                    "System.Collections.Generic.List<Shop.Domain.Dictionaries.Country>",
                    "Shop.Domain.Dictionaries.Country",
                ))]),
    );
    let index = SymbolIndex::build(symbols, &MarkerNames::default());

    let built = run(&index, GenerationTarget::GetQuery, "Shop.Domain.Shipping.Shipment");
    let shipment = &built[0].meta;

    let names: Vec<&str> = shipment.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Id"]);
    // The lookup table is not recursed into either.
    assert_eq!(built.len(), 1);
}

#[test]
fn nested_get_metas_skip_types_already_emitted() {
    let index = shop_index();
    let built = run(&index, GenerationTarget::GetQuery, "Shop.Domain.Orders.Order");

    // OrderLine back-references Order, which was already emitted as the
    // top-level artifact — the nested meta must not re-describe it.
    let line = built
        .iter()
        .find(|b| b.full_name == "Shop.Domain.Orders.OrderLine")
        .expect("order line visited");
    assert!(line.meta.properties.iter().all(|p| p.name != "Order"));
}

// ── Unresolved references (recoverable) ──────────────────────────────────

#[test]
fn unresolvable_property_type_is_omitted_and_run_continues() {
    let symbols = vec![
        Symbol::new("Shop.Domain", "Widget")
            .with_base(ENTITY)
            .with_properties(vec![
                PropertyFact::new("Name", "string", 1),
                PropertyFact::new("Gadget", "Gadget", 2),
            ]),
    ];
    let index = SymbolIndex::build(symbols, &MarkerNames::default());

    for target in [GenerationTarget::Configuration, GenerationTarget::GetQuery] {
        let built = run(&index, target, "Shop.Domain.Widget");
        assert_eq!(built.len(), 1, "{target}");
        assert!(built[0].meta.properties.iter().all(|p| p.name != "Gadget"));
    }
}

// ── Invalid symbols (fatal) ──────────────────────────────────────────────

#[test]
fn declarationless_symbol_aborts_the_branch() {
    let symbols = vec![
        Symbol::new("Shop.Domain", "Order")
            .with_base(ENTITY)
            .with_properties(vec![PropertyFact::new("Ghost", "Ghost", 1)
                .with_semantic(TypeFacts::reference("Shop.Domain.Ghost"))]),
        // Entity without a retrievable declaration.
        Symbol::new("Shop.Domain", "Ghost").with_base(ENTITY),
    ];
    let index = SymbolIndex::build(symbols, &MarkerNames::default());

    let walker = ClosureWalker::new(&index, GenerationTarget::GetQuery);
    let seed = index.get("Shop.Domain.Order").unwrap();
    let err = walker.run(seed).unwrap_err();
    assert!(matches!(
        err,
        gantry_core::domain::DomainError::InvalidSymbol { .. }
    ));
}
