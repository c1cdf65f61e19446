//! Symbol index: fully-qualified-name lookup table with a by-simple-name
//! secondary index.
//!
//! Built once per analysis run from the provider's raw symbol list. Marker
//! identities are resolved here, exactly once per symbol — downstream code
//! reads `symbol.markers` and never re-walks ancestor chains.
//!
//! Both maps are `BTreeMap`s: enumeration order is part of the engine's
//! determinism contract, and ambiguity diagnostics must list candidates in
//! a stable order.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{MarkerNames, MarkerSet, Symbol, strip_nullable};

/// A lookup that did not produce a unique symbol.
///
/// `NotFound` is not an error condition for property lookups — callers
/// treat it as "skip this property". `Ambiguous` replaces the historical
/// "first enumerated wins" behavior with an explicit signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound,
    Ambiguous { candidates: Vec<String> },
}

/// Lookup table from fully-qualified name to symbol.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    by_full_name: BTreeMap<String, Arc<Symbol>>,
    by_simple_name: BTreeMap<String, Vec<String>>,
}

impl SymbolIndex {
    /// Build the index, resolving marker identities for every symbol.
    ///
    /// Duplicate fully-qualified names keep the first occurrence; the
    /// duplicate is logged and dropped.
    pub fn build(symbols: Vec<Symbol>, markers: &MarkerNames) -> Self {
        let mut index = Self::default();

        for mut symbol in symbols {
            if index.by_full_name.contains_key(&symbol.full_name) {
                warn!(symbol = %symbol.full_name, "duplicate symbol, keeping first");
                continue;
            }

            symbol.markers = MarkerSet::resolve(
                &symbol.full_name,
                &symbol.base_types,
                &symbol.interfaces,
                markers,
            );

            index
                .by_simple_name
                .entry(symbol.name.clone())
                .or_default()
                .push(symbol.full_name.clone());
            index
                .by_full_name
                .insert(symbol.full_name.clone(), Arc::new(symbol));
        }

        debug!(symbols = index.len(), "symbol index built");
        index
    }

    pub fn len(&self) -> usize {
        self.by_full_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_full_name.is_empty()
    }

    /// Exact fully-qualified lookup.
    pub fn get(&self, full_name: &str) -> Option<&Arc<Symbol>> {
        self.by_full_name.get(full_name)
    }

    /// All symbols, in fully-qualified-name order.
    pub fn symbols(&self) -> impl Iterator<Item = &Arc<Symbol>> {
        self.by_full_name.values()
    }

    /// Find a symbol by name, optionally constrained to a namespace
    /// prefix.
    ///
    /// A trailing nullability marker on `name` is stripped before lookup.
    /// With a prefix, an exact `prefix.name` match wins before the
    /// constrained simple-name scan; without one, an exact full-name match
    /// wins before the unconstrained scan. A scan matching more than one
    /// symbol yields [`LookupError::Ambiguous`] — never an arbitrary pick.
    pub fn find_by_name(
        &self,
        name: &str,
        namespace_prefix: Option<&str>,
    ) -> Result<&Arc<Symbol>, LookupError> {
        let name = strip_nullable(name);

        match namespace_prefix {
            Some(prefix) if !prefix.is_empty() => {
                if let Some(symbol) = self.by_full_name.get(&format!("{prefix}.{name}")) {
                    return Ok(symbol);
                }
                self.unique_candidate(name, |symbol| symbol.namespace.starts_with(prefix))
            }
            _ => {
                if let Some(symbol) = self.by_full_name.get(name) {
                    return Ok(symbol);
                }
                self.unique_candidate(name, |_| true)
            }
        }
    }

    fn unique_candidate(
        &self,
        simple_name: &str,
        accept: impl Fn(&Symbol) -> bool,
    ) -> Result<&Arc<Symbol>, LookupError> {
        let candidates: Vec<&Arc<Symbol>> = self
            .by_simple_name
            .get(simple_name)
            .into_iter()
            .flatten()
            .filter_map(|full| self.by_full_name.get(full))
            .filter(|symbol| accept(symbol))
            .collect();

        match candidates.as_slice() {
            [] => Err(LookupError::NotFound),
            [unique] => Ok(*unique),
            many => Err(LookupError::Ambiguous {
                candidates: many.iter().map(|s| s.full_name.clone()).collect(),
            }),
        }
    }
}
