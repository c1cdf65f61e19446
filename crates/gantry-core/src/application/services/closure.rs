//! Cycle-safe recursive closure over the reference graph.
//!
//! One [`ClosureWalker`] run covers one (seed symbol, generation target)
//! pair. The visited set is an explicit value owned by the run — it is
//! created empty at the top, threaded through the recursion as a plain
//! `&mut` parameter, and returned with the result. Independent runs
//! (other targets, other seeds) never share one.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::services::builder::{MetaBuilder, TargetPolicy};
use crate::application::services::symbol_index::SymbolIndex;
use crate::domain::{
    ClassMeta, DomainError, GenerationTarget, Symbol, TypeCategory, classify_fact,
    element_type_name, split_full_name,
};

/// Record of fully-qualified type names already processed in one run.
///
/// Monotonically growing within a run; never consulted across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitedSet(std::collections::BTreeSet<String>);

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already present.
    pub fn insert(&mut self, full_name: impl Into<String>) -> bool {
        self.0.insert(full_name.into())
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.0.contains(full_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One built artifact's metadata, tagged with the symbol it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltMeta {
    pub full_name: String,
    pub meta: ClassMeta,
}

/// Drives a target's builder depth-first across the reference graph.
pub struct ClosureWalker<'a> {
    index: &'a SymbolIndex,
    policy: TargetPolicy,
}

impl<'a> ClosureWalker<'a> {
    pub fn new(index: &'a SymbolIndex, target: GenerationTarget) -> Self {
        Self {
            index,
            policy: TargetPolicy::for_target(target),
        }
    }

    pub fn target(&self) -> GenerationTarget {
        self.policy.target
    }

    /// Run the closure from `seed`. Returns the built metadata in visit
    /// order (each `ClassMeta.order` is its 1-based rank) together with
    /// the final visited set.
    #[instrument(skip_all, fields(target = %self.policy.target, seed = %seed.full_name))]
    pub fn run(&self, seed: &Arc<Symbol>) -> Result<(Vec<BuiltMeta>, VisitedSet), DomainError> {
        let mut visited = VisitedSet::new();
        let mut built = Vec::new();

        self.walk(seed, &mut visited, &mut built)?;

        debug!(types = built.len(), "closure complete");
        Ok((built, visited))
    }

    fn walk(
        &self,
        symbol: &Arc<Symbol>,
        visited: &mut VisitedSet,
        built: &mut Vec<BuiltMeta>,
    ) -> Result<(), DomainError> {
        let builder = MetaBuilder::new(self.index, self.policy);
        let mut meta = builder.build(symbol, visited)?;

        visited.insert(&symbol.full_name);
        meta.order = built.len() as u32 + 1;
        built.push(BuiltMeta {
            full_name: symbol.full_name.clone(),
            meta,
        });

        // Children come from the *original* property facts, not the built
        // (already filtered) descriptors: a property the target excluded
        // from its artifact can still pull its type into the closure.
        for child in self.discover_children(symbol, visited) {
            if visited.contains(&child.full_name) {
                continue;
            }
            self.walk(&child, visited, built)?;
        }

        Ok(())
    }

    fn discover_children(&self, symbol: &Symbol, visited: &VisitedSet) -> Vec<Arc<Symbol>> {
        let Some(facts) = symbol.properties.as_deref() else {
            return Vec::new();
        };

        let mut children: Vec<Arc<Symbol>> = Vec::new();
        for fact in facts {
            let resolved = match classify_fact(fact) {
                TypeCategory::Simple => continue,
                TypeCategory::Collection => element_type_name(fact)
                    .and_then(|full| {
                        self.index.get(full).or_else(|| {
                            self.index.find_by_name(split_full_name(full).1, None).ok()
                        })
                    })
                    .cloned(),
                TypeCategory::Reference => {
                    self.index.find_by_name(&fact.type_name, None).ok().cloned()
                }
            };

            let Some(child) = resolved else { continue };
            if visited.contains(&child.full_name) {
                continue;
            }
            if !self.policy.recurse.includes(child.markers) {
                continue;
            }
            if children.iter().any(|c| c.full_name == child.full_name) {
                continue;
            }
            children.push(child);
        }

        children
    }
}
