//! In-memory symbol provider for tests and fixtures.

use std::path::Path;

use gantry_core::{application::ports::SymbolProvider, domain::Symbol, error::GantryResult};

/// Serves a fixed symbol list, ignoring the project root.
#[derive(Debug, Clone, Default)]
pub struct MemorySymbolProvider {
    symbols: Vec<Symbol>,
}

impl MemorySymbolProvider {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolProvider for MemorySymbolProvider {
    fn load_symbols(&self, _project_root: &Path) -> GantryResult<Vec<Symbol>> {
        Ok(self.symbols.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_the_fixed_list() {
        let provider = MemorySymbolProvider::new(vec![Symbol::new("Shop.Domain", "Order")]);
        let symbols = provider.load_symbols(Path::new("/ignored")).unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Order");
    }
}
