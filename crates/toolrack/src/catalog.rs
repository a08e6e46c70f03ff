//! The externally sourced catalog of available tools.

pub mod http;
pub mod memory;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::tool::Tool;

pub use http::HttpCatalogReader;
pub use memory::StaticCatalogReader;

/// Every tool available for selection, in source order.
///
/// Read-only for the engine's lifetime. The selection is conceptually a
/// sub-sequence of this by id, but selection entries absent from the catalog
/// are tolerated and rendered as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog, dropping rows that repeat an id. First wins.
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut seen = HashSet::new();
        let tools = tools
            .into_iter()
            .filter(|tool| seen.insert(tool.id.clone()))
            .collect();
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Source of the catalog, fetched once at engine initialization.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn fetch(&self) -> EngineResult<Catalog>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: &str) -> Tool {
        Tool::new(id.to_string(), id.to_uppercase())
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![tool("a"), tool("b")]);
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("zzz"));
        assert_eq!(catalog.get("b").expect("tool").title, "B");
    }

    #[test]
    fn duplicate_rows_keep_first() {
        let catalog = Catalog::new(vec![
            tool("a"),
            Tool::new("a".to_string(), "Shadow".to_string()),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").expect("tool").title, "A");
    }
}
