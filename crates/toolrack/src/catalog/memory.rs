use async_trait::async_trait;

use crate::catalog::{Catalog, CatalogReader};
use crate::error::EngineResult;
use crate::tool::Tool;

/// Catalog source backed by a fixed list of tools.
///
/// Covers embeddings that ship a built-in tool set, and tests.
pub struct StaticCatalogReader {
    tools: Vec<Tool>,
}

impl StaticCatalogReader {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl CatalogReader for StaticCatalogReader {
    async fn fetch(&self) -> EngineResult<Catalog> {
        Ok(Catalog::new(self.tools.clone()))
    }
}
