use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::{Catalog, CatalogReader};
use crate::error::{EngineError, EngineResult};
use crate::tool::Tool;

/// Catalog source backed by an HTTP list endpoint.
///
/// Expects a JSON array of row objects with fields mappable to
/// `{id, title, icon, url}`. Rows without an id are skipped.
pub struct HttpCatalogReader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogReader {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl CatalogReader for HttpCatalogReader {
    async fn fetch(&self) -> EngineResult<Catalog> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| {
                EngineError::Catalog(format!(
                    "catalog request to {} failed: {error}",
                    self.endpoint
                ))
            })?;
        let rows: Vec<Value> = response.json().await.map_err(|error| {
            EngineError::Catalog(format!("catalog response was not a JSON array: {error}"))
        })?;

        let mut tools = Vec::with_capacity(rows.len());
        for row in &rows {
            match Tool::from_row(row) {
                Some(tool) => tools.push(tool),
                None => tracing::debug!("skipping catalog row without id"),
            }
        }
        Ok(Catalog::new(tools))
    }
}
