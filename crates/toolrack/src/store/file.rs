use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};
use crate::store::SelectionStore;
use crate::tool::Tool;

/// Selection store backed by a single JSON document on disk.
///
/// The document is the bare ordered array of tool objects; a missing file
/// means no selection has been persisted yet.
#[derive(Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SelectionStore for FileSelectionStore {
    async fn load(&self) -> EngineResult<Option<Vec<Tool>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(EngineError::Store(format!(
                    "failed to read selection file {}: {error}",
                    self.path.display()
                )))
            }
        };
        let tools = serde_json::from_slice(&bytes).map_err(|error| {
            EngineError::Store(format!(
                "failed to parse selection file {}: {error}",
                self.path.display()
            ))
        })?;
        Ok(Some(tools))
    }

    async fn save(&self, tools: &[Tool]) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                EngineError::Store(format!(
                    "failed to create selection directory {}: {error}",
                    parent.display()
                ))
            })?;
        }
        let serialized = serde_json::to_vec_pretty(&tools).map_err(|error| {
            EngineError::Store(format!("failed to serialize selection: {error}"))
        })?;
        tokio::fs::write(&self.path, serialized)
            .await
            .map_err(|error| {
                EngineError::Store(format!(
                    "failed to write selection file {}: {error}",
                    self.path.display()
                ))
            })?;
        Ok(())
    }
}
