use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::EngineResult;
use crate::store::SelectionStore;
use crate::tool::Tool;

/// In-memory selection store for embeddings without a backend, and tests.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    slot: Mutex<Option<Vec<Tool>>>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SelectionStore for MemorySelectionStore {
    async fn load(&self) -> EngineResult<Option<Vec<Tool>>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, tools: &[Tool]) -> EngineResult<()> {
        *self.slot.lock().await = Some(tools.to_vec());
        Ok(())
    }
}
