//! Per-user persistence of the ordered selection.

pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::tool::Tool;

pub use file::FileSelectionStore;
pub use memory::MemorySelectionStore;

/// Per-user store holding the ordered selection as one whole document.
///
/// `load` distinguishes "no selection persisted yet" (`Ok(None)`) from a
/// transient failure (`Err`); the engine seeds defaults on the former and
/// refuses to overwrite the store on the latter. `save` is a whole-document
/// replace, so callers always submit the complete current selection.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    async fn load(&self) -> EngineResult<Option<Vec<Tool>>>;
    async fn save(&self, tools: &[Tool]) -> EngineResult<()>;
}

pub type SharedSelectionStore = Arc<dyn SelectionStore>;
