//! Change notifications for the hosting shell.

use serde::Serialize;
use tokio::sync::broadcast;

/// Engine-level events the hosting shell can react to.
///
/// `SelectionChanged`/`FilterChanged` drive re-renders; the store and
/// catalog variants surface degraded states without interrupting the
/// engine. All of them are advisory, the engine never waits on a receiver.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum EngineEvent {
    SelectionChanged,
    FilterChanged,
    CatalogUnavailable { reason: String },
    StoreUnavailable { reason: String },
    SelectionSaved,
    SaveFailed { reason: String },
}

/// Broadcast fan-out of [`EngineEvent`] to any number of subscribers.
#[derive(Clone)]
pub struct Bus {
    sender: broadcast::Sender<EngineEvent>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Lagging or absent subscribers are not an error.
    pub fn publish(&self, event: EngineEvent) {
        let _ = self.sender.send(event);
    }
}
