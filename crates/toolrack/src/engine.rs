//! The selection engine: authoritative in-memory state and its operations.

mod saver;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::catalog::{Catalog, CatalogReader};
use crate::event::{Bus, EngineEvent};
use crate::selection::OrderedSelection;
use crate::store::SharedSelectionStore;
use crate::tool::Tool;
use crate::view::{self, ViewModel};

const EVENT_BUS_CAPACITY: usize = 32;

/// Owns the ordered selection, the catalog view and the filter query.
///
/// All operations are synchronous state transitions; persistence happens in
/// a background task fed by a watch channel, so no operation ever blocks on
/// the store. The engine is the only writer of the selection; projections
/// and the saver read it through the channel.
pub struct SelectionEngine {
    selection: watch::Sender<OrderedSelection>,
    catalog: Catalog,
    filter: String,
    bus: Bus,
    degraded: Arc<AtomicBool>,
    saver: tokio::task::JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl SelectionEngine {
    /// Fetch the catalog, load the persisted selection and start the
    /// write-behind saver.
    ///
    /// A catalog fetch error degrades to an empty catalog; selection
    /// management stays fully functional. A store load reporting "not found"
    /// seeds the caller-supplied defaults and schedules exactly one save of
    /// them; a transient load error seeds an empty selection and writes
    /// nothing, so existing store content is never clobbered.
    pub async fn initialize(
        reader: &dyn CatalogReader,
        store: SharedSelectionStore,
        defaults: Vec<Tool>,
    ) -> Self {
        let bus = Bus::new(EVENT_BUS_CAPACITY);
        let degraded = Arc::new(AtomicBool::new(false));

        let catalog = match reader.fetch().await {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::warn!("catalog fetch failed, starting with empty catalog: {error}");
                degraded.store(true, Ordering::Relaxed);
                bus.publish(EngineEvent::CatalogUnavailable {
                    reason: error.to_string(),
                });
                Catalog::default()
            }
        };

        let (selection, seed_store) = match store.load().await {
            Ok(Some(tools)) => (OrderedSelection::from_persisted(tools), false),
            Ok(None) => (OrderedSelection::from_persisted(defaults), true),
            Err(error) => {
                tracing::warn!(
                    "selection load failed, starting empty without overwriting the store: {error}"
                );
                degraded.store(true, Ordering::Relaxed);
                bus.publish(EngineEvent::StoreUnavailable {
                    reason: error.to_string(),
                });
                (OrderedSelection::new(), false)
            }
        };

        let (selection_tx, selection_rx) = watch::channel(selection);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let saver = saver::spawn_selection_saver(
            selection_rx,
            store,
            bus.clone(),
            Arc::clone(&degraded),
            shutdown_rx,
        );

        let engine = Self {
            selection: selection_tx,
            catalog,
            filter: String::new(),
            bus,
            degraded,
            saver,
            shutdown: shutdown_tx,
        };
        if seed_store {
            engine.schedule_persist();
        }
        engine
    }

    /// Append the catalog tool with this id to the end of the selection.
    ///
    /// A no-op when the id is already selected or absent from the catalog.
    pub fn add(&mut self, tool_id: &str) {
        let Some(tool) = self.catalog.get(tool_id) else {
            return;
        };
        let tool = tool.clone();
        if self.selection.send_if_modified(|selection| selection.add(tool)) {
            self.bus.publish(EngineEvent::SelectionChanged);
        }
    }

    /// Remove the selected entry with this id; absent ids are a no-op.
    pub fn remove(&mut self, tool_id: &str) {
        if self
            .selection
            .send_if_modified(|selection| selection.remove(tool_id))
        {
            self.bus.publish(EngineEvent::SelectionChanged);
        }
    }

    /// Move the entry at `from` to `to` with splice semantics.
    ///
    /// Invalid indices and `from == to` are silent no-ops; the move buttons
    /// and drop targets are already bounds-checked by the view's
    /// affordances. Persists only when the order actually changed.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if self
            .selection
            .send_if_modified(|selection| selection.move_item(from, to))
        {
            self.bus.publish(EngineEvent::SelectionChanged);
        }
    }

    /// Drag-and-drop surface of [`Self::move_item`]; unknown ids are a no-op.
    pub fn reorder_by_drop(&mut self, dragged_id: &str, target_index: usize) {
        let from = self.selection.borrow().position(dragged_id);
        let Some(from) = from else {
            return;
        };
        self.move_item(from, target_index);
    }

    /// Update the filter query. Session-local, never persisted.
    pub fn set_filter(&mut self, filter: String) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.bus.publish(EngineEvent::FilterChanged);
    }

    /// Re-schedule a save of the current selection after a failure.
    pub fn retry_persist(&self) {
        self.schedule_persist();
    }

    /// Catalog tools whose title matches the filter, in catalog order.
    /// Nothing is excluded; already-selected tools stay visible.
    pub fn visible_available(&self) -> Vec<Tool> {
        let needle = self.filter.to_lowercase();
        self.catalog
            .tools()
            .iter()
            .filter(|tool| view::title_matches(&tool.title, &needle))
            .cloned()
            .collect()
    }

    /// Project the current state for rendering.
    pub fn view(&self) -> ViewModel {
        let selection = self.selection.borrow();
        view::project(&selection, &self.catalog, &self.filter)
    }

    pub fn selection_snapshot(&self) -> Vec<Tool> {
        self.selection.borrow().tools().to_vec()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// True after a catalog fetch failure or a store load/save failure.
    /// Cleared by the next successful save.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.bus.subscribe()
    }

    /// Stop the saver, flushing a pending change if one is queued.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.saver.await;
    }

    fn schedule_persist(&self) {
        self.selection.send_modify(|_| {});
    }
}
