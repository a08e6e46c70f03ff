//! Write-behind persistence of the selection.
//!
//! One spawned task per engine. The selection watch channel retains only the
//! latest state, so at most one save is in flight and any mutations landing
//! during a save collapse into a single trailing save of the then-current
//! state. The store eventually holds the latest in-memory selection;
//! intermediate states may be skipped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::event::{Bus, EngineEvent};
use crate::selection::OrderedSelection;
use crate::store::{SelectionStore, SharedSelectionStore};
use crate::tool::Tool;

pub(crate) fn spawn_selection_saver(
    mut selection: watch::Receiver<OrderedSelection>,
    store: SharedSelectionStore,
    bus: Bus,
    degraded: Arc<AtomicBool>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = selection.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = selection.borrow_and_update().tools().to_vec();
                    save_snapshot(store.as_ref(), &snapshot, &bus, &degraded).await;
                }
                result = shutdown.changed() => {
                    if result.is_ok() && !*shutdown.borrow() {
                        continue;
                    }
                    // Session end: flush a queued change, then stop.
                    if selection.has_changed().unwrap_or(false) {
                        let snapshot = selection.borrow_and_update().tools().to_vec();
                        save_snapshot(store.as_ref(), &snapshot, &bus, &degraded).await;
                    }
                    break;
                }
            }
        }
    })
}

async fn save_snapshot(
    store: &dyn SelectionStore,
    snapshot: &[Tool],
    bus: &Bus,
    degraded: &AtomicBool,
) {
    match store.save(snapshot).await {
        Ok(()) => {
            degraded.store(false, Ordering::Relaxed);
            bus.publish(EngineEvent::SelectionSaved);
        }
        Err(error) => {
            tracing::warn!("selection save failed, keeping in-memory state: {error}");
            degraded.store(true, Ordering::Relaxed);
            bus.publish(EngineEvent::SaveFailed {
                reason: error.to_string(),
            });
        }
    }
}
