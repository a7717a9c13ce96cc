use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arbor_core::{content_digest, AppEvent};
use tokio::task::JoinHandle;

use crate::gateway::ContentEngine;
use crate::store::Store;

/// Quiescence window between the last edit and the reparse it triggers.
pub const QUIESCENCE_WINDOW: Duration = Duration::from_millis(300);

/// Debounced reparse scheduler: keeps `outline_nodes` consistent with
/// `editor_content` without reparsing on every keystroke.
///
/// One instance per open editor session; it owns its timer state rather
/// than sharing a module-level handle. Each schedule is stamped with a
/// monotonic generation: a newer edit supersedes an older sleeping timer,
/// which then exits at wake without ever issuing its parse. In-flight
/// `parse_file` calls are never cancelled; their responses are discarded
/// post hoc when the originating path or content digest no longer
/// matches the current snapshot.
pub struct OutlineScheduler {
    store: Store,
    engine: Arc<dyn ContentEngine>,
    quiescence: Duration,
    generation: Arc<AtomicU64>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl OutlineScheduler {
    pub fn new(store: Store, engine: Arc<dyn ContentEngine>) -> Self {
        Self::with_quiescence(store, engine, QUIESCENCE_WINDOW)
    }

    pub fn with_quiescence(
        store: Store,
        engine: Arc<dyn ContentEngine>,
        quiescence: Duration,
    ) -> Self {
        Self {
            store,
            engine,
            quiescence,
            generation: Arc::new(AtomicU64::new(0)),
            timer: Mutex::new(None),
        }
    }

    /// Supersede any pending timer without scheduling a new one. Used
    /// when the selection context is abandoned (vault switch, delete).
    pub fn invalidate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Observe a content change for the currently selected file.
    pub async fn content_changed(&self) {
        let snapshot = self.store.snapshot().await;
        if snapshot.selected_path.is_none() || snapshot.editor_content.is_empty() {
            self.invalidate();
            self.store
                .dispatch(AppEvent::SetOutlineNodes(Vec::new()))
                .await;
            return;
        }

        let generation = self.invalidate();
        let store = self.store.clone();
        let engine = self.engine.clone();
        let current = self.generation.clone();
        let quiescence = self.quiescence;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiescence).await;
            // A newer edit superseded this timer; no parse is issued.
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            parse_current(&store, engine.as_ref()).await;
        });

        // Superseded timers exit on their own; the handle is kept only
        // so teardown can abort a still-pending one.
        *self.timer.lock().unwrap() = Some(handle);
    }

    /// Reparse immediately, outside the quiescence window. Used on file
    /// selection so the outline never waits out a debounce interval.
    pub async fn refresh_now(&self) {
        self.invalidate();
        parse_current(&self.store, self.engine.as_ref()).await;
    }
}

impl Drop for OutlineScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            handle.abort();
        }
    }
}

/// Parse the path and content active now, then apply the result only if
/// that context is still current when the response arrives.
async fn parse_current(store: &Store, engine: &dyn ContentEngine) {
    let snapshot = store.snapshot().await;
    let Some(path) = snapshot.selected_path else {
        return;
    };
    if snapshot.editor_content.is_empty() {
        store.dispatch(AppEvent::SetOutlineNodes(Vec::new())).await;
        return;
    }

    let digest = content_digest(&snapshot.editor_content);
    let outcome = engine.parse_file(&path, &snapshot.editor_content).await;

    // The selection or content may have moved on while the call was in
    // flight. `parse_file` is pure in content, so the response is valid
    // exactly when the originating path and digest still match.
    let current = store.snapshot().await;
    if current.selected_path.as_deref() != Some(path.as_str())
        || content_digest(&current.editor_content) != digest
    {
        log::debug!("dropping stale outline parse for {path}");
        return;
    }

    match outcome {
        Ok(parsed) => {
            store
                .dispatch(AppEvent::SetOutlineNodes(parsed.nodes))
                .await;
        }
        Err(err) => {
            // Fail-soft: a parse failure clears the outline and is never
            // surfaced to the user.
            log::debug!("outline parse failed for {path}: {err}");
            store.dispatch(AppEvent::SetOutlineNodes(Vec::new())).await;
        }
    }
}
