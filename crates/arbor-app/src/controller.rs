use std::sync::Arc;

use arbor_core::AppEvent;

use crate::gateway::{ContentEngine, EngineResult, NOTE_EXTENSION};
use crate::outline::OutlineScheduler;
use crate::store::Store;
use crate::{results, session};

/// The WorkspaceController acts as the high-level Facade over the
/// store, the coordinators, and the content engine gateway.
///
/// # Architecture Decision: Action vs Query Separation
///
/// *   **Actions (user intents)**: Unified in `WorkspaceController`.
///     Every operation that issues gateway calls or dispatches events
///     SHOULD go through a method here. This keeps a single entry point
///     for failure classification: surfaced failures are returned as
///     `Err` with the snapshot at its pre-call value, silent ones are
///     logged and swallowed.
///
/// *   **Queries (Read)**: Call `controller.store().snapshot()`
///     directly. Read-only inspection does not need wrapping.
pub struct WorkspaceController {
    pub(crate) store: Store,
    pub(crate) engine: Arc<dyn ContentEngine>,
    pub(crate) outline: OutlineScheduler,
}

impl WorkspaceController {
    pub fn new(engine: Arc<dyn ContentEngine>) -> Self {
        let store = Store::new();
        let outline = OutlineScheduler::new(store.clone(), engine.clone());
        Self {
            store,
            engine,
            outline,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Read the persisted session once and rebuild as much navigation
    /// state as still resolves. Never fails.
    pub async fn restore_session(&self) {
        session::restore(&self.store, self.engine.as_ref()).await;
    }

    // ------------------------------------------------------------------------
    // Vault & file tree
    // ------------------------------------------------------------------------

    /// Run the folder picker; `Ok(false)` means the user cancelled.
    pub async fn open_vault_from_dialog(&self) -> EngineResult<bool> {
        match self.engine.select_folder().await? {
            Some(path) => {
                self.open_vault(&path).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn open_vault(&self, path: &str) -> EngineResult<()> {
        let info = self.engine.open_vault(path).await?;
        self.outline.invalidate();
        let root_path = info.root_path.clone();
        self.store
            .dispatch(AppEvent::LoadVault {
                root_path: info.root_path,
                file_paths: info.file_paths,
            })
            .await;
        session::persist_vault(self.engine.as_ref(), &root_path).await;
        Ok(())
    }

    /// Last-writer-wins refresh of the file listing. A failed listing
    /// falls back to an empty list rather than surfacing.
    pub async fn refresh_file_list(&self) {
        let paths = match self.engine.list_files().await {
            Ok(paths) => paths,
            Err(err) => {
                log::debug!("file list refresh failed: {err}");
                Vec::new()
            }
        };
        self.store.dispatch(AppEvent::SetFilePaths(paths)).await;
    }

    // ------------------------------------------------------------------------
    // Selection & editing
    // ------------------------------------------------------------------------

    /// Caller contract: `path` is a member of the current file listing.
    pub async fn select_file(&self, path: &str) -> EngineResult<()> {
        let content = self.engine.read_file(path).await?;
        self.store
            .dispatch(AppEvent::SelectFile {
                path: path.to_string(),
                content,
            })
            .await;
        self.outline.refresh_now().await;
        session::persist_file(self.engine.as_ref(), path).await;
        Ok(())
    }

    /// Replace the editor content and schedule a debounced reparse.
    pub async fn edit_content(&self, text: impl Into<String>) {
        self.store
            .dispatch(AppEvent::SetEditorContent(text.into()))
            .await;
        self.outline.content_changed().await;
    }

    /// Write the selected file; a missing selection is a no-op.
    pub async fn save_file(&self) -> EngineResult<()> {
        let snapshot = self.store.snapshot().await;
        let Some(path) = snapshot.selected_path else {
            return Ok(());
        };
        self.engine
            .write_file(&path, &snapshot.editor_content)
            .await
    }

    /// Create a note, refresh the listing, and select it. A blank name
    /// is a no-op; the note extension is appended when missing.
    pub async fn create_file(&self, name: &str) -> EngineResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        let path = if name.ends_with(NOTE_EXTENSION) {
            name.to_string()
        } else {
            format!("{name}{NOTE_EXTENSION}")
        };

        self.engine.create_file(&path).await?;
        self.refresh_file_list().await;
        self.select_file(&path).await
    }

    /// Delete the selected file. The selection is cleared before the
    /// listing refresh lands, so a stale selection is never visible
    /// against a list that no longer contains it.
    pub async fn delete_current_file(&self) -> EngineResult<()> {
        let snapshot = self.store.snapshot().await;
        let Some(path) = snapshot.selected_path else {
            return Ok(());
        };

        self.engine.delete_file(&path).await?;
        self.outline.invalidate();
        self.store.dispatch(AppEvent::ClearSelection).await;
        self.refresh_file_list().await;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries & search
    // ------------------------------------------------------------------------

    /// Run a tag query; empty input issues no call.
    pub async fn run_tag_query(&self, input: &str) -> EngineResult<()> {
        results::run_tag_query(&self.store, self.engine.as_ref(), input).await
    }

    /// Run a full-text search; empty input issues no call.
    pub async fn run_search(&self, input: &str) -> EngineResult<()> {
        results::run_search(&self.store, self.engine.as_ref(), input).await
    }

    /// Navigate from a result row to its file: the same selection path
    /// as a direct click, then the overlay is hidden. On failure the
    /// overlay stays as it was.
    pub async fn open_result(&self, path: &str) -> EngineResult<()> {
        self.select_file(path).await?;
        self.store.dispatch(AppEvent::HideResults).await;
        Ok(())
    }

    pub async fn hide_results(&self) {
        self.store.dispatch(AppEvent::HideResults).await;
    }
}
