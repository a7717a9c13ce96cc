//! Best-effort mirroring of navigation state to durable storage.
//! Failures never block or revert UI state; they are logged and dropped.

use arbor_core::{AppEvent, SessionData};

use crate::gateway::ContentEngine;
use crate::store::Store;

pub(crate) async fn persist_vault(engine: &dyn ContentEngine, root_path: &str) {
    let patch = SessionData {
        last_vault_path: Some(root_path.to_string()),
        ..Default::default()
    };
    if let Err(err) = engine.save_session(patch).await {
        log::warn!("failed to persist vault path: {err}");
    }
}

pub(crate) async fn persist_file(engine: &dyn ContentEngine, path: &str) {
    let patch = SessionData {
        last_file_path: Some(path.to_string()),
        ..Default::default()
    };
    if let Err(err) = engine.save_session(patch).await {
        log::warn!("failed to persist file path: {err}");
    }
}

/// Start-up restore chain. Each step runs only if the previous one
/// succeeded; any failure leaves the snapshot at whatever prefix of the
/// chain already landed. Partial recovery, never a blocking error, and
/// no re-save of the session while restoring.
pub(crate) async fn restore(store: &Store, engine: &dyn ContentEngine) {
    let session = match engine.get_session().await {
        Ok(session) => session,
        Err(err) => {
            log::debug!("no session to restore: {err}");
            return;
        }
    };

    let Some(vault_path) = session.last_vault_path else {
        return;
    };
    let info = match engine.open_vault(&vault_path).await {
        Ok(info) => info,
        Err(err) => {
            log::debug!("session vault no longer opens: {err}");
            return;
        }
    };
    store
        .dispatch(AppEvent::LoadVault {
            root_path: info.root_path,
            file_paths: info.file_paths.clone(),
        })
        .await;

    let Some(file_path) = session.last_file_path else {
        return;
    };
    if !info.file_paths.contains(&file_path) {
        return;
    }
    match engine.read_file(&file_path).await {
        Ok(content) => {
            store
                .dispatch(AppEvent::SelectFile {
                    path: file_path,
                    content,
                })
                .await;
        }
        Err(err) => {
            log::debug!("session file unreadable: {err}");
        }
    }
}
