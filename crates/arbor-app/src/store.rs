use std::sync::Arc;

use arbor_core::{apply, AppEvent, WorkspaceSnapshot};
use tokio::sync::RwLock;

/// Exclusive owner of the [`WorkspaceSnapshot`].
///
/// Every change goes through `dispatch`, which replaces the snapshot
/// wholesale via the pure reducer; no coordinator holds the lock across
/// an await into the gateway. Dispatches issued within one handler are
/// applied in issue order.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<WorkspaceSnapshot>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn dispatch(&self, event: AppEvent) {
        let mut guard = self.inner.write().await;
        *guard = apply(&guard, event);
    }

    /// Cloned view of the current snapshot.
    pub async fn snapshot(&self) -> WorkspaceSnapshot {
        self.inner.read().await.clone()
    }
}
