use super::client::RemoteStore;
use crate::domain::Project;
use crate::error::StoreError;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Result of a background store request, drained by the event loop
#[derive(Debug)]
pub enum SyncEvent {
    Loaded(Result<Vec<Project>, StoreError>),
    Pushed(Result<(), StoreError>),
}

/// Where the session stands with the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// No endpoint; nothing is fetched or pushed
    Unconfigured,
    Loading,
    /// Initial load succeeded; mutations are pushed
    Ready,
    /// Initial load failed; local changes stay local for this session
    LoadFailed,
}

impl SyncStatus {
    pub fn can_push(&self) -> bool {
        matches!(self, SyncStatus::Ready)
    }
}

/// Dispatches store requests onto the tokio runtime without blocking the UI
pub struct SyncHandle {
    store: Option<Arc<RemoteStore>>,
    runtime: Handle,
    tx: Sender<SyncEvent>,
    rx: Receiver<SyncEvent>,
}

impl SyncHandle {
    pub fn new(store: Option<RemoteStore>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            store: store.map(Arc::new),
            runtime,
            tx,
            rx,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    /// Start the initial fetch
    pub fn fetch(&self) -> Result<(), StoreError> {
        let store = self.store.clone().ok_or(StoreError::NotConfigured)?;
        let tx = self.tx.clone();

        tracing::info!(endpoint = store.endpoint(), "fetching projects");
        self.runtime.spawn(async move {
            let result = store.fetch_projects().await;
            let _ = tx.send(SyncEvent::Loaded(result));
        });
        Ok(())
    }

    /// Fire-and-forget write of the full list. Overlapping writes are not ordered.
    pub fn push(&self, projects: Vec<Project>) {
        let Some(store) = self.store.clone() else {
            return;
        };
        let tx = self.tx.clone();

        tracing::debug!(count = projects.len(), "pushing projects");
        self.runtime.spawn(async move {
            let result = store.push_projects(&projects).await;
            let _ = tx.send(SyncEvent::Pushed(result));
        });
    }

    /// Next finished request, if any
    pub fn try_recv(&self) -> Option<SyncEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished request
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SyncEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}
