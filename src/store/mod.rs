pub mod client;
pub mod sync;

pub use client::RemoteStore;
pub use sync::{SyncEvent, SyncHandle, SyncStatus};
