//! Persistence for the tandem learning backend.
//!
//! Records live in named collections behind the [`store::RecordStore`]
//! trait. The repositories in [`repositories`] give each record type a
//! typed, collection-specific surface over it.

pub mod repositories;
pub mod store;

use std::path::PathBuf;
use std::sync::Arc;

pub use store::{Collection, JsonFileStore, MemoryStore, RecordStore, StoreError, StoreHandle};

/// Open the JSON-file store rooted at `data_dir`, creating it if missing.
pub async fn open_store(data_dir: impl Into<PathBuf>) -> std::io::Result<StoreHandle> {
    let store = JsonFileStore::open(data_dir).await?;
    Ok(Arc::new(store))
}

/// Verify the backing store is reachable.
pub async fn health_check(store: &dyn RecordStore) -> Result<(), StoreError> {
    store.ping().await
}
