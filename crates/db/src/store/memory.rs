use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{Collection, RecordStore, StoreError};

/// Volatile store used in tests and local experiments.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(&collection).and_then(|c| c.get(id)).cloned())
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn save(&self, collection: Collection, id: &str, record: Value) -> Result<(), StoreError> {
        let mut guard = self.collections.write().await;
        guard
            .entry(collection)
            .or_default()
            .insert(id.to_string(), record);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.collections.write().await;
        Ok(guard
            .get_mut(&collection)
            .is_some_and(|c| c.remove(id).is_some()))
    }
}
