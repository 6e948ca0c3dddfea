use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{Collection, RecordStore, StoreError};

type Records = BTreeMap<String, Value>;

/// File-backed store: one pretty-printed JSON object per collection at
/// `<dir>/<collection>.json`, mapping id to record.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a reader never sees a half-written collection. Read-modify-write
/// cycles are serialized by a single writer lock.
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub async fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!(dir = %dir.display(), "Opened JSON record store");

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.name()))
    }

    async fn load(&self, collection: Collection) -> Result<Records, StoreError> {
        let path = self.path(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Records::new()),
            Err(source) => return Err(StoreError::Io { collection, source }),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Records::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::error!(
                collection = %collection,
                path = %path.display(),
                error = %source,
                "Collection file is corrupt",
            );
            StoreError::Corrupt { collection, source }
        })
    }

    async fn write(&self, collection: Collection, records: &Records) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|source| StoreError::Encode { collection, source })?;

        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|source| StoreError::Io { collection, source })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io { collection, source })?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let mut records = self.load(collection).await?;
        Ok(records.remove(id))
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        Ok(self.load(collection).await?.into_values().collect())
    }

    async fn save(&self, collection: Collection, id: &str, record: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load(collection).await?;
        records.insert(id.to_string(), record);
        self.write(collection, &records).await?;

        tracing::debug!(collection = %collection, id, "Saved record");
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load(collection).await?;
        if records.remove(id).is_none() {
            return Ok(false);
        }
        self.write(collection, &records).await?;

        tracing::debug!(collection = %collection, id, "Deleted record");
        Ok(true)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        tokio::fs::metadata(&self.dir)
            .await
            .map(|_| ())
            .map_err(|source| StoreError::Io {
                collection: Collection::Users,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        assert!(store.get_all(Collection::Users).await.unwrap().is_empty());
        assert!(store.get(Collection::Users, "u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_writes_pretty_object_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        store
            .save(Collection::Users, "u1", json!({"id": "u1", "name": "Zoë"}))
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(text.contains('\n'), "expected pretty-printed JSON");
        assert!(text.contains("Zoë"), "non-ASCII text stays unescaped");

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["u1"]["name"], "Zoë");
        assert!(!dir.path().join("users.json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_and_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exercises.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        assert_matches!(
            store.get_all(Collection::Exercises).await,
            Err(StoreError::Corrupt { collection: Collection::Exercises, .. })
        );
        assert_matches!(
            store.save(Collection::Exercises, "e1", json!({"id": "e1"})).await,
            Err(StoreError::Corrupt { .. })
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("idioms.json"), "  \n").unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        assert!(store.get_all(Collection::Idioms).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonFileStore::open(&nested).await.unwrap();

        assert!(nested.is_dir());
        store.ping().await.unwrap();
    }
}
