//! Record store: named collections of JSON records keyed by id.
//!
//! [`RecordStore`] is the object-safe backend contract over raw JSON values.
//! The typed helpers ([`fetch`], [`fetch_all`], [`persist`], [`remove`],
//! [`query`]) encode and decode [`Record`] types on top of it.

mod json_file;
mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use tandem_core::cultural::{CulturalNote, FunFact, Idiom};
use tandem_core::exercise::Exercise;
use tandem_core::progress::UserProgress;
use tandem_core::user::User;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Named partitions of the store, one per record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Exercises,
    Progress,
    CulturalNotes,
    Idioms,
    FunFacts,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Self::Users,
        Self::Exercises,
        Self::Progress,
        Self::CulturalNotes,
        Self::Idioms,
        Self::FunFacts,
    ];

    /// Collection name, also the file stem of JSON-backed storage.
    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Exercises => "exercises",
            Self::Progress => "progress",
            Self::CulturalNotes => "cultural_notes",
            Self::Idioms => "idioms",
            Self::FunFacts => "fun_facts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on collection '{collection}': {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    /// The collection's durable form could not be parsed. Nothing is
    /// written on top of it.
    #[error("Collection '{collection}' is corrupt: {source}")]
    Corrupt {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record '{id}' in '{collection}' could not be decoded: {source}")]
    Decode {
        collection: Collection,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record for '{collection}' could not be encoded: {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record for '{collection}' has no id")]
    MissingId { collection: Collection },
}

// ---------------------------------------------------------------------------
// Backend contract
// ---------------------------------------------------------------------------

/// Predicate over raw records used by [`RecordStore::query`].
pub type RawPredicate<'a> = &'a (dyn Fn(&Value) -> bool + Send + Sync);

/// Persistence backend. Every call reads or writes whole records; `save`
/// is an upsert keyed by `id`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError>;

    /// All records in the collection, ordered by id.
    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    async fn save(&self, collection: Collection, id: &str, record: Value) -> Result<(), StoreError>;

    /// Returns `true` if the record existed.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool, StoreError>;

    async fn query(
        &self,
        collection: Collection,
        predicate: RawPredicate<'_>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut records = self.get_all(collection).await?;
        records.retain(|r| predicate(r));
        Ok(records)
    }

    /// Cheap liveness probe for health checks.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Shared, cheaply cloneable store handle.
pub type StoreHandle = Arc<dyn RecordStore>;

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

/// A record type bound to one collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    fn record_id(&self) -> &str;
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Exercise {
    const COLLECTION: Collection = Collection::Exercises;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for UserProgress {
    const COLLECTION: Collection = Collection::Progress;

    fn record_id(&self) -> &str {
        &self.user_id
    }
}

impl Record for CulturalNote {
    const COLLECTION: Collection = Collection::CulturalNotes;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Idiom {
    const COLLECTION: Collection = Collection::Idioms;

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for FunFact {
    const COLLECTION: Collection = Collection::FunFacts;

    fn record_id(&self) -> &str {
        &self.id
    }
}

fn decode<R: Record>(id: &str, value: Value) -> Result<R, StoreError> {
    serde_json::from_value(value).map_err(|source| StoreError::Decode {
        collection: R::COLLECTION,
        id: id.to_string(),
        source,
    })
}

fn raw_id(value: &Value) -> &str {
    value
        .get("id")
        .or_else(|| value.get("user_id"))
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
}

/// Load one record by id.
pub async fn fetch<R: Record>(store: &dyn RecordStore, id: &str) -> Result<Option<R>, StoreError> {
    store
        .get(R::COLLECTION, id)
        .await?
        .map(|v| decode(id, v))
        .transpose()
}

/// Load every record of a collection, ordered by id.
pub async fn fetch_all<R: Record>(store: &dyn RecordStore) -> Result<Vec<R>, StoreError> {
    store
        .get_all(R::COLLECTION)
        .await?
        .into_iter()
        .map(|v| {
            let id = raw_id(&v).to_string();
            decode(&id, v)
        })
        .collect()
}

/// Insert or replace a record under its own id.
pub async fn persist<R: Record>(store: &dyn RecordStore, record: &R) -> Result<(), StoreError> {
    let id = record.record_id();
    if id.trim().is_empty() {
        return Err(StoreError::MissingId {
            collection: R::COLLECTION,
        });
    }

    let value = serde_json::to_value(record).map_err(|source| StoreError::Encode {
        collection: R::COLLECTION,
        source,
    })?;

    store.save(R::COLLECTION, id, value).await
}

/// Delete a record; `true` if it existed.
pub async fn remove<R: Record>(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
    store.delete(R::COLLECTION, id).await
}

/// Every record of type `R` for which `predicate` holds, ordered by id.
pub async fn query<R, F>(store: &dyn RecordStore, predicate: F) -> Result<Vec<R>, StoreError>
where
    R: Record,
    F: Fn(&R) -> bool + Send,
{
    let mut records = fetch_all::<R>(store).await?;
    records.retain(|r| predicate(r));
    Ok(records)
}
