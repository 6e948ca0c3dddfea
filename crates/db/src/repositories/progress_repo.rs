//! Repository for the `progress` collection, keyed by user id.

use tandem_core::progress::UserProgress;

use crate::store::{self, RecordStore, StoreError};

pub struct ProgressRepo;

impl ProgressRepo {
    pub async fn find_by_user(
        store: &dyn RecordStore,
        user_id: &str,
    ) -> Result<Option<UserProgress>, StoreError> {
        store::fetch(store, user_id).await
    }

    /// Load the user's progress, or a fresh zeroed record if none is stored.
    /// The fresh record is not persisted.
    pub async fn find_or_default(
        store: &dyn RecordStore,
        user_id: &str,
    ) -> Result<(UserProgress, bool), StoreError> {
        match Self::find_by_user(store, user_id).await? {
            Some(progress) => Ok((progress, false)),
            None => Ok((UserProgress::new(user_id), true)),
        }
    }

    pub async fn save(store: &dyn RecordStore, progress: &UserProgress) -> Result<(), StoreError> {
        store::persist(store, progress).await
    }

    pub async fn delete(store: &dyn RecordStore, user_id: &str) -> Result<bool, StoreError> {
        store::remove::<UserProgress>(store, user_id).await
    }
}
