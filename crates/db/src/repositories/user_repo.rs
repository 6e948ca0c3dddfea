//! Repository for the `users` collection.

use tandem_core::user::User;

use crate::store::{self, RecordStore, StoreError};

/// Provides CRUD operations for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// All users, ordered by id.
    pub async fn list(store: &dyn RecordStore) -> Result<Vec<User>, StoreError> {
        store::fetch_all(store).await
    }

    pub async fn find_by_id(store: &dyn RecordStore, id: &str) -> Result<Option<User>, StoreError> {
        store::fetch(store, id).await
    }

    /// Insert or replace a user under `user.id`.
    pub async fn save(store: &dyn RecordStore, user: &User) -> Result<(), StoreError> {
        store::persist(store, user).await
    }

    /// Returns `true` if a user was deleted.
    pub async fn delete(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        store::remove::<User>(store, id).await
    }
}
