//! Repository for the `exercises` collection.

use tandem_core::exercise::{Exercise, ExerciseFilter, ExerciseStatus};
use tandem_core::language::Language;

use crate::store::{self, RecordStore, StoreError};

/// Provides CRUD operations for exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Exercises matching every populated field of `filter`.
    pub async fn list(
        store: &dyn RecordStore,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, StoreError> {
        store::query(store, |e: &Exercise| filter.matches(e)).await
    }

    pub async fn list_by_language(
        store: &dyn RecordStore,
        language: Language,
    ) -> Result<Vec<Exercise>, StoreError> {
        store::query(store, move |e: &Exercise| e.language == language).await
    }

    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: &str,
    ) -> Result<Option<Exercise>, StoreError> {
        store::fetch(store, id).await
    }

    pub async fn save(store: &dyn RecordStore, exercise: &Exercise) -> Result<(), StoreError> {
        store::persist(store, exercise).await
    }

    /// Set the status of an exercise.
    ///
    /// Returns `None` if no exercise with the given `id` exists.
    pub async fn update_status(
        store: &dyn RecordStore,
        id: &str,
        status: ExerciseStatus,
    ) -> Result<Option<Exercise>, StoreError> {
        let Some(mut exercise) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };
        exercise.status = status;
        Self::save(store, &exercise).await?;
        Ok(Some(exercise))
    }

    pub async fn delete(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        store::remove::<Exercise>(store, id).await
    }
}
