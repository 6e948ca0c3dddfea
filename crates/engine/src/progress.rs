//! Points, streaks, skill counters and achievements per user.

use std::sync::Arc;

use tandem_core::clock::Clock;
use tandem_core::exercise::Exercise;
use tandem_core::progress::UserProgress;
use tandem_db::repositories::ProgressRepo;
use tandem_db::{StoreError, StoreHandle};

use crate::locks::UserLocks;

/// Owns every mutation of [`UserProgress`].
///
/// Each operation loads the record, applies its changes in memory and
/// persists once at the end, all while holding the user's lock.
pub struct ProgressEngine {
    store: StoreHandle,
    clock: Arc<dyn Clock>,
    locks: UserLocks,
}

impl ProgressEngine {
    pub fn new(store: StoreHandle, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            locks: UserLocks::new(),
        }
    }

    /// Load the user's progress, creating and persisting a zeroed record on
    /// first access.
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserProgress, StoreError> {
        let _guard = self.locks.acquire(user_id).await;

        let (progress, created) = ProgressRepo::find_or_default(&*self.store, user_id).await?;
        if created {
            ProgressRepo::save(&*self.store, &progress).await?;
            tracing::info!(user_id, "Created progress record");
        }
        Ok(progress)
    }

    /// Count an activity today and advance the streak.
    pub async fn update_streak(&self, user_id: &str) -> Result<UserProgress, StoreError> {
        let _guard = self.locks.acquire(user_id).await;

        let (mut progress, _) = ProgressRepo::find_or_default(&*self.store, user_id).await?;
        let outcome = progress.record_activity(&*self.clock);
        ProgressRepo::save(&*self.store, &progress).await?;

        tracing::info!(
            user_id,
            streak = outcome.streak,
            transition = ?outcome.transition,
            awarded = ?outcome.awarded,
            "Updated streak",
        );
        Ok(progress)
    }

    /// Credit a completed exercise. Completing the same exercise again
    /// returns the current record unchanged.
    pub async fn complete_exercise(
        &self,
        user_id: &str,
        exercise: &Exercise,
    ) -> Result<UserProgress, StoreError> {
        let _guard = self.locks.acquire(user_id).await;

        let (mut progress, created) = ProgressRepo::find_or_default(&*self.store, user_id).await?;

        let Some(outcome) = progress.record_completion(exercise, &*self.clock) else {
            tracing::debug!(user_id, exercise_id = %exercise.id, "Exercise already completed");
            if created {
                ProgressRepo::save(&*self.store, &progress).await?;
            }
            return Ok(progress);
        };

        ProgressRepo::save(&*self.store, &progress).await?;

        tracing::info!(
            user_id,
            exercise_id = %exercise.id,
            points_awarded = outcome.points_awarded,
            total_points = progress.points,
            streak = progress.streak,
            awarded = ?outcome.awarded,
            streak_awarded = ?outcome.activity.awarded,
            "Completed exercise",
        );
        Ok(progress)
    }
}
