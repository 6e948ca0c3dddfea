//! Handlers for learner progress: points, streaks and achievements.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tandem_core::achievements;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/progress/achievements
///
/// Every defined badge with its threshold, so clients can show locked ones.
pub async fn list_achievements() -> impl IntoResponse {
    let catalog: Vec<_> = achievements::catalog().collect();
    Json(DataResponse { data: catalog })
}

/// GET /api/v1/progress/{user_id}
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let progress = state.progress.get_or_create(&user_id).await?;
    Ok(Json(DataResponse { data: progress }))
}

/// POST /api/v1/progress/{user_id}/update-streak
pub async fn update_streak(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let progress = state.progress.update_streak(&user_id).await?;
    Ok(Json(DataResponse { data: progress }))
}

/// POST /api/v1/progress/{user_id}/complete-exercise/{exercise_id}
///
/// Unknown exercises are rejected with 404. Completing an exercise twice
/// returns the unchanged progress.
pub async fn complete_exercise(
    State(state): State<AppState>,
    Path((user_id, exercise_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let exercise = state.exercises.get(&exercise_id).await?;
    let progress = state.progress.complete_exercise(&user_id, &exercise).await?;
    Ok(Json(DataResponse { data: progress }))
}
