//! Handlers for the `/exercises` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tandem_core::error::CoreError;
use tandem_core::exercise::{Exercise, ExerciseStatus};
use tandem_core::generation::{DEFAULT_GENERATE_COUNT, MAX_GENERATE_COUNT, MIN_GENERATE_COUNT};
use tandem_db::repositories::UserRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::ExerciseListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /exercises/generate`.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateExercisesRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "partner_id is required"))]
    pub partner_id: String,
    #[validate(range(min = MIN_GENERATE_COUNT, max = MAX_GENERATE_COUNT))]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ExerciseStatus,
}

// ---------------------------------------------------------------------------
// Catalog endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/exercises
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(params): Query<ExerciseListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let exercises = state.exercises.list(&filter).await?;
    Ok(Json(DataResponse { data: exercises }))
}

/// POST /api/v1/exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    payload: Result<Json<Exercise>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let exercise = state.exercises.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: exercise })))
}

/// GET /api/v1/exercises/{id}
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let exercise = state.exercises.get(&id).await?;
    Ok(Json(DataResponse { data: exercise }))
}

/// DELETE /api/v1/exercises/{id}
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.exercises.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/exercises/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let exercise = state.exercises.update_status(&id, input.status).await?;
    Ok(Json(DataResponse { data: exercise }))
}

/// GET /api/v1/users/{id}/exercises
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&*state.store, &user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user_id)))?;

    let exercises = state.exercises.list_for_user(&user).await?;
    Ok(Json(DataResponse { data: exercises }))
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// POST /api/v1/exercises/generate
///
/// Generate exercises in the user's target language, tailored to the pair.
pub async fn generate_exercises(
    State(state): State<AppState>,
    payload: Result<Json<GenerateExercisesRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(CoreError::from)?;

    let user = UserRepo::find_by_id(&*state.store, &input.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", input.user_id.clone())))?;
    let partner = UserRepo::find_by_id(&*state.store, &input.partner_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", input.partner_id.clone())))?;

    let count = input.count.unwrap_or(DEFAULT_GENERATE_COUNT);
    let exercises = state.exercises.generate(&user, &partner, count).await?;

    tracing::info!(
        user_id = %user.id,
        partner_id = %partner.id,
        count = exercises.len(),
        "Exercises generated",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: exercises })))
}
