//! Handlers for the `/users` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tandem_core::error::CoreError;
use tandem_core::types::generate_id;
use tandem_core::user::{validate_user, User};
use tandem_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&*state.store).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
///
/// An empty `id` is replaced with a generated one.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(mut input) = payload?;
    if input.id.trim().is_empty() {
        input.id = generate_id("user");
    }
    validate_user(&input)?;

    UserRepo::save(&*state.store, &input).await?;

    tracing::info!(user_id = %input.id, target_language = %input.target_language, "User created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: input })))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&*state.store, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/{id}
///
/// Replaces the whole profile. The path id wins over any id in the body.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<User>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(mut input) = payload?;
    if UserRepo::find_by_id(&*state.store, &id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("User", id)));
    }

    input.id = id;
    validate_user(&input)?;
    UserRepo::save(&*state.store, &input).await?;

    tracing::info!(user_id = %input.id, "User updated");

    Ok(Json(DataResponse { data: input }))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if UserRepo::delete(&*state.store, &id).await? {
        tracing::info!(user_id = %id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("User", id)))
    }
}
