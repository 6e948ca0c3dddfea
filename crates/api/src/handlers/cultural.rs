//! Handlers for cultural notes, idioms and fun facts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tandem_core::language::Language;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// GET /api/v1/cultural/notes/{language}
pub async fn list_notes(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language: Language = language.parse()?;
    let notes = state.cultural.notes_by_language(language).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// GET /api/v1/cultural/notes/detail/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = state.cultural.get_note(&id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/cultural/notes/detail/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.cultural.delete_note(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Idioms
// ---------------------------------------------------------------------------

/// GET /api/v1/cultural/idioms/{language}
pub async fn list_idioms(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language: Language = language.parse()?;
    let idioms = state.cultural.idioms_by_language(language).await?;
    Ok(Json(DataResponse { data: idioms }))
}

/// GET /api/v1/cultural/idioms/detail/{id}
pub async fn get_idiom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let idiom = state.cultural.get_idiom(&id).await?;
    Ok(Json(DataResponse { data: idiom }))
}

/// DELETE /api/v1/cultural/idioms/detail/{id}
pub async fn delete_idiom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.cultural.delete_idiom(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Fun facts
// ---------------------------------------------------------------------------

/// GET /api/v1/cultural/fun-facts/{language}
pub async fn list_fun_facts(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language: Language = language.parse()?;
    let facts = state.cultural.fun_facts_by_language(language).await?;
    Ok(Json(DataResponse { data: facts }))
}

/// GET /api/v1/cultural/fun-facts/detail/{id}
pub async fn get_fun_fact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let fact = state.cultural.get_fun_fact(&id).await?;
    Ok(Json(DataResponse { data: fact }))
}

/// DELETE /api/v1/cultural/fun-facts/detail/{id}
pub async fn delete_fun_fact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.cultural.delete_fun_fact(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// POST /api/v1/cultural/generate/{language}
///
/// Generates one note, one idiom and one fun fact and returns all three.
pub async fn generate(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language: Language = language.parse()?;
    let bundle = state.cultural.generate(language).await?;

    tracing::info!(language = %language, "Cultural content generated");

    Ok((StatusCode::CREATED, Json(DataResponse { data: bundle })))
}
