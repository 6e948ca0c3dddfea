use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tandem_core::error::CoreError;
use tandem_db::StoreError;
use tandem_engine::EngineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, storage and generation errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": message, "code": CODE }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Malformed or mistyped JSON bodies keep the standard error envelope.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Store(err) => classify_store_error(err),
            AppError::Engine(err) => match err {
                EngineError::Core(core) => classify_core_error(core),
                EngineError::Store(store) => classify_store_error(store),
                EngineError::Unavailable(llm) => {
                    tracing::warn!(error = %llm, "Language model unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "UPSTREAM_UNAVAILABLE",
                        "Content generation is temporarily unavailable".to_string(),
                    )
                }
                EngineError::Malformed { kind, message } => {
                    tracing::warn!(kind, error = %message, "Language model returned malformed content");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_MALFORMED",
                        format!("The language model returned an unusable {kind}"),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Storage failures never leak paths or parser detail to clients.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Storage error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORAGE_ERROR",
        "A storage error occurred".to_string(),
    )
}
