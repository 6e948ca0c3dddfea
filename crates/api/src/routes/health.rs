//! Root-level service endpoints, mounted outside `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Liveness report. `status` is `degraded` when the record store cannot be
/// reached; the LLM provider is reported but not probed.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    pub llm_provider: &'static str,
    pub llm_idiom_provider: &'static str,
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Language Tandem API",
        version: VERSION,
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match tandem_db::health_check(&*state.store).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: VERSION,
        store_healthy,
        llm_provider: state.config.llm.provider.as_str(),
        llm_idiom_provider: state.config.llm.idiom_provider().as_str(),
    })
}

/// `GET /` welcome banner and `GET /health`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
}
