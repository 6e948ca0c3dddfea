#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tandem_api::config::{LlmConfig, LlmProvider, ServerConfig};
use tandem_api::llm::LlmClients;
use tandem_api::router::build_app_router;
use tandem_api::state::AppState;
use tandem_core::clock::FixedClock;
use tandem_db::{MemoryStore, StoreHandle};
use tandem_llm::ScriptedLlm;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: "unused".to_string(),
        json_logs: false,
        llm: LlmConfig {
            provider: LlmProvider::OpenAi,
            idiom_provider: None,
            openai_api_key: String::new(),
            openai_model: "test-model".to_string(),
            openai_base_url: None,
            gemini_api_key: String::new(),
            gemini_model: "test-model".to_string(),
            timeout: std::time::Duration::from_secs(5),
            max_attempts: 1,
        },
    }
}

/// Router over an in-memory store, a scripted LLM and a pinned clock.
///
/// The collaborators are exposed so tests can queue replies, move the
/// clock and inspect stored records.
pub struct TestApp {
    pub router: Router,
    pub store: StoreHandle,
    pub llm: Arc<ScriptedLlm>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// A fresh router sharing this app's state; `oneshot` consumes it.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
}

/// Build the full application router with all middleware layers.
pub fn build_test_app() -> TestApp {
    build_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Same as [`build_test_app`] but over a caller-provided store.
pub fn build_test_app_with_store(store: StoreHandle) -> TestApp {
    let llm = Arc::new(ScriptedLlm::new());
    let clock = Arc::new(FixedClock::at_date(day(1)));
    let config = test_config();

    let state = AppState::new(
        store.clone(),
        LlmClients::single(llm.clone()),
        clock.clone(),
        config.clone(),
    );
    let router = build_app_router(state, &config);

    TestApp {
        router,
        store,
        llm,
        clock,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn user_json(id: &str, native: &str, target: &str, interests: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("User {id}"),
        "native_language": native,
        "target_language": target,
        "proficiency_level": "beginner",
        "interests": interests,
    })
}

pub fn flashcard_json(id: &str, language: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Colores",
        "description": "Basic colours",
        "type": "flashcard",
        "language": language,
        "difficulty": "beginner",
        "content": {
            "items": [
                {"term": "rojo", "definition": "red"},
                {"term": "azul", "definition": "blue"}
            ]
        }
    })
}

pub fn quiz_json(id: &str, language: &str, difficulty: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Saludos",
        "description": "Greetings quiz",
        "type": "quiz",
        "language": language,
        "difficulty": difficulty,
        "content": {
            "questions": [
                {"question": "Hola means?", "options": ["Hello", "Bye"], "correct_answer": 0}
            ]
        }
    })
}
