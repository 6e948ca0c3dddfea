mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, flashcard_json, get, post_json, put_json, quiz_json,
    user_json, TestApp,
};
use tandem_llm::LlmError;

const FLASHCARD_REPLY: &str =
    r#"{"title": "Viajes", "items": [{"term": "el tren", "definition": "train"}]}"#;
const QUIZ_REPLY: &str = "```json\n{\"questions\": [{\"question\": \"Pan?\", \"options\": [\"bread\", \"water\"], \"correct_answer\": 0}]}\n```";
const CONVERSATION_REPLY: &str =
    r#"{"prompts": [{"prompt": "¿Qué música escuchas?"}]}"#;

async fn seed(app: &TestApp, body: serde_json::Value) {
    let response = post_json(app.app(), "/api/v1/exercises", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn seed_pair(app: &TestApp) {
    for body in [
        user_json("user-ana", "english", "spanish", &["music", "travel"]),
        user_json("user-luis", "spanish", "english", &["music", "sports"]),
    ] {
        let response = post_json(app.app(), "/api/v1/users", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_fetch_exercise() {
    let app = build_test_app();
    seed(&app, flashcard_json("ex-colors", "spanish")).await;

    let response = get(app.app(), "/api/v1/exercises/ex-colors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "flashcard");
    assert_eq!(json["data"]["status"], "new");
    assert_eq!(json["data"]["content"]["items"][1]["term"], "azul");
}

#[tokio::test]
async fn create_without_id_assigns_one() {
    let app = build_test_app();
    let mut body = flashcard_json("", "french");
    body.as_object_mut().unwrap().remove("id");

    let response = post_json(app.app(), "/api/v1/exercises", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].as_str().unwrap().starts_with("ex-"));
}

#[tokio::test]
async fn create_rejects_out_of_range_answer() {
    let app = build_test_app();
    let mut body = quiz_json("ex-bad", "spanish", "beginner");
    body["content"]["questions"][0]["correct_answer"] = 5.into();

    let response = post_json(app.app(), "/api/v1/exercises", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_rejects_content_of_wrong_shape() {
    let app = build_test_app();
    let mut body = flashcard_json("ex-bad", "spanish");
    body["content"] = serde_json::json!({ "items": "not a list" });

    let response = post_json(app.app(), "/api/v1/exercises", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_applies_filters() {
    let app = build_test_app();
    seed(&app, flashcard_json("ex-1", "spanish")).await;
    seed(&app, quiz_json("ex-2", "spanish", "beginner")).await;
    seed(&app, quiz_json("ex-3", "french", "advanced")).await;

    let json = body_json(get(app.app(), "/api/v1/exercises").await).await;
    assert_eq!(ids(&json), vec!["ex-1", "ex-2", "ex-3"]);

    let json = body_json(get(app.app(), "/api/v1/exercises?language=spanish").await).await;
    assert_eq!(ids(&json), vec!["ex-1", "ex-2"]);

    let json = body_json(get(app.app(), "/api/v1/exercises?type=quiz&language=french").await).await;
    assert_eq!(ids(&json), vec!["ex-3"]);

    let json = body_json(get(app.app(), "/api/v1/exercises?status=completed").await).await;
    assert!(ids(&json).is_empty());
}

#[tokio::test]
async fn list_rejects_unknown_filter_value() {
    let app = build_test_app();
    let response = get(app.app(), "/api/v1/exercises?type=dictation").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_status_persists() {
    let app = build_test_app();
    seed(&app, flashcard_json("ex-1", "spanish")).await;

    let response = put_json(
        app.app(),
        "/api/v1/exercises/ex-1/status",
        serde_json::json!({ "status": "in_progress" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "in_progress");

    let json = body_json(get(app.app(), "/api/v1/exercises?status=in_progress").await).await;
    assert_eq!(ids(&json), vec!["ex-1"]);
}

#[tokio::test]
async fn update_status_of_missing_exercise_is_404() {
    let app = build_test_app();
    let response = put_json(
        app.app(),
        "/api/v1/exercises/ex-none/status",
        serde_json::json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_status_is_bad_request() {
    let app = build_test_app();
    seed(&app, flashcard_json("ex-1", "spanish")).await;

    let response = put_json(
        app.app(),
        "/api/v1/exercises/ex-1/status",
        serde_json::json!({ "status": "finished" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_exercise() {
    let app = build_test_app();
    seed(&app, flashcard_json("ex-1", "spanish")).await;

    let response = delete(app.app(), "/api/v1/exercises/ex-1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.app(), "/api/v1/exercises/ex-1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Exercise with id ex-1 not found");
}

#[tokio::test]
async fn user_exercises_follow_target_language() {
    let app = build_test_app();
    seed_pair(&app).await;
    seed(&app, flashcard_json("ex-es", "spanish")).await;
    seed(&app, flashcard_json("ex-en", "english")).await;

    let json = body_json(get(app.app(), "/api/v1/users/user-ana/exercises").await).await;
    assert_eq!(ids(&json), vec!["ex-es"]);

    let json = body_json(get(app.app(), "/api/v1/users/user-luis/exercises").await).await;
    assert_eq!(ids(&json), vec!["ex-en"]);

    let response = get(app.app(), "/api/v1/users/user-ghost/exercises").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_default_batch() {
    let app = build_test_app();
    seed_pair(&app).await;
    app.llm.push_reply(FLASHCARD_REPLY);
    app.llm.push_reply(QUIZ_REPLY);
    app.llm.push_reply(CONVERSATION_REPLY);

    let response = post_json(
        app.app(),
        "/api/v1/exercises/generate",
        serde_json::json!({ "user_id": "user-ana", "partner_id": "user-luis" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);

    let types: Vec<&str> = data.iter().map(|e| e["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["flashcard", "quiz", "conversation"]);
    assert!(data.iter().all(|e| e["language"] == "spanish"));
    assert!(data.iter().all(|e| e["difficulty"] == "beginner"));
    assert_eq!(data[0]["title"], "Viajes");
    assert_eq!(data[1]["title"], "Spanish Quiz: food");
    assert_eq!(data[2]["title"], "Conversation Practice: music");

    let stored = body_json(get(app.app(), "/api/v1/exercises").await).await;
    assert_eq!(stored["data"].as_array().unwrap().len(), 3);
    assert_eq!(app.llm.call_count(), 3);
}

#[tokio::test]
async fn generate_single_exercise() {
    let app = build_test_app();
    seed_pair(&app).await;
    app.llm.push_reply(FLASHCARD_REPLY);

    let response = post_json(
        app.app(),
        "/api/v1/exercises/generate",
        serde_json::json!({ "user_id": "user-ana", "partner_id": "user-luis", "count": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn generate_rejects_count_out_of_range() {
    let app = build_test_app();
    seed_pair(&app).await;

    for count in [0, 11] {
        let response = post_json(
            app.app(),
            "/api/v1/exercises/generate",
            serde_json::json!({ "user_id": "user-ana", "partner_id": "user-luis", "count": count }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.llm.call_count(), 0);
}

#[tokio::test]
async fn generate_for_unknown_partner_is_404() {
    let app = build_test_app();
    seed_pair(&app).await;

    let response = post_json(
        app.app(),
        "/api/v1/exercises/generate",
        serde_json::json!({ "user_id": "user-ana", "partner_id": "user-ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.llm.call_count(), 0);
}

#[tokio::test]
async fn generate_without_llm_is_503() {
    let app = build_test_app();
    seed_pair(&app).await;
    app.llm.push_error(LlmError::MissingApiKey { provider: "openai" });

    let response = post_json(
        app.app(),
        "/api/v1/exercises/generate",
        serde_json::json!({ "user_id": "user-ana", "partner_id": "user-luis" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn malformed_reply_is_502_and_keeps_earlier_items() {
    let app = build_test_app();
    seed_pair(&app).await;
    app.llm.push_reply(FLASHCARD_REPLY);
    app.llm.push_reply("Sorry, I can't help with that.");

    let response = post_json(
        app.app(),
        "/api/v1/exercises/generate",
        serde_json::json!({ "user_id": "user-ana", "partner_id": "user-luis" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_MALFORMED");
    assert_eq!(json["error"], "The language model returned an unusable quiz");

    let stored = body_json(get(app.app(), "/api/v1/exercises").await).await;
    let data = stored["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["type"], "flashcard");
}
