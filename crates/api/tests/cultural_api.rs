mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_empty};
use tandem_llm::LlmError;

const NOTE_REPLY: &str = r#"{"title": "La sobremesa", "content": "Lingering at the table after a meal.", "related_vocabulary": ["sobremesa", "charlar"]}"#;
const IDIOM_REPLY: &str = r#"{"original_phrase": "Estar en las nubes", "literal_translation": "To be in the clouds", "meaning": "To daydream", "example_usage": "Juan siempre está en las nubes.", "equivalent_idioms": [{"language": "english", "phrase": "Head in the clouds"}]}"#;
const FUN_FACT_REPLY: &str = "```json\n{\"content\": \"Spanish is an official language in 20 countries.\"}\n```";

#[tokio::test]
async fn generate_stores_one_of_each() {
    let app = build_test_app();
    app.llm.push_reply(NOTE_REPLY);
    app.llm.push_reply(IDIOM_REPLY);
    app.llm.push_reply(FUN_FACT_REPLY);

    let response = post_empty(app.app(), "/api/v1/cultural/generate/spanish").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["note"]["title"], "La sobremesa");
    assert_eq!(data["idiom"]["meaning"], "To daydream");
    assert_eq!(data["fun_fact"]["title"], "Fun Fact about Spanish");
    assert!(data["note"]["id"].as_str().unwrap().starts_with("note-"));

    let notes = body_json(get(app.app(), "/api/v1/cultural/notes/spanish").await).await;
    assert!(notes["data"].as_array().unwrap().is_empty());
    let idioms = body_json(get(app.app(), "/api/v1/cultural/idioms/spanish").await).await;
    assert_eq!(idioms["data"][0]["original_phrase"], "Estar en las nubes");
    let facts = body_json(get(app.app(), "/api/v1/cultural/fun-facts/spanish").await).await;
    assert_eq!(facts["data"].as_array().unwrap().len(), 1);

    let other = body_json(get(app.app(), "/api/v1/cultural/notes/french").await).await;
    assert!(other["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn detail_and_delete_by_id() {
    let app = build_test_app();
    app.llm.push_reply(NOTE_REPLY);
    app.llm.push_reply(IDIOM_REPLY);
    app.llm.push_reply(FUN_FACT_REPLY);

    let json = body_json(post_empty(app.app(), "/api/v1/cultural/generate/spanish").await).await;
    let note_id = json["data"]["note"]["id"].as_str().unwrap().to_string();
    let idiom_id = json["data"]["idiom"]["id"].as_str().unwrap().to_string();
    let fact_id = json["data"]["fun_fact"]["id"].as_str().unwrap().to_string();

    for (kind, id) in [("notes", &note_id), ("idioms", &idiom_id), ("fun-facts", &fact_id)] {
        let uri = format!("/api/v1/cultural/{kind}/detail/{id}");

        let response = get(app.app(), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let response = delete(app.app(), &uri).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{uri}");

        let response = get(app.app(), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn missing_detail_is_404() {
    let app = build_test_app();
    let response = get(app.app(), "/api/v1/cultural/idioms/detail/idiom-none").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unsupported_language_is_rejected() {
    let app = build_test_app();

    let response = get(app.app(), "/api/v1/cultural/notes/latin").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_empty(app.app(), "/api/v1/cultural/generate/latin").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.llm.call_count(), 0);
}

#[tokio::test]
async fn failed_idiom_stores_nothing() {
    let app = build_test_app();
    app.llm.push_reply(NOTE_REPLY);
    app.llm.push_error(LlmError::Timeout(std::time::Duration::from_secs(60)));

    let response = post_empty(app.app(), "/api/v1/cultural/generate/spanish").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let notes = body_json(get(app.app(), "/api/v1/cultural/notes/spanish").await).await;
    assert!(notes["data"].as_array().unwrap().is_empty());
    let idioms = body_json(get(app.app(), "/api/v1/cultural/idioms/spanish").await).await;
    assert!(idioms["data"].as_array().unwrap().is_empty());
    assert_eq!(app.llm.call_count(), 2);
}
