mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

#[tokio::test]
async fn welcome_banner_at_root() {
    let app = build_test_app();
    let response = get(app.app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Language Tandem API");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_reports_store_status() {
    let app = build_test_app();
    let response = get(app.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
    assert_eq!(json["llm_provider"], "openai");
    assert_eq!(json["llm_idiom_provider"], "openai");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_test_app();
    let response = get(app.app(), "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = build_test_app();
    let response = get(app.app(), "/api/v1/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for /api/v1/nonexistent");
}

#[tokio::test]
async fn achievement_catalog_lists_every_badge() {
    let app = build_test_app();
    let response = get(app.app(), "/api/v1/progress/achievements").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["streak3", "streak7", "streak30", "firstex", "tenex", "fiftyex"]
    );
}
