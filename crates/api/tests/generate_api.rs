//! Integration tests for prompt generation, suggestions, and optimization.
//!
//! The test app carries no Gemini credentials, so every route exercises
//! its deterministic built-in path.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// POST /api/v1/prompts/generate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_uses_composer_without_credentials(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let body = json!({
        "task": "Write code to sort a list step by step",
        "category": "coding",
        "format": "step-by-step guide",
    });
    let response = post_json(app, "/api/v1/prompts/generate", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["aiPowered"], false);
    assert_eq!(json["message"], "Generated using built-in optimization engine");

    let generated = &json["generatedPrompt"];
    assert_eq!(generated["source"], "fallback");
    assert_eq!(generated["analysis"]["taskType"], "coding");
    assert!(generated["prompt"]
        .as_str()
        .unwrap()
        .contains("**Primary Objective:**"));
    assert!(generated["confidence"].as_u64().unwrap() <= 95);
    assert!(!generated["optimizations"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generate_rejects_bad_input(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let body = json!({
        "task": "",
        "tone": "grumpy",
    });
    let response = post_json(app, "/api/v1/prompts/generate", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");

    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"task"));
    assert!(fields.contains(&"tone"));
}

// ---------------------------------------------------------------------------
// GET /api/v1/prompts/suggestions/:category
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn suggestions_serve_builtin_catalogue(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/prompts/suggestions/coding", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["category"], "coding");
    assert_eq!(json["aiPowered"], false);
    assert_eq!(json["suggestions"][0]["title"], "Code Review Assistant");
    assert!(json["suggestions"][0]["useCase"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suggestions_reject_unknown_category(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/prompts/suggestions/cooking", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// POST /api/v1/optimize
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn optimize_applies_builtin_rules(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let body = json!({"prompt": "Tell me about databases"});
    let response = post_json(app, "/api/v1/optimize", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["aiPowered"], false);
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["originalPrompt"], "Tell me about databases");

    // A role-less prompt gets the expert prefix prepended.
    assert!(json["optimizedPrompt"]
        .as_str()
        .unwrap()
        .starts_with("You are an expert assistant"));

    // Reported optimized quality is the capped bonus figure.
    let original = json["qualityScore"]["original"].as_u64().unwrap();
    let optimized = json["qualityScore"]["optimized"].as_u64().unwrap();
    assert_eq!(optimized, (original + 15).min(95));

    assert_eq!(
        json["improvements"].as_array().unwrap().len(),
        json["suggestions"].as_array().unwrap().len()
    );
    assert!(json["metrics"]["optimizedLength"].as_u64().unwrap() > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn optimize_rejects_empty_prompt(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/optimize", &token, json!({"prompt": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "prompt");
}

// ---------------------------------------------------------------------------
// GET /api/v1/optimize/tips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn tips_catalogue_is_served(pool: PgPool) {
    let (_, token) = seed_user(&pool, "alice@example.com").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/optimize/tips", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let tips = json["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 4);
    assert_eq!(tips[0]["category"], "Clarity");
    assert_eq!(tips[0]["tips"].as_array().unwrap().len(), 3);
}
