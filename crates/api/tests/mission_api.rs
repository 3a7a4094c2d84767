//! HTTP-level tests for the `/missions` catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/missions",
        serde_json::json!({
            "title": "Slay Rat",
            "description": "Clear the cellar",
            "xp_reward": 50,
            "difficulty": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Slay Rat");
    assert_eq!(json["description"], "Clear the cellar");
    assert_eq!(json["xp_reward"], 50);
    assert_eq!(json["difficulty"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_description_defaults_to_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/missions",
        serde_json::json!({"title": "Patrol", "xp_reward": 5, "difficulty": 2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["description"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_rejects_bad_difficulty_and_reward(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/missions",
        serde_json::json!({"title": "Broken", "xp_reward": -1, "difficulty": 6}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("difficulty:"), "got: {message}");
    assert!(message.contains("xp_reward:"), "got: {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_mission_by_id(pool: PgPool) {
    let id = common::create_mission(&pool, "Fetch Water", 10).await;

    let response = get(common::build_test_app(pool), &format!("/api/v1/missions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Fetch Water");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_mission_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/missions/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Mission with id 424242 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_missions_clamps_limit(pool: PgPool) {
    for i in 0..3 {
        common::create_mission(&pool, &format!("M{i}"), 1).await;
    }

    let response = get(common::build_test_app(pool.clone()), "/api/v1/missions?limit=0").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool), "/api/v1/missions?limit=500").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}
