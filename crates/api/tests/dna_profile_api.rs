//! HTTP-level integration tests for the DNA profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_profile(pool: &PgPool, user_id: &str, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/dna-profiles",
        json!({"user_id": user_id, "profile_name": name, "dna_sequence": "ACGT"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_defaults_is_active(pool: PgPool) {
    let profile = create_profile(&pool, "u1", "P1").await;

    assert!(profile["id"].is_number());
    assert_eq!(profile["user_id"], "u1");
    assert_eq!(profile["is_active"], true);
    assert!(profile["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile_by_id(pool: PgPool) {
    let created = create_profile(&pool, "u1", "P1").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/dna-profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dna-profiles/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List by user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_profiles_scoped_to_user(pool: PgPool) {
    create_profile(&pool, "u1", "Mine").await;
    create_profile(&pool, "u2", "Theirs").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/u1/dna-profiles?offset=0&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let profiles = json["data"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert!(profiles.iter().all(|p| p["user_id"] == "u1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_profiles_for_unknown_user_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/nobody/dna-profiles").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_replaces_fields(pool: PgPool) {
    let created = create_profile(&pool, "u1", "P1").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/dna-profiles/{id}"),
        json!({"profile_name": "P2", "dna_sequence": "TTTT", "is_active": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let updated = &json["data"];
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["user_id"], "u1");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["profile_name"], "P2");
    assert_eq!(updated["dna_sequence"], "TTTT");
    assert_eq!(updated["is_active"], false);
    assert!(updated["updated_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_cannot_change_owner(pool: PgPool) {
    let created = create_profile(&pool, "u1", "P1").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/dna-profiles/{id}"),
        json!({
            "user_id": "intruder",
            "profile_name": "P1",
            "dna_sequence": "ACGT",
            "is_active": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["user_id"], "u1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_profile_returns_404_without_creating(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/dna-profiles/777",
        json!({"profile_name": "Ghost", "dna_sequence": "ACGT", "is_active": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dna-profiles/777").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_requires_every_field(pool: PgPool) {
    let created = create_profile(&pool, "u1", "P1").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/dna-profiles/{id}"),
        json!({"profile_name": "Only the name"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/dna-profiles/{id}")).await).await;
    assert_eq!(json["data"]["profile_name"], "P1");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_get_and_second_delete_return_404(pool: PgPool) {
    let created = create_profile(&pool, "u1", "P1").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/dna-profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/dna-profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/dna-profiles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/dna-profiles",
        json!({"user_id": "u1", "profile_name": "P1", "dna_sequence": "ACGT", "is_active": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["id"], 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/users/u1/dna-profiles?offset=0&limit=10").await).await;
    assert_eq!(json["data"], json!([created]));

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/dna-profiles/1",
        json!({"profile_name": "P2", "dna_sequence": "ACGT", "is_active": false}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["profile_name"], "P2");
    assert_eq!(json["data"]["is_active"], false);

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, "/api/v1/dna-profiles/1").await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, "/api/v1/dna-profiles/1").await.status(),
        StatusCode::NOT_FOUND
    );
}
