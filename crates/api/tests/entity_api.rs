//! HTTP-level integration tests for the people and catalog endpoints.
//!
//! Uses tower::ServiceExt to send requests directly to the router without
//! an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Actor CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_actor_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/actors",
        serde_json::json!({"first_name": "Ada", "last_name": "Lovelace"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Ada");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_actor_with_blank_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/actors",
        serde_json::json!({"first_name": "", "last_name": "Lovelace"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_actor_applies_partial_changes(pool: PgPool) {
    let id = common::create_actor(&pool, "Grace", "Hopper").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/actors/{id}"),
        serde_json::json!({"phone": "+31612345678"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Grace");
    assert_eq!(json["phone"], "+31612345678");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/actors/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Patient enrollment and medical files
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_patient_generates_pseudonym(pool: PgPool) {
    let actor_id = common::create_actor(&pool, "Jan", "Jansen").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/patients",
        serde_json::json!({"actor_id": actor_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["actor_id"], actor_id);
    // Pseudonym is server-generated, a UUID string.
    assert_eq!(json["pseudonym"].as_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_patient_with_unknown_actor_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/patients",
        serde_json::json!({"actor_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FOREIGN_KEY_VIOLATION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn medical_files_are_patient_scoped(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/patients/{patient_id}/medical-files"),
        serde_json::json!({"title": "Intake notes", "notes": "First session"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let file = body_json(response).await;
    let file_id = file["id"].as_i64().unwrap();

    // Fetching the file through another patient's scope must 404.
    let other_patient = common::create_patient(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/patients/{other_patient}/medical-files/{file_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Through the owning patient it resolves.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/patients/{patient_id}/medical-files/{file_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Intake notes");
}

// ---------------------------------------------------------------------------
// Intervention template hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn intervention_phase_block_module_nesting(pool: PgPool) {
    let intervention_id = common::create_intervention(&pool, "CBT Basics").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "Orientation", "sequence_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let phase = body_json(response).await;
    let phase_id = phase["id"].as_i64().unwrap();
    assert_eq!(phase["intervention_id"], intervention_id);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phases/{phase_id}/blocks"),
        serde_json::json!({"name": "Week 1", "sequence_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phases/{phase_id}/modules"),
        serde_json::json!({"name": "Psychoeducation", "sequence_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/phases/{phase_id}/modules")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let modules = body_json(response).await;
    assert_eq!(modules.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn nested_create_under_missing_parent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/interventions/999999/phases",
        serde_json::json!({"name": "Orphan", "sequence_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_intervention_cascades(pool: PgPool) {
    let intervention_id = common::create_intervention(&pool, "To Remove").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "P", "sequence_index": 1}),
    )
    .await;
    let phase_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/interventions/{intervention_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/phases/{phase_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Activity role links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_role_links_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/activities",
        serde_json::json!({"name": "Diary exercise"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let activity_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/roles",
        serde_json::json!({"name": "Self-monitoring"}),
    )
    .await;
    let role_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/activities/{activity_id}/develops"),
        serde_json::json!({"role_id": role_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/activities/{activity_id}/develops")).await;
    let roles = body_json(response).await;
    assert_eq!(roles.as_array().unwrap().len(), 1);
    assert_eq!(roles[0]["id"], role_id);

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/activities/{activity_id}/develops/{role_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/activities/{activity_id}/develops")).await;
    let roles = body_json(response).await;
    assert!(roles.as_array().unwrap().is_empty());
}
