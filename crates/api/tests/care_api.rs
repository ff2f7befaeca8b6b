//! Integration tests for the care coordination workflows: referrals,
//! goal settings, and behavior performance measurements.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json};
use sqlx::PgPool;

async fn create_referral(pool: &PgPool, patient_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/referrals",
        serde_json::json!({"patient_id": patient_id, "reason": "Specialist consult"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Referral workflow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn referral_starts_pending(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;
    let id = create_referral(&pool, patient_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/referrals/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 1);
    assert!(json["resolved_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accept_then_complete_stamps_resolved_at_once(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;
    let id = create_referral(&pool, patient_id).await;

    // Accept keeps the referral open, no resolution stamp yet.
    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/referrals/{id}/accept")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 2);
    assert!(json["resolved_at"].is_null());

    // Complete resolves it.
    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/referrals/{id}/complete")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 4);
    assert!(json["resolved_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn decline_resolves_immediately(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;
    let id = create_referral(&pool, patient_id).await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/referrals/{id}/decline")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 3);
    assert!(json["resolved_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn complete_requires_accepted(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;
    let id = create_referral(&pool, patient_id).await;

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/referrals/{id}/complete")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // Declined referrals cannot be accepted afterwards.
    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/referrals/{id}/decline")).await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/referrals/{id}/accept")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn referral_list_filters_by_patient_and_status(pool: PgPool) {
    let patient_a = common::create_patient(&pool).await;
    let patient_b = common::create_patient(&pool).await;
    let referral_a = create_referral(&pool, patient_a).await;
    create_referral(&pool, patient_b).await;

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/referrals/{referral_a}/accept")).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/referrals?patient_id={patient_a}")).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/referrals?status_id=2").await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], referral_a);
}

// ---------------------------------------------------------------------------
// Goal workflow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn goal_achieve_resolves_goal(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/goal-settings",
        serde_json::json!({
            "patient_id": patient_id,
            "description": "Walk 8000 steps daily",
            "target_value": 8000.0,
            "unit": "steps",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let goal = body_json(response).await;
    let goal_id = goal["id"].as_i64().unwrap();
    assert_eq!(goal["status_id"], 1);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/goal-settings/{goal_id}/achieve")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 2);
    assert!(json["resolved_at"].is_string());

    // A resolved goal cannot be abandoned.
    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/goal-settings/{goal_id}/abandon")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn goal_with_blank_description_returns_400(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/goal-settings",
        serde_json::json!({"patient_id": patient_id, "description": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Behavior performances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn behavior_performance_time_window_filter(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    for (value, measured_at) in [
        (10.0, "2026-01-05T10:00:00Z"),
        (20.0, "2026-02-05T10:00:00Z"),
        (30.0, "2026-03-05T10:00:00Z"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/behavior-performances",
            serde_json::json!({
                "patient_id": patient_id,
                "metric": "minutes_active",
                "value": value,
                "measured_at": measured_at,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!(
            "/api/v1/behavior-performances?patient_id={patient_id}\
             &from=2026-01-20T00:00:00Z&to=2026-03-01T00:00:00Z"
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["value"], 20.0);
}
