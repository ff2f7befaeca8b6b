//! Integration tests for the runtime instance hierarchy: prescription,
//! lifecycle transitions, and nested instance collections.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Intervention instance lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_instance_starts_in_not_started(pool: PgPool) {
    let id = common::create_bci_instance(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bci-instances/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status_id"], 1);
    assert!(json["entered_at"].is_null());
    assert!(json["exited_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn start_stamps_entered_at_and_bumps_version(pool: PgPool) {
    let id = common::create_bci_instance(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/bci-instances/{id}/start")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status_id"], 2);
    assert!(json["entered_at"].is_string());
    assert!(json["exited_at"].is_null());
    assert_eq!(json["version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn finish_requires_in_progress(pool: PgPool) {
    let id = common::create_bci_instance(&pool).await;

    // Finishing a NotStarted instance is rejected with 409.
    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/bci-instances/{id}/finish")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // After starting, finish succeeds and stamps exited_at.
    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/bci-instances/{id}/start")).await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/bci-instances/{id}/finish")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 3);
    assert!(json["exited_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn abandon_allowed_from_not_started_and_in_progress(pool: PgPool) {
    // From NotStarted.
    let id = common::create_bci_instance(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/bci-instances/{id}/abandon")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status_id"], 4);

    // Terminal states reject further transitions.
    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/bci-instances/{id}/start")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn transition_on_missing_instance_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/bci-instances/999999/start").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Nested instance hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn phase_instance_nesting_roundtrip(pool: PgPool) {
    let bci_id = common::create_bci_instance(&pool).await;

    // The template phase the runtime row points at.
    let intervention_id = common::create_intervention(&pool, "Template").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "Phase A", "sequence_index": 1}),
    )
    .await;
    let phase_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/bci-instances/{bci_id}/phase-instances"),
        serde_json::json!({"phase_id": phase_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let phase_instance = body_json(response).await;
    assert_eq!(phase_instance["bci_instance_id"], bci_id);
    assert_eq!(phase_instance["status_id"], 1);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/bci-instances/{bci_id}/phase-instances")).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_instance_under_phase_instance(pool: PgPool) {
    let bci_id = common::create_bci_instance(&pool).await;
    let intervention_id = common::create_intervention(&pool, "Template").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "Phase A", "sequence_index": 1}),
    )
    .await;
    let phase_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phases/{phase_id}/modules"),
        serde_json::json!({"name": "Module A", "sequence_index": 1}),
    )
    .await;
    let module_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/bci-instances/{bci_id}/phase-instances"),
        serde_json::json!({"phase_id": phase_id}),
    )
    .await;
    let phase_instance_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phase-instances/{phase_instance_id}/module-instances"),
        serde_json::json!({"module_id": module_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let module_instance = body_json(response).await;
    assert_eq!(module_instance["phase_instance_id"], phase_instance_id);
    assert!(module_instance["block_instance_id"].is_null());

    // Module instances carry the same lifecycle.
    let mi_id = module_instance["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/module-instances/{mi_id}/start")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status_id"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_instance_rejects_block_instance_from_another_phase_instance(pool: PgPool) {
    let bci_id = common::create_bci_instance(&pool).await;
    let intervention_id = common::create_intervention(&pool, "Template").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "Phase A", "sequence_index": 1}),
    )
    .await;
    let phase_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phases/{phase_id}/blocks"),
        serde_json::json!({"name": "Block A", "sequence_index": 1}),
    )
    .await;
    let block_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phases/{phase_id}/modules"),
        serde_json::json!({"name": "Module A", "sequence_index": 1}),
    )
    .await;
    let module_id = body_json(response).await["id"].as_i64().unwrap();

    // Two runtime phase instances over the same template phase.
    let mut phase_instance_ids = Vec::new();
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/bci-instances/{bci_id}/phase-instances"),
            serde_json::json!({"phase_id": phase_id}),
        )
        .await;
        phase_instance_ids.push(body_json(response).await["id"].as_i64().unwrap());
    }
    let (first, second) = (phase_instance_ids[0], phase_instance_ids[1]);

    // The block instance lives under the first phase instance.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phase-instances/{first}/block-instances"),
        serde_json::json!({"block_id": block_id}),
    )
    .await;
    let block_instance_id = body_json(response).await["id"].as_i64().unwrap();

    // Creating a module instance under the second phase instance with
    // that block instance is rejected.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phase-instances/{second}/module-instances"),
        serde_json::json!({"module_id": module_id, "block_instance_id": block_instance_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // An unknown block instance is rejected the same way.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/phase-instances/{first}/module-instances"),
        serde_json::json!({"module_id": module_id, "block_instance_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Under the owning phase instance it succeeds.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/phase-instances/{first}/module-instances"),
        serde_json::json!({"module_id": module_id, "block_instance_id": block_instance_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["block_instance_id"], block_instance_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_bci_instance_cascades_to_children(pool: PgPool) {
    let bci_id = common::create_bci_instance(&pool).await;
    let intervention_id = common::create_intervention(&pool, "Template").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/interventions/{intervention_id}/phases"),
        serde_json::json!({"name": "P", "sequence_index": 1}),
    )
    .await;
    let phase_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/bci-instances/{bci_id}/phase-instances"),
        serde_json::json!({"phase_id": phase_id}),
    )
    .await;
    let phase_instance_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/bci-instances/{bci_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/phase-instances/{phase_instance_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Assessment instances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assessment_run_records_score_on_finish(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessments",
        serde_json::json!({"name": "PHQ-9", "max_score": 27.0}),
    )
    .await;
    let assessment_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessment-instances",
        serde_json::json!({"assessment_id": assessment_id, "patient_id": patient_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let run = body_json(response).await;
    let run_id = run["id"].as_i64().unwrap();
    assert!(run["score"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/assessment-instances/{run_id}/start")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/assessment-instances/{run_id}/finish"),
        serde_json::json!({"score": 12.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 3);
    assert_eq!(json["score"], 12.5);

    // Finishing twice is a conflict.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/assessment-instances/{run_id}/finish"),
        serde_json::json!({"score": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assessment_finish_rejects_score_above_maximum(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessments",
        serde_json::json!({"name": "PHQ-9", "max_score": 27.0}),
    )
    .await;
    let assessment_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessment-instances",
        serde_json::json!({"assessment_id": assessment_id, "patient_id": patient_id}),
    )
    .await;
    let run_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/assessment-instances/{run_id}/start")).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/assessment-instances/{run_id}/finish"),
        serde_json::json!({"score": 99.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assessment_finish_without_body_keeps_score_null(pool: PgPool) {
    let patient_id = common::create_patient(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessments",
        serde_json::json!({"name": "GAD-7"}),
    )
    .await;
    let assessment_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/assessment-instances",
        serde_json::json!({"assessment_id": assessment_id, "patient_id": patient_id}),
    )
    .await;
    let run_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/assessment-instances/{run_id}/start")).await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/assessment-instances/{run_id}/finish")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status_id"], 3);
    assert!(json["score"].is_null());
}
