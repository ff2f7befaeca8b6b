//! Handlers for `/bci-instances`: prescription CRUD, lifecycle
//! transitions, and the nested phase-instance collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_db::models::instance::{
    BciInstance, BciInstanceListQuery, CreateBciInstance, CreatePhaseInstance, PhaseInstance,
    UpdateBciInstance,
};
use bci_db::repositories::{BciInstanceRepo, PhaseInstanceRepo};
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// POST /api/v1/bci-instances
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBciInstance>,
) -> AppResult<(StatusCode, Json<BciInstance>)> {
    let instance = BciInstanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// GET /api/v1/bci-instances?patient_id=&status_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BciInstanceListQuery>,
) -> AppResult<Json<Vec<BciInstance>>> {
    let instances = BciInstanceRepo::list(&state.pool, &filter).await?;
    Ok(Json(instances))
}

/// GET /api/v1/bci-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BciInstance>> {
    let instance = require_bci_instance(&state, id).await?;
    Ok(Json(instance))
}

/// PUT /api/v1/bci-instances/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBciInstance>,
) -> AppResult<Json<BciInstance>> {
    let instance = BciInstanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BciInstance",
            id,
        }))?;
    Ok(Json(instance))
}

/// DELETE /api/v1/bci-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BciInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BciInstance",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/bci-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BciInstance>> {
    transition(&state, id, lifecycle::IN_PROGRESS).await
}

/// POST /api/v1/bci-instances/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BciInstance>> {
    transition(&state, id, lifecycle::FINISHED).await
}

/// POST /api/v1/bci-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BciInstance>> {
    transition(&state, id, lifecycle::ABANDONED).await
}

async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<BciInstance>> {
    let current = require_bci_instance(state, id).await?;

    let (result, name) = match target {
        lifecycle::IN_PROGRESS => (
            BciInstanceRepo::start(&state.pool, id).await?,
            EventName::Started(InstanceKind::Bci),
        ),
        lifecycle::FINISHED => (
            BciInstanceRepo::finish(&state.pool, id).await?,
            EventName::Finished(InstanceKind::Bci),
        ),
        _ => (
            BciInstanceRepo::abandon(&state.pool, id).await?,
            EventName::Abandoned(InstanceKind::Bci),
        ),
    };

    let updated = result.ok_or_else(|| lifecycle_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "patient_id": updated.patient_id,
                "intervention_id": updated.intervention_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Nested phase instances
// ---------------------------------------------------------------------------

/// POST /api/v1/bci-instances/{id}/phase-instances
pub async fn create_phase_instance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePhaseInstance>,
) -> AppResult<(StatusCode, Json<PhaseInstance>)> {
    require_bci_instance(&state, id).await?;
    let phase_instance = PhaseInstanceRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(phase_instance)))
}

/// GET /api/v1/bci-instances/{id}/phase-instances
pub async fn list_phase_instances(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<PhaseInstance>>> {
    require_bci_instance(&state, id).await?;
    let phase_instances = PhaseInstanceRepo::list_by_bci_instance(&state.pool, id).await?;
    Ok(Json(phase_instances))
}

async fn require_bci_instance(state: &AppState, id: DbId) -> Result<BciInstance, AppError> {
    BciInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BciInstance",
            id,
        }))
}
