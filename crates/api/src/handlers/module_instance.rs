//! Handlers for `/module-instances` and the nested activity-instance
//! collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_db::models::instance::{ActivityInstance, CreateActivityInstance, ModuleInstance};
use bci_db::repositories::{ActivityInstanceRepo, ModuleInstanceRepo};
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// GET /api/v1/module-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleInstance>> {
    let instance = require_module_instance(&state, id).await?;
    Ok(Json(instance))
}

/// DELETE /api/v1/module-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ModuleInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ModuleInstance",
            id,
        }))
    }
}

/// POST /api/v1/module-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleInstance>> {
    transition(&state, id, lifecycle::IN_PROGRESS).await
}

/// POST /api/v1/module-instances/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleInstance>> {
    transition(&state, id, lifecycle::FINISHED).await
}

/// POST /api/v1/module-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleInstance>> {
    transition(&state, id, lifecycle::ABANDONED).await
}

async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<ModuleInstance>> {
    let current = require_module_instance(state, id).await?;

    let (result, name) = match target {
        lifecycle::IN_PROGRESS => (
            ModuleInstanceRepo::start(&state.pool, id).await?,
            EventName::Started(InstanceKind::Module),
        ),
        lifecycle::FINISHED => (
            ModuleInstanceRepo::finish(&state.pool, id).await?,
            EventName::Finished(InstanceKind::Module),
        ),
        _ => (
            ModuleInstanceRepo::abandon(&state.pool, id).await?,
            EventName::Abandoned(InstanceKind::Module),
        ),
    };

    let updated = result.ok_or_else(|| lifecycle_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "phase_instance_id": updated.phase_instance_id,
                "module_id": updated.module_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Nested activity instances
// ---------------------------------------------------------------------------

/// POST /api/v1/module-instances/{id}/activity-instances
pub async fn create_activity_instance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateActivityInstance>,
) -> AppResult<(StatusCode, Json<ActivityInstance>)> {
    require_module_instance(&state, id).await?;
    let activity_instance = ActivityInstanceRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(activity_instance)))
}

/// GET /api/v1/module-instances/{id}/activity-instances
pub async fn list_activity_instances(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ActivityInstance>>> {
    require_module_instance(&state, id).await?;
    let activity_instances = ActivityInstanceRepo::list_by_module_instance(&state.pool, id).await?;
    Ok(Json(activity_instances))
}

async fn require_module_instance(state: &AppState, id: DbId) -> Result<ModuleInstance, AppError> {
    ModuleInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ModuleInstance",
            id,
        }))
}
