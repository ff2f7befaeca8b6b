//! Handlers for `/phase-instances`: lifecycle transitions plus the
//! nested block-instance and module-instance collections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_db::models::instance::{
    BlockInstance, CreateBlockInstance, CreateModuleInstance, ModuleInstance, PhaseInstance,
};
use bci_db::repositories::{BlockInstanceRepo, ModuleInstanceRepo, PhaseInstanceRepo};
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// GET /api/v1/phase-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhaseInstance>> {
    let instance = require_phase_instance(&state, id).await?;
    Ok(Json(instance))
}

/// DELETE /api/v1/phase-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PhaseInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PhaseInstance",
            id,
        }))
    }
}

/// POST /api/v1/phase-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhaseInstance>> {
    transition(&state, id, lifecycle::IN_PROGRESS).await
}

/// POST /api/v1/phase-instances/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhaseInstance>> {
    transition(&state, id, lifecycle::FINISHED).await
}

/// POST /api/v1/phase-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhaseInstance>> {
    transition(&state, id, lifecycle::ABANDONED).await
}

async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<PhaseInstance>> {
    let current = require_phase_instance(state, id).await?;

    let (result, name) = match target {
        lifecycle::IN_PROGRESS => (
            PhaseInstanceRepo::start(&state.pool, id).await?,
            EventName::Started(InstanceKind::Phase),
        ),
        lifecycle::FINISHED => (
            PhaseInstanceRepo::finish(&state.pool, id).await?,
            EventName::Finished(InstanceKind::Phase),
        ),
        _ => (
            PhaseInstanceRepo::abandon(&state.pool, id).await?,
            EventName::Abandoned(InstanceKind::Phase),
        ),
    };

    let updated = result.ok_or_else(|| lifecycle_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "bci_instance_id": updated.bci_instance_id,
                "phase_id": updated.phase_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Nested block and module instances
// ---------------------------------------------------------------------------

/// POST /api/v1/phase-instances/{id}/block-instances
pub async fn create_block_instance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBlockInstance>,
) -> AppResult<(StatusCode, Json<BlockInstance>)> {
    require_phase_instance(&state, id).await?;
    let block_instance = BlockInstanceRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(block_instance)))
}

/// GET /api/v1/phase-instances/{id}/block-instances
pub async fn list_block_instances(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BlockInstance>>> {
    require_phase_instance(&state, id).await?;
    let block_instances = BlockInstanceRepo::list_by_phase_instance(&state.pool, id).await?;
    Ok(Json(block_instances))
}

/// POST /api/v1/phase-instances/{id}/module-instances
///
/// A referenced block instance must belong to the same phase instance
/// the module instance is being created under.
pub async fn create_module_instance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateModuleInstance>,
) -> AppResult<(StatusCode, Json<ModuleInstance>)> {
    require_phase_instance(&state, id).await?;

    if let Some(block_instance_id) = input.block_instance_id {
        match BlockInstanceRepo::find_by_id(&state.pool, block_instance_id).await? {
            Some(block) if block.phase_instance_id == id => {}
            Some(block) => {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "block instance {block_instance_id} belongs to phase instance {}, \
                     not {id}",
                    block.phase_instance_id
                ))));
            }
            None => {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "block instance {block_instance_id} does not exist"
                ))));
            }
        }
    }

    let module_instance = ModuleInstanceRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(module_instance)))
}

/// GET /api/v1/phase-instances/{id}/module-instances
pub async fn list_module_instances(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ModuleInstance>>> {
    require_phase_instance(&state, id).await?;
    let module_instances = ModuleInstanceRepo::list_by_phase_instance(&state.pool, id).await?;
    Ok(Json(module_instances))
}

async fn require_phase_instance(state: &AppState, id: DbId) -> Result<PhaseInstance, AppError> {
    PhaseInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PhaseInstance",
            id,
        }))
}
