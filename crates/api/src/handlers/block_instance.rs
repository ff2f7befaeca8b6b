//! Handlers for `/block-instances`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_db::models::instance::BlockInstance;
use bci_db::repositories::BlockInstanceRepo;
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// GET /api/v1/block-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlockInstance>> {
    let instance = require_block_instance(&state, id).await?;
    Ok(Json(instance))
}

/// DELETE /api/v1/block-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BlockInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlockInstance",
            id,
        }))
    }
}

/// POST /api/v1/block-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlockInstance>> {
    transition(&state, id, lifecycle::IN_PROGRESS).await
}

/// POST /api/v1/block-instances/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlockInstance>> {
    transition(&state, id, lifecycle::FINISHED).await
}

/// POST /api/v1/block-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlockInstance>> {
    transition(&state, id, lifecycle::ABANDONED).await
}

async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<BlockInstance>> {
    let current = require_block_instance(state, id).await?;

    let (result, name) = match target {
        lifecycle::IN_PROGRESS => (
            BlockInstanceRepo::start(&state.pool, id).await?,
            EventName::Started(InstanceKind::Block),
        ),
        lifecycle::FINISHED => (
            BlockInstanceRepo::finish(&state.pool, id).await?,
            EventName::Finished(InstanceKind::Block),
        ),
        _ => (
            BlockInstanceRepo::abandon(&state.pool, id).await?,
            EventName::Abandoned(InstanceKind::Block),
        ),
    };

    let updated = result.ok_or_else(|| lifecycle_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "phase_instance_id": updated.phase_instance_id,
                "block_id": updated.block_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

async fn require_block_instance(state: &AppState, id: DbId) -> Result<BlockInstance, AppError> {
    BlockInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlockInstance",
            id,
        }))
}
