//! Handlers for `/activity-instances`, including the recorded
//! performance measurements for one run.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_db::models::behavior_performance::BehaviorPerformance;
use bci_db::models::instance::ActivityInstance;
use bci_db::repositories::{ActivityInstanceRepo, BehaviorPerformanceRepo};
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// GET /api/v1/activity-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityInstance>> {
    let instance = require_activity_instance(&state, id).await?;
    Ok(Json(instance))
}

/// DELETE /api/v1/activity-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ActivityInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ActivityInstance",
            id,
        }))
    }
}

/// POST /api/v1/activity-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityInstance>> {
    transition(&state, id, lifecycle::IN_PROGRESS).await
}

/// POST /api/v1/activity-instances/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityInstance>> {
    transition(&state, id, lifecycle::FINISHED).await
}

/// POST /api/v1/activity-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActivityInstance>> {
    transition(&state, id, lifecycle::ABANDONED).await
}

/// GET /api/v1/activity-instances/{id}/performances
pub async fn list_performances(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BehaviorPerformance>>> {
    require_activity_instance(&state, id).await?;
    let performances = BehaviorPerformanceRepo::list_by_activity_instance(&state.pool, id).await?;
    Ok(Json(performances))
}

async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<ActivityInstance>> {
    let current = require_activity_instance(state, id).await?;

    let (result, name) = match target {
        lifecycle::IN_PROGRESS => (
            ActivityInstanceRepo::start(&state.pool, id).await?,
            EventName::Started(InstanceKind::Activity),
        ),
        lifecycle::FINISHED => (
            ActivityInstanceRepo::finish(&state.pool, id).await?,
            EventName::Finished(InstanceKind::Activity),
        ),
        _ => (
            ActivityInstanceRepo::abandon(&state.pool, id).await?,
            EventName::Abandoned(InstanceKind::Activity),
        ),
    };

    let updated = result.ok_or_else(|| lifecycle_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "module_instance_id": updated.module_instance_id,
                "activity_id": updated.activity_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

async fn require_activity_instance(
    state: &AppState,
    id: DbId,
) -> Result<ActivityInstance, AppError> {
    ActivityInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActivityInstance",
            id,
        }))
}
