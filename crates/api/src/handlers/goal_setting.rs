//! Handlers for `/goal-settings` and its achieve/abandon workflow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::care::goal;
use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::goal_setting::{
    CreateGoalSetting, GoalSetting, GoalSettingListQuery, UpdateGoalSetting,
};
use bci_db::repositories::GoalSettingRepo;
use bci_events::{DomainEvent, EventName};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/goal-settings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoalSetting>,
) -> AppResult<(StatusCode, Json<GoalSetting>)> {
    validate_input(&input)?;
    let goal = GoalSettingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/v1/goal-settings?patient_id=&status_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GoalSettingListQuery>,
) -> AppResult<Json<Vec<GoalSetting>>> {
    let goals = GoalSettingRepo::list(&state.pool, &filter).await?;
    Ok(Json(goals))
}

/// GET /api/v1/goal-settings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GoalSetting>> {
    let goal = GoalSettingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GoalSetting",
            id,
        }))?;
    Ok(Json(goal))
}

/// PUT /api/v1/goal-settings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoalSetting>,
) -> AppResult<Json<GoalSetting>> {
    let goal = GoalSettingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GoalSetting",
            id,
        }))?;
    Ok(Json(goal))
}

/// DELETE /api/v1/goal-settings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GoalSettingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GoalSetting",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Workflow transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/goal-settings/{id}/achieve
pub async fn achieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GoalSetting>> {
    transition(&state, id, goal::ACHIEVED).await
}

/// POST /api/v1/goal-settings/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GoalSetting>> {
    transition(&state, id, goal::ABANDONED).await
}

/// Shared transition flow: fetch (404), CAS update (409 on stale status),
/// publish the event on success.
async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<GoalSetting>> {
    let current = GoalSettingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GoalSetting",
            id,
        }))?;

    let (result, name) = if target == goal::ACHIEVED {
        (
            GoalSettingRepo::achieve(&state.pool, id).await?,
            EventName::GoalAchieved,
        )
    } else {
        (
            GoalSettingRepo::abandon(&state.pool, id).await?,
            EventName::GoalAbandoned,
        )
    };

    let updated = result.ok_or_else(|| goal_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "patient_id": updated.patient_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

/// Build the 409 returned when a goal CAS transition finds the row in an
/// unexpected state.
fn goal_conflict(from: i16, to: i16) -> AppError {
    let message = match goal::validate_transition(from, to) {
        Err(msg) => msg,
        Ok(()) => format!(
            "Concurrent goal transition from {} ({from})",
            goal::status_name(from)
        ),
    };
    AppError::Core(CoreError::Conflict(message))
}
