//! Handlers for `/modules/{id}` and the module ↔ activity composition
//! links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::activity::{LinkActivity, ModuleActivity};
use bci_db::models::intervention::{Module, UpdateModule};
use bci_db::repositories::{ComposedOfRepo, ModuleRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/modules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Module>> {
    let module = ModuleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id,
        }))?;
    Ok(Json(module))
}

/// PUT /api/v1/modules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateModule>,
) -> AppResult<Json<Module>> {
    let module = ModuleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id,
        }))?;
    Ok(Json(module))
}

/// DELETE /api/v1/modules/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ModuleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Activity composition links
// ---------------------------------------------------------------------------

/// POST /api/v1/modules/{module_id}/activities
pub async fn link_activity(
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
    Json(input): Json<LinkActivity>,
) -> AppResult<(StatusCode, Json<ModuleActivity>)> {
    require_module(&state, module_id).await?;
    let linked =
        ComposedOfRepo::link(&state.pool, module_id, input.activity_id, input.sequence_index)
            .await?;
    Ok((StatusCode::CREATED, Json(linked)))
}

/// GET /api/v1/modules/{module_id}/activities
pub async fn list_activities(
    State(state): State<AppState>,
    Path(module_id): Path<DbId>,
) -> AppResult<Json<Vec<ModuleActivity>>> {
    require_module(&state, module_id).await?;
    let activities = ComposedOfRepo::list_by_module(&state.pool, module_id).await?;
    Ok(Json(activities))
}

/// DELETE /api/v1/modules/{module_id}/activities/{activity_id}
pub async fn unlink_activity(
    State(state): State<AppState>,
    Path((module_id, activity_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = ComposedOfRepo::unlink(&state.pool, module_id, activity_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ModuleActivity",
            id: activity_id,
        }))
    }
}

/// 404 unless the parent module exists.
async fn require_module(state: &AppState, module_id: DbId) -> AppResult<()> {
    ModuleRepo::find_by_id(&state.pool, module_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }))?;
    Ok(())
}
