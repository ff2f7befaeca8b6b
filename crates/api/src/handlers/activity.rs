//! Handlers for `/activities` and the requires/develops role links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::activity::{Activity, CreateActivity, LinkRole, UpdateActivity};
use bci_db::models::role::Role;
use bci_db::repositories::{ActivityRepo, DevelopsRepo, RequiresRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/activities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    validate_input(&input)?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}

/// GET /api/v1/activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Activity>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<Json<Activity>> {
    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ActivityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Required roles
// ---------------------------------------------------------------------------

/// POST /api/v1/activities/{activity_id}/requires
pub async fn link_required_role(
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
    Json(input): Json<LinkRole>,
) -> AppResult<(StatusCode, Json<Role>)> {
    require_activity(&state, activity_id).await?;
    let role = RequiresRepo::link(&state.pool, activity_id, input.role_id).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /api/v1/activities/{activity_id}/requires
pub async fn list_required_roles(
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
) -> AppResult<Json<Vec<Role>>> {
    require_activity(&state, activity_id).await?;
    let roles = RequiresRepo::list(&state.pool, activity_id).await?;
    Ok(Json(roles))
}

/// DELETE /api/v1/activities/{activity_id}/requires/{role_id}
pub async fn unlink_required_role(
    State(state): State<AppState>,
    Path((activity_id, role_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = RequiresRepo::unlink(&state.pool, activity_id, role_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RequiredRole",
            id: role_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Developed roles
// ---------------------------------------------------------------------------

/// POST /api/v1/activities/{activity_id}/develops
pub async fn link_developed_role(
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
    Json(input): Json<LinkRole>,
) -> AppResult<(StatusCode, Json<Role>)> {
    require_activity(&state, activity_id).await?;
    let role = DevelopsRepo::link(&state.pool, activity_id, input.role_id).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /api/v1/activities/{activity_id}/develops
pub async fn list_developed_roles(
    State(state): State<AppState>,
    Path(activity_id): Path<DbId>,
) -> AppResult<Json<Vec<Role>>> {
    require_activity(&state, activity_id).await?;
    let roles = DevelopsRepo::list(&state.pool, activity_id).await?;
    Ok(Json(roles))
}

/// DELETE /api/v1/activities/{activity_id}/develops/{role_id}
pub async fn unlink_developed_role(
    State(state): State<AppState>,
    Path((activity_id, role_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = DevelopsRepo::unlink(&state.pool, activity_id, role_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DevelopedRole",
            id: role_id,
        }))
    }
}

/// 404 unless the parent activity exists.
async fn require_activity(state: &AppState, activity_id: DbId) -> AppResult<()> {
    ActivityRepo::find_by_id(&state.pool, activity_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id: activity_id,
        }))?;
    Ok(())
}
