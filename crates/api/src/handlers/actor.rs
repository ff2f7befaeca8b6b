//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_core::validate;
use bci_db::models::actor::{Actor, CreateActor, UpdateActor};
use bci_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    validate_input(&input)?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /api/v1/actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    Ok(Json(actor))
}

/// PUT /api/v1/actors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<Json<Actor>> {
    // Update DTOs have no derive-based validation; check touched fields.
    if let Some(first_name) = &input.first_name {
        validate::require_non_blank("first_name", first_name)?;
    }
    if let Some(last_name) = &input.last_name {
        validate::require_non_blank("last_name", last_name)?;
    }
    if let Some(email) = &input.email {
        if !validate::is_valid_email(email) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{email}' is not a valid email address"
            ))));
        }
    }
    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    Ok(Json(actor))
}

/// DELETE /api/v1/actors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))
    }
}
