//! Handlers for the `/interactions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::interaction::{
    CreateInteraction, Interaction, InteractionListQuery, UpdateInteraction,
};
use bci_db::repositories::InteractionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/interactions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInteraction>,
) -> AppResult<(StatusCode, Json<Interaction>)> {
    validate_input(&input)?;
    let interaction = InteractionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}

/// GET /api/v1/interactions?patient_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<InteractionListQuery>,
) -> AppResult<Json<Vec<Interaction>>> {
    let interactions = InteractionRepo::list(&state.pool, &filter).await?;
    Ok(Json(interactions))
}

/// GET /api/v1/interactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Interaction>> {
    let interaction = InteractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;
    Ok(Json(interaction))
}

/// PUT /api/v1/interactions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInteraction>,
) -> AppResult<Json<Interaction>> {
    let interaction = InteractionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;
    Ok(Json(interaction))
}

/// DELETE /api/v1/interactions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InteractionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))
    }
}
