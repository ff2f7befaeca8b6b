//! Handlers for `/interventions` and the nested
//! `/interventions/{id}/phases` collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::intervention::{
    CreateIntervention, CreatePhase, Intervention, InterventionListQuery, Phase,
    UpdateIntervention,
};
use bci_db::repositories::{InterventionRepo, PhaseRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/interventions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateIntervention>,
) -> AppResult<(StatusCode, Json<Intervention>)> {
    validate_input(&input)?;
    let intervention = InterventionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(intervention)))
}

/// GET /api/v1/interventions?status_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<InterventionListQuery>,
) -> AppResult<Json<Vec<Intervention>>> {
    let interventions = InterventionRepo::list(&state.pool, &filter).await?;
    Ok(Json(interventions))
}

/// GET /api/v1/interventions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Intervention>> {
    let intervention = InterventionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Intervention",
            id,
        }))?;
    Ok(Json(intervention))
}

/// PUT /api/v1/interventions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIntervention>,
) -> AppResult<Json<Intervention>> {
    let intervention = InterventionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Intervention",
            id,
        }))?;
    Ok(Json(intervention))
}

/// DELETE /api/v1/interventions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InterventionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Intervention",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Nested phases
// ---------------------------------------------------------------------------

/// POST /api/v1/interventions/{intervention_id}/phases
pub async fn create_phase(
    State(state): State<AppState>,
    Path(intervention_id): Path<DbId>,
    Json(input): Json<CreatePhase>,
) -> AppResult<(StatusCode, Json<Phase>)> {
    validate_input(&input)?;
    require_intervention(&state, intervention_id).await?;
    let phase = PhaseRepo::create(&state.pool, intervention_id, &input).await?;
    Ok((StatusCode::CREATED, Json(phase)))
}

/// GET /api/v1/interventions/{intervention_id}/phases
pub async fn list_phases(
    State(state): State<AppState>,
    Path(intervention_id): Path<DbId>,
) -> AppResult<Json<Vec<Phase>>> {
    require_intervention(&state, intervention_id).await?;
    let phases = PhaseRepo::list_by_intervention(&state.pool, intervention_id).await?;
    Ok(Json(phases))
}

/// 404 unless the parent intervention exists.
async fn require_intervention(state: &AppState, intervention_id: DbId) -> AppResult<()> {
    InterventionRepo::find_by_id(&state.pool, intervention_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Intervention",
            id: intervention_id,
        }))?;
    Ok(())
}
