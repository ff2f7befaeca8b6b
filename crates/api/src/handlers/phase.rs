//! Handlers for `/phases/{id}` and the nested block/module collections.
//!
//! Phases are created through their parent intervention; once created they
//! are addressed as a top-level resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::intervention::{
    Block, CreateBlock, CreateModule, Module, Phase, UpdatePhase,
};
use bci_db::repositories::{BlockRepo, ModuleRepo, PhaseRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// GET /api/v1/phases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Phase>> {
    let phase = PhaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Phase",
            id,
        }))?;
    Ok(Json(phase))
}

/// PUT /api/v1/phases/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhase>,
) -> AppResult<Json<Phase>> {
    let phase = PhaseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Phase",
            id,
        }))?;
    Ok(Json(phase))
}

/// DELETE /api/v1/phases/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PhaseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Phase",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Nested blocks and modules
// ---------------------------------------------------------------------------

/// POST /api/v1/phases/{phase_id}/blocks
pub async fn create_block(
    State(state): State<AppState>,
    Path(phase_id): Path<DbId>,
    Json(input): Json<CreateBlock>,
) -> AppResult<(StatusCode, Json<Block>)> {
    validate_input(&input)?;
    require_phase(&state, phase_id).await?;
    let block = BlockRepo::create(&state.pool, phase_id, &input).await?;
    Ok((StatusCode::CREATED, Json(block)))
}

/// GET /api/v1/phases/{phase_id}/blocks
pub async fn list_blocks(
    State(state): State<AppState>,
    Path(phase_id): Path<DbId>,
) -> AppResult<Json<Vec<Block>>> {
    require_phase(&state, phase_id).await?;
    let blocks = BlockRepo::list_by_phase(&state.pool, phase_id).await?;
    Ok(Json(blocks))
}

/// POST /api/v1/phases/{phase_id}/modules
pub async fn create_module(
    State(state): State<AppState>,
    Path(phase_id): Path<DbId>,
    Json(input): Json<CreateModule>,
) -> AppResult<(StatusCode, Json<Module>)> {
    validate_input(&input)?;
    require_phase(&state, phase_id).await?;
    let module = ModuleRepo::create(&state.pool, phase_id, &input).await?;
    Ok((StatusCode::CREATED, Json(module)))
}

/// GET /api/v1/phases/{phase_id}/modules
pub async fn list_modules(
    State(state): State<AppState>,
    Path(phase_id): Path<DbId>,
) -> AppResult<Json<Vec<Module>>> {
    require_phase(&state, phase_id).await?;
    let modules = ModuleRepo::list_by_phase(&state.pool, phase_id).await?;
    Ok(Json(modules))
}

/// 404 unless the parent phase exists.
async fn require_phase(state: &AppState, phase_id: DbId) -> AppResult<()> {
    PhaseRepo::find_by_id(&state.pool, phase_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Phase",
            id: phase_id,
        }))?;
    Ok(())
}
