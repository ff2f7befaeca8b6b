//! Handlers for `/blocks/{id}`.
//!
//! Blocks are created through their parent phase; once created they are
//! addressed as a top-level resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::intervention::{Block, UpdateBlock};
use bci_db::repositories::BlockRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/blocks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Block>> {
    let block = BlockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Block",
            id,
        }))?;
    Ok(Json(block))
}

/// PUT /api/v1/blocks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlock>,
) -> AppResult<Json<Block>> {
    let block = BlockRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Block",
            id,
        }))?;
    Ok(Json(block))
}

/// DELETE /api/v1/blocks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BlockRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Block",
            id,
        }))
    }
}
