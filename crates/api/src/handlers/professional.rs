//! Handlers for the `/professionals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::professional::{CreateProfessional, Professional, UpdateProfessional};
use bci_db::repositories::ProfessionalRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/professionals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfessional>,
) -> AppResult<(StatusCode, Json<Professional>)> {
    validate_input(&input)?;
    let professional = ProfessionalRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(professional)))
}

/// GET /api/v1/professionals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Professional>>> {
    let professionals = ProfessionalRepo::list(&state.pool).await?;
    Ok(Json(professionals))
}

/// GET /api/v1/professionals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Professional>> {
    let professional = ProfessionalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id,
        }))?;
    Ok(Json(professional))
}

/// PUT /api/v1/professionals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfessional>,
) -> AppResult<Json<Professional>> {
    let professional = ProfessionalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id,
        }))?;
    Ok(Json(professional))
}

/// DELETE /api/v1/professionals/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProfessionalRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id,
        }))
    }
}
