//! Handlers for the `/assessments` resource (templates, not runs).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::assessment::{Assessment, CreateAssessment, UpdateAssessment};
use bci_db::repositories::AssessmentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/assessments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssessment>,
) -> AppResult<(StatusCode, Json<Assessment>)> {
    validate_input(&input)?;
    let assessment = AssessmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/assessments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assessment>>> {
    let assessments = AssessmentRepo::list(&state.pool).await?;
    Ok(Json(assessments))
}

/// GET /api/v1/assessments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assessment",
            id,
        }))?;
    Ok(Json(assessment))
}

/// PUT /api/v1/assessments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssessment>,
) -> AppResult<Json<Assessment>> {
    let assessment = AssessmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assessment",
            id,
        }))?;
    Ok(Json(assessment))
}

/// DELETE /api/v1/assessments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AssessmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Assessment",
            id,
        }))
    }
}
