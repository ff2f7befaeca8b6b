//! Handlers for the `/reportings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::reporting::{CreateReporting, Reporting, ReportingListQuery, UpdateReporting};
use bci_db::repositories::ReportingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/reportings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReporting>,
) -> AppResult<(StatusCode, Json<Reporting>)> {
    validate_input(&input)?;
    let reporting = ReportingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(reporting)))
}

/// GET /api/v1/reportings?patient_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ReportingListQuery>,
) -> AppResult<Json<Vec<Reporting>>> {
    let reportings = ReportingRepo::list(&state.pool, &filter).await?;
    Ok(Json(reportings))
}

/// GET /api/v1/reportings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reporting>> {
    let reporting = ReportingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reporting",
            id,
        }))?;
    Ok(Json(reporting))
}

/// PUT /api/v1/reportings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReporting>,
) -> AppResult<Json<Reporting>> {
    let reporting = ReportingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reporting",
            id,
        }))?;
    Ok(Json(reporting))
}

/// DELETE /api/v1/reportings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ReportingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reporting",
            id,
        }))
    }
}
