//! Handlers for the `/behavior-performances` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::behavior_performance::{
    BehaviorPerformance, BehaviorPerformanceListQuery, CreateBehaviorPerformance,
    UpdateBehaviorPerformance,
};
use bci_db::repositories::BehaviorPerformanceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/behavior-performances
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBehaviorPerformance>,
) -> AppResult<(StatusCode, Json<BehaviorPerformance>)> {
    validate_input(&input)?;
    let performance = BehaviorPerformanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(performance)))
}

/// GET /api/v1/behavior-performances?patient_id=&from=&to=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BehaviorPerformanceListQuery>,
) -> AppResult<Json<Vec<BehaviorPerformance>>> {
    let performances = BehaviorPerformanceRepo::list(&state.pool, &filter).await?;
    Ok(Json(performances))
}

/// GET /api/v1/behavior-performances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BehaviorPerformance>> {
    let performance = BehaviorPerformanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BehaviorPerformance",
            id,
        }))?;
    Ok(Json(performance))
}

/// PUT /api/v1/behavior-performances/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBehaviorPerformance>,
) -> AppResult<Json<BehaviorPerformance>> {
    let performance = BehaviorPerformanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BehaviorPerformance",
            id,
        }))?;
    Ok(Json(performance))
}

/// DELETE /api/v1/behavior-performances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BehaviorPerformanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BehaviorPerformance",
            id,
        }))
    }
}
