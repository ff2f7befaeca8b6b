//! Read-only handlers for the audit event log.

use axum::extract::{Path, Query, State};
use axum::Json;

use bci_core::error::CoreError;
use bci_core::pagination::{clamp_limit, clamp_offset};
use bci_core::types::DbId;
use bci_db::models::event::Event;
use bci_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/events?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Event>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let events = EventRepo::list_recent(&state.pool, limit, offset).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}
