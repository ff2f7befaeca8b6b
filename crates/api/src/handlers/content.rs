//! Handlers for the `/contents` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::content::{Content, ContentListQuery, CreateContent, UpdateContent};
use bci_db::repositories::ContentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/contents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContent>,
) -> AppResult<(StatusCode, Json<Content>)> {
    validate_input(&input)?;
    let content = ContentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// GET /api/v1/contents?activity_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ContentListQuery>,
) -> AppResult<Json<Vec<Content>>> {
    let contents = ContentRepo::list(&state.pool, &filter).await?;
    Ok(Json(contents))
}

/// GET /api/v1/contents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Content>> {
    let content = ContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;
    Ok(Json(content))
}

/// PUT /api/v1/contents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContent>,
) -> AppResult<Json<Content>> {
    let content = ContentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;
    Ok(Json(content))
}

/// DELETE /api/v1/contents/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))
    }
}
