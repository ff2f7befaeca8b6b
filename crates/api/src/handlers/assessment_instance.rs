//! Handlers for `/assessment-instances`: assessment runs with a
//! start/finish lifecycle and a score recorded on finish.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::error::CoreError;
use bci_core::lifecycle;
use bci_core::types::DbId;
use bci_core::validate;
use bci_db::models::assessment::{
    AssessmentInstance, AssessmentInstanceListQuery, CreateAssessmentInstance, FinishAssessment,
};
use bci_db::repositories::{AssessmentInstanceRepo, AssessmentRepo};
use bci_events::{DomainEvent, EventName, InstanceKind};

use crate::error::{AppError, AppResult};
use crate::handlers::lifecycle_conflict;
use crate::state::AppState;

/// POST /api/v1/assessment-instances
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssessmentInstance>,
) -> AppResult<(StatusCode, Json<AssessmentInstance>)> {
    let instance = AssessmentInstanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// GET /api/v1/assessment-instances?patient_id=&status_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AssessmentInstanceListQuery>,
) -> AppResult<Json<Vec<AssessmentInstance>>> {
    let instances = AssessmentInstanceRepo::list(&state.pool, &filter).await?;
    Ok(Json(instances))
}

/// GET /api/v1/assessment-instances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AssessmentInstance>> {
    let instance = require_assessment_instance(&state, id).await?;
    Ok(Json(instance))
}

/// DELETE /api/v1/assessment-instances/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AssessmentInstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AssessmentInstance",
            id,
        }))
    }
}

/// POST /api/v1/assessment-instances/{id}/start
pub async fn start(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AssessmentInstance>> {
    let current = require_assessment_instance(&state, id).await?;

    let updated = AssessmentInstanceRepo::start(&state.pool, id)
        .await?
        .ok_or_else(|| lifecycle_conflict(current.status_id, lifecycle::IN_PROGRESS))?;

    publish(&state, EventName::Started(InstanceKind::Assessment), &updated);
    Ok(Json(updated))
}

/// POST /api/v1/assessment-instances/{id}/finish
///
/// The body is optional; when present it carries the achieved score,
/// which is recorded atomically with the transition.
pub async fn finish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<FinishAssessment>>,
) -> AppResult<Json<AssessmentInstance>> {
    let current = require_assessment_instance(&state, id).await?;
    let score = body.map(|Json(input)| input.score).unwrap_or(None);

    if let Some(score) = score {
        let max_score = AssessmentRepo::find_by_id(&state.pool, current.assessment_id)
            .await?
            .and_then(|a| a.max_score);
        validate::require_score_in_range(score, max_score)?;
    }

    let updated = AssessmentInstanceRepo::finish(&state.pool, id, score)
        .await?
        .ok_or_else(|| lifecycle_conflict(current.status_id, lifecycle::FINISHED))?;

    publish(&state, EventName::Finished(InstanceKind::Assessment), &updated);
    Ok(Json(updated))
}

/// POST /api/v1/assessment-instances/{id}/abandon
pub async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AssessmentInstance>> {
    let current = require_assessment_instance(&state, id).await?;

    let updated = AssessmentInstanceRepo::abandon(&state.pool, id)
        .await?
        .ok_or_else(|| lifecycle_conflict(current.status_id, lifecycle::ABANDONED))?;

    publish(&state, EventName::Abandoned(InstanceKind::Assessment), &updated);
    Ok(Json(updated))
}

fn publish(state: &AppState, name: EventName, instance: &AssessmentInstance) {
    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(instance.id)
            .with_payload(json!({
                "patient_id": instance.patient_id,
                "assessment_id": instance.assessment_id,
                "score": instance.score,
                "status_id": instance.status_id,
            })),
    );
}

async fn require_assessment_instance(
    state: &AppState,
    id: DbId,
) -> Result<AssessmentInstance, AppError> {
    AssessmentInstanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AssessmentInstance",
            id,
        }))
}
