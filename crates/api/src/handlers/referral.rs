//! Handlers for `/referrals` and its accept/decline/complete workflow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use bci_core::care::referral;
use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::referral::{CreateReferral, Referral, ReferralListQuery, UpdateReferral};
use bci_db::repositories::ReferralRepo;
use bci_events::{DomainEvent, EventName};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

/// POST /api/v1/referrals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReferral>,
) -> AppResult<(StatusCode, Json<Referral>)> {
    validate_input(&input)?;
    let referral = ReferralRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(referral)))
}

/// GET /api/v1/referrals?patient_id=&status_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ReferralListQuery>,
) -> AppResult<Json<Vec<Referral>>> {
    let referrals = ReferralRepo::list(&state.pool, &filter).await?;
    Ok(Json(referrals))
}

/// GET /api/v1/referrals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Referral>> {
    let referral = ReferralRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Referral",
            id,
        }))?;
    Ok(Json(referral))
}

/// PUT /api/v1/referrals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReferral>,
) -> AppResult<Json<Referral>> {
    let referral = ReferralRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Referral",
            id,
        }))?;
    Ok(Json(referral))
}

/// DELETE /api/v1/referrals/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ReferralRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Referral",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Workflow transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/referrals/{id}/accept
pub async fn accept(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Referral>> {
    transition(&state, id, referral::ACCEPTED).await
}

/// POST /api/v1/referrals/{id}/decline
pub async fn decline(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Referral>> {
    transition(&state, id, referral::DECLINED).await
}

/// POST /api/v1/referrals/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Referral>> {
    transition(&state, id, referral::COMPLETED).await
}

/// Shared transition flow: fetch (404), CAS update (409 on stale status),
/// publish the event on success.
async fn transition(state: &AppState, id: DbId, target: i16) -> AppResult<Json<Referral>> {
    let current = ReferralRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Referral",
            id,
        }))?;

    let (result, name) = match target {
        referral::ACCEPTED => (
            ReferralRepo::accept(&state.pool, id).await?,
            EventName::ReferralAccepted,
        ),
        referral::DECLINED => (
            ReferralRepo::decline(&state.pool, id).await?,
            EventName::ReferralDeclined,
        ),
        _ => (
            ReferralRepo::complete(&state.pool, id).await?,
            EventName::ReferralCompleted,
        ),
    };

    let updated = result.ok_or_else(|| referral_conflict(current.status_id, target))?;

    state.event_bus.publish(
        DomainEvent::new(name)
            .with_source(updated.id)
            .with_payload(json!({
                "patient_id": updated.patient_id,
                "status_id": updated.status_id,
            })),
    );

    Ok(Json(updated))
}

/// Build the 409 returned when a referral CAS transition finds the row in
/// an unexpected state.
fn referral_conflict(from: i16, to: i16) -> AppError {
    let message = match referral::validate_transition(from, to) {
        Err(msg) => msg,
        Ok(()) => format!(
            "Concurrent referral transition from {} ({from})",
            referral::status_name(from)
        ),
    };
    AppError::Core(CoreError::Conflict(message))
}
