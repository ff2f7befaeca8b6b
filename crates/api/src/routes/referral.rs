//! Route definitions for referrals and their workflow transitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::referral;
use crate::state::AppState;

/// Routes mounted at `/referrals`.
///
/// ```text
/// GET    /                 -> list (?patient_id, ?status_id)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/accept      -> accept
/// POST   /{id}/decline     -> decline
/// POST   /{id}/complete    -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(referral::list).post(referral::create))
        .route(
            "/{id}",
            get(referral::get_by_id)
                .put(referral::update)
                .delete(referral::delete),
        )
        .route("/{id}/accept", post(referral::accept))
        .route("/{id}/decline", post(referral::decline))
        .route("/{id}/complete", post(referral::complete))
}
