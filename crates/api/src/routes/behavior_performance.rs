//! Route definitions for behavior performance measurements.

use axum::routing::get;
use axum::Router;

use crate::handlers::behavior_performance;
use crate::state::AppState;

/// Routes mounted at `/behavior-performances`.
///
/// ```text
/// GET    /        -> list (?patient_id, ?from, ?to)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(behavior_performance::list).post(behavior_performance::create),
        )
        .route(
            "/{id}",
            get(behavior_performance::get_by_id)
                .put(behavior_performance::update)
                .delete(behavior_performance::delete),
        )
}
