//! Route definitions for goal settings and their workflow transitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::goal_setting;
use crate::state::AppState;

/// Routes mounted at `/goal-settings`.
///
/// ```text
/// GET    /                -> list (?patient_id, ?status_id)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/achieve    -> achieve
/// POST   /{id}/abandon    -> abandon
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal_setting::list).post(goal_setting::create))
        .route(
            "/{id}",
            get(goal_setting::get_by_id)
                .put(goal_setting::update)
                .delete(goal_setting::delete),
        )
        .route("/{id}/achieve", post(goal_setting::achieve))
        .route("/{id}/abandon", post(goal_setting::abandon))
}
