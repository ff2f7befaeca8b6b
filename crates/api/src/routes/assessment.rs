//! Route definitions for assessment templates.

use axum::routing::get;
use axum::Router;

use crate::handlers::assessment;
use crate::state::AppState;

/// Routes mounted at `/assessments`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assessment::list).post(assessment::create))
        .route(
            "/{id}",
            get(assessment::get_by_id)
                .put(assessment::update)
                .delete(assessment::delete),
        )
}
