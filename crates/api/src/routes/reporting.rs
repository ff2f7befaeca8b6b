//! Route definitions for reportings.

use axum::routing::get;
use axum::Router;

use crate::handlers::reporting;
use crate::state::AppState;

/// Routes mounted at `/reportings`.
///
/// ```text
/// GET    /        -> list (?patient_id)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reporting::list).post(reporting::create))
        .route(
            "/{id}",
            get(reporting::get_by_id)
                .put(reporting::update)
                .delete(reporting::delete),
        )
}
