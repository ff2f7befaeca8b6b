//! Route definitions for patient interactions.

use axum::routing::get;
use axum::Router;

use crate::handlers::interaction;
use crate::state::AppState;

/// Routes mounted at `/interactions`.
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
        .route("/", get(interaction::list).post(interaction::create))
        .route(
            "/{id}",
            get(interaction::get_by_id)
                .put(interaction::update)
                .delete(interaction::delete),
        )
}
