//! Route definitions for intervention templates and their nested phases.

use axum::routing::get;
use axum::Router;

use crate::handlers::intervention;
use crate::state::AppState;

/// Routes mounted at `/interventions`.
///
/// ```text
/// GET    /               -> list (?status_id)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/phases    -> list_phases
/// POST   /{id}/phases    -> create_phase
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(intervention::list).post(intervention::create))
        .route(
            "/{id}",
            get(intervention::get_by_id)
                .put(intervention::update)
                .delete(intervention::delete),
        )
        .route(
            "/{id}/phases",
            get(intervention::list_phases).post(intervention::create_phase),
        )
}
