//! Route definitions for modules and their activity composition links.
//! Module creation lives under `/phases/{id}/modules`.

use axum::routing::get;
use axum::routing::delete;
use axum::Router;

use crate::handlers::module;
use crate::state::AppState;

/// Routes mounted at `/modules`.
///
/// ```text
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// GET    /{id}/activities                 -> list_activities
/// POST   /{id}/activities                 -> link_activity
/// DELETE /{module_id}/activities/{activity_id} -> unlink_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(module::get_by_id)
                .put(module::update)
                .delete(module::delete),
        )
        .route(
            "/{id}/activities",
            get(module::list_activities).post(module::link_activity),
        )
        .route(
            "/{module_id}/activities/{activity_id}",
            delete(module::unlink_activity),
        )
}
