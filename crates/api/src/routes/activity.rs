//! Route definitions for activities and their role requirement and
//! development links.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
/// GET    /{id}/requires                       -> list_required_roles
/// POST   /{id}/requires                       -> link_required_role
/// DELETE /{activity_id}/requires/{role_id}    -> unlink_required_role
/// GET    /{id}/develops                       -> list_developed_roles
/// POST   /{id}/develops                       -> link_developed_role
/// DELETE /{activity_id}/develops/{role_id}    -> unlink_developed_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity::list).post(activity::create))
        .route(
            "/{id}",
            get(activity::get_by_id)
                .put(activity::update)
                .delete(activity::delete),
        )
        .route(
            "/{id}/requires",
            get(activity::list_required_roles).post(activity::link_required_role),
        )
        .route(
            "/{activity_id}/requires/{role_id}",
            delete(activity::unlink_required_role),
        )
        .route(
            "/{id}/develops",
            get(activity::list_developed_roles).post(activity::link_developed_role),
        )
        .route(
            "/{activity_id}/develops/{role_id}",
            delete(activity::unlink_developed_role),
        )
}
