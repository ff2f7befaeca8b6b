//! Route definitions for professionals.

use axum::routing::get;
use axum::Router;

use crate::handlers::professional;
use crate::state::AppState;

/// Routes mounted at `/professionals`.
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
        .route("/", get(professional::list).post(professional::create))
        .route(
            "/{id}",
            get(professional::get_by_id)
                .put(professional::update)
                .delete(professional::delete),
        )
}
