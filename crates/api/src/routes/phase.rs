//! Route definitions for phases and their nested blocks and modules.
//!
//! Phase creation lives under `/interventions/{id}/phases`; this router
//! covers the flat `/phases` surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::phase;
use crate::state::AppState;

/// Routes mounted at `/phases`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/blocks     -> list_blocks
/// POST   /{id}/blocks     -> create_block
/// GET    /{id}/modules    -> list_modules
/// POST   /{id}/modules    -> create_module
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(phase::get_by_id).put(phase::update).delete(phase::delete),
        )
        .route(
            "/{id}/blocks",
            get(phase::list_blocks).post(phase::create_block),
        )
        .route(
            "/{id}/modules",
            get(phase::list_modules).post(phase::create_module),
        )
}
