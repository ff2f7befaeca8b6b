//! Route definitions for the audit event log.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /        -> list (?limit, ?offset)
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list))
        .route("/{id}", get(event::get_by_id))
}
