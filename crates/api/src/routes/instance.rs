//! Route definitions for the runtime instance hierarchy: intervention
//! instances and their nested phase, block, module, and activity
//! instances, plus assessment runs.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    activity_instance, assessment_instance, bci_instance, block_instance, module_instance,
    phase_instance,
};
use crate::state::AppState;

/// Routes mounted at `/bci-instances`.
///
/// ```text
/// GET    /                        -> list (?patient_id, ?status_id)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// POST   /{id}/start              -> start
/// POST   /{id}/finish             -> finish
/// POST   /{id}/abandon            -> abandon
/// GET    /{id}/phase-instances    -> list_phase_instances
/// POST   /{id}/phase-instances    -> create_phase_instance
/// ```
pub fn bci_instance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bci_instance::list).post(bci_instance::create))
        .route(
            "/{id}",
            get(bci_instance::get_by_id)
                .put(bci_instance::update)
                .delete(bci_instance::delete),
        )
        .route("/{id}/start", post(bci_instance::start))
        .route("/{id}/finish", post(bci_instance::finish))
        .route("/{id}/abandon", post(bci_instance::abandon))
        .route(
            "/{id}/phase-instances",
            get(bci_instance::list_phase_instances).post(bci_instance::create_phase_instance),
        )
}

/// Routes mounted at `/phase-instances`.
///
/// ```text
/// GET    /{id}                     -> get_by_id
/// DELETE /{id}                     -> delete
/// POST   /{id}/start               -> start
/// POST   /{id}/finish              -> finish
/// POST   /{id}/abandon             -> abandon
/// GET    /{id}/block-instances     -> list_block_instances
/// POST   /{id}/block-instances     -> create_block_instance
/// GET    /{id}/module-instances    -> list_module_instances
/// POST   /{id}/module-instances    -> create_module_instance
/// ```
pub fn phase_instance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(phase_instance::get_by_id).delete(phase_instance::delete),
        )
        .route("/{id}/start", post(phase_instance::start))
        .route("/{id}/finish", post(phase_instance::finish))
        .route("/{id}/abandon", post(phase_instance::abandon))
        .route(
            "/{id}/block-instances",
            get(phase_instance::list_block_instances).post(phase_instance::create_block_instance),
        )
        .route(
            "/{id}/module-instances",
            get(phase_instance::list_module_instances).post(phase_instance::create_module_instance),
        )
}

/// Routes mounted at `/block-instances`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// POST   /{id}/start      -> start
/// POST   /{id}/finish     -> finish
/// POST   /{id}/abandon    -> abandon
/// ```
pub fn block_instance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(block_instance::get_by_id).delete(block_instance::delete),
        )
        .route("/{id}/start", post(block_instance::start))
        .route("/{id}/finish", post(block_instance::finish))
        .route("/{id}/abandon", post(block_instance::abandon))
}

/// Routes mounted at `/module-instances`.
///
/// ```text
/// GET    /{id}                       -> get_by_id
/// DELETE /{id}                       -> delete
/// POST   /{id}/start                 -> start
/// POST   /{id}/finish                -> finish
/// POST   /{id}/abandon               -> abandon
/// GET    /{id}/activity-instances    -> list_activity_instances
/// POST   /{id}/activity-instances    -> create_activity_instance
/// ```
pub fn module_instance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(module_instance::get_by_id).delete(module_instance::delete),
        )
        .route("/{id}/start", post(module_instance::start))
        .route("/{id}/finish", post(module_instance::finish))
        .route("/{id}/abandon", post(module_instance::abandon))
        .route(
            "/{id}/activity-instances",
            get(module_instance::list_activity_instances)
                .post(module_instance::create_activity_instance),
        )
}

/// Routes mounted at `/activity-instances`.
///
/// ```text
/// GET    /{id}                 -> get_by_id
/// DELETE /{id}                 -> delete
/// POST   /{id}/start           -> start
/// POST   /{id}/finish          -> finish
/// POST   /{id}/abandon         -> abandon
/// GET    /{id}/performances    -> list_performances
/// ```
pub fn activity_instance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(activity_instance::get_by_id).delete(activity_instance::delete),
        )
        .route("/{id}/start", post(activity_instance::start))
        .route("/{id}/finish", post(activity_instance::finish))
        .route("/{id}/abandon", post(activity_instance::abandon))
        .route(
            "/{id}/performances",
            get(activity_instance::list_performances),
        )
}

/// Routes mounted at `/assessment-instances`.
///
/// ```text
/// GET    /                -> list (?patient_id, ?status_id)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// POST   /{id}/start      -> start
/// POST   /{id}/finish     -> finish ({score?})
/// POST   /{id}/abandon    -> abandon
/// ```
pub fn assessment_instance_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(assessment_instance::list).post(assessment_instance::create),
        )
        .route(
            "/{id}",
            get(assessment_instance::get_by_id).delete(assessment_instance::delete),
        )
        .route("/{id}/start", post(assessment_instance::start))
        .route("/{id}/finish", post(assessment_instance::finish))
        .route("/{id}/abandon", post(assessment_instance::abandon))
}
