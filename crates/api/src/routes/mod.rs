pub mod activity;
pub mod actor;
pub mod assessment;
pub mod behavior_performance;
pub mod block;
pub mod content;
pub mod event;
pub mod goal_setting;
pub mod health;
pub mod instance;
pub mod interaction;
pub mod intervention;
pub mod module;
pub mod patient;
pub mod phase;
pub mod professional;
pub mod referral;
pub mod reporting;
pub mod role;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /actors                                        list, create
/// /actors/{id}                                   get, update, delete
///
/// /patients                                      list, create
/// /patients/{id}                                 get, update, delete
/// /patients/{id}/medical-files                   list, create
/// /patients/{patient_id}/medical-files/{id}      get, update, delete
///
/// /professionals                                 list, create
/// /professionals/{id}                            get, update, delete
///
/// /roles                                         list, create
/// /roles/{id}                                    get, update, delete
///
/// /interventions                                 list (?status_id), create
/// /interventions/{id}                            get, update, delete
/// /interventions/{id}/phases                     list, create
///
/// /phases/{id}                                   get, update, delete
/// /phases/{id}/blocks                            list, create
/// /phases/{id}/modules                           list, create
///
/// /blocks/{id}                                   get, update, delete
///
/// /modules/{id}                                  get, update, delete
/// /modules/{id}/activities                       list, link (POST)
/// /modules/{module_id}/activities/{activity_id}  unlink (DELETE)
///
/// /activities                                    list, create
/// /activities/{id}                               get, update, delete
/// /activities/{id}/requires                      list, link (POST)
/// /activities/{activity_id}/requires/{role_id}   unlink (DELETE)
/// /activities/{id}/develops                      list, link (POST)
/// /activities/{activity_id}/develops/{role_id}   unlink (DELETE)
///
/// /assessments                                   list, create
/// /assessments/{id}                              get, update, delete
///
/// /contents                                      list (?activity_id), create
/// /contents/{id}                                 get, update, delete
///
/// /interactions                                  list (?patient_id), create
/// /interactions/{id}                             get, update, delete
///
/// /reportings                                    list (?patient_id), create
/// /reportings/{id}                               get, update, delete
///
/// /referrals                                     list (?patient_id, ?status_id), create
/// /referrals/{id}                                get, update, delete
/// /referrals/{id}/accept                         accept (POST)
/// /referrals/{id}/decline                        decline (POST)
/// /referrals/{id}/complete                       complete (POST)
///
/// /goal-settings                                 list (?patient_id, ?status_id), create
/// /goal-settings/{id}                            get, update, delete
/// /goal-settings/{id}/achieve                    achieve (POST)
/// /goal-settings/{id}/abandon                    abandon (POST)
///
/// /behavior-performances                         list (?patient_id, ?from, ?to), create
/// /behavior-performances/{id}                    get, update, delete
///
/// /bci-instances                                 list (?patient_id, ?status_id), create
/// /bci-instances/{id}                            get, update, delete
/// /bci-instances/{id}/start|finish|abandon       lifecycle transitions (POST)
/// /bci-instances/{id}/phase-instances            list, create
///
/// /phase-instances/{id}                          get, delete
/// /phase-instances/{id}/start|finish|abandon     lifecycle transitions (POST)
/// /phase-instances/{id}/block-instances          list, create
/// /phase-instances/{id}/module-instances         list, create
///
/// /block-instances/{id}                          get, delete
/// /block-instances/{id}/start|finish|abandon     lifecycle transitions (POST)
///
/// /module-instances/{id}                         get, delete
/// /module-instances/{id}/start|finish|abandon    lifecycle transitions (POST)
/// /module-instances/{id}/activity-instances      list, create
///
/// /activity-instances/{id}                       get, delete
/// /activity-instances/{id}/start|finish|abandon  lifecycle transitions (POST)
/// /activity-instances/{id}/performances          recorded measurements (GET)
///
/// /assessment-instances                          list (?patient_id, ?status_id), create
/// /assessment-instances/{id}                     get, delete
/// /assessment-instances/{id}/start               start (POST)
/// /assessment-instances/{id}/finish              finish with optional {score} (POST)
/// /assessment-instances/{id}/abandon             abandon (POST)
///
/// /events                                        list (?limit, ?offset)
/// /events/{id}                                   get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // People and organizational entities.
        .nest("/actors", actor::router())
        .nest("/patients", patient::router())
        .nest("/professionals", professional::router())
        .nest("/roles", role::router())
        // Intervention template hierarchy.
        .nest("/interventions", intervention::router())
        .nest("/phases", phase::router())
        .nest("/blocks", block::router())
        .nest("/modules", module::router())
        .nest("/activities", activity::router())
        .nest("/assessments", assessment::router())
        .nest("/contents", content::router())
        // Patient record streams.
        .nest("/interactions", interaction::router())
        .nest("/reportings", reporting::router())
        .nest("/behavior-performances", behavior_performance::router())
        // Care coordination workflows.
        .nest("/referrals", referral::router())
        .nest("/goal-settings", goal_setting::router())
        // Runtime instance hierarchy.
        .nest("/bci-instances", instance::bci_instance_router())
        .nest("/phase-instances", instance::phase_instance_router())
        .nest("/block-instances", instance::block_instance_router())
        .nest("/module-instances", instance::module_instance_router())
        .nest("/activity-instances", instance::activity_instance_router())
        .nest("/assessment-instances", instance::assessment_instance_router())
        // Audit event log.
        .nest("/events", event::router())
}
