//! Route definitions for patients and their medical files.

use axum::routing::get;
use axum::Router;

use crate::handlers::patient;
use crate::state::AppState;

/// Routes mounted at `/patients`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/medical-files                -> list_medical_files
/// POST   /{id}/medical-files                -> create_medical_file
/// GET    /{patient_id}/medical-files/{id}   -> get_medical_file
/// PUT    /{patient_id}/medical-files/{id}   -> update_medical_file
/// DELETE /{patient_id}/medical-files/{id}   -> delete_medical_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(patient::list).post(patient::create))
        .route(
            "/{id}",
            get(patient::get_by_id)
                .put(patient::update)
                .delete(patient::delete),
        )
        .route(
            "/{id}/medical-files",
            get(patient::list_medical_files).post(patient::create_medical_file),
        )
        .route(
            "/{patient_id}/medical-files/{id}",
            get(patient::get_medical_file)
                .put(patient::update_medical_file)
                .delete(patient::delete_medical_file),
        )
}
