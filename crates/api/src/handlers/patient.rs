//! Handlers for `/patients` and the nested `/patients/{id}/medical-files`
//! resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bci_core::error::CoreError;
use bci_core::types::DbId;
use bci_db::models::patient::{
    CreateMedicalFile, CreatePatient, MedicalFile, Patient, UpdateMedicalFile, UpdatePatient,
};
use bci_db::repositories::{MedicalFileRepo, PatientRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

/// POST /api/v1/patients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePatient>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    let patient = PatientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// GET /api/v1/patients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Patient>>> {
    let patients = PatientRepo::list(&state.pool).await?;
    Ok(Json(patients))
}

/// GET /api/v1/patients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Patient>> {
    let patient = PatientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))?;
    Ok(Json(patient))
}

/// PUT /api/v1/patients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePatient>,
) -> AppResult<Json<Patient>> {
    let patient = PatientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))?;
    Ok(Json(patient))
}

/// DELETE /api/v1/patients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PatientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Medical files (patient-scoped)
// ---------------------------------------------------------------------------

/// POST /api/v1/patients/{patient_id}/medical-files
pub async fn create_medical_file(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Json(input): Json<CreateMedicalFile>,
) -> AppResult<(StatusCode, Json<MedicalFile>)> {
    validate_input(&input)?;
    require_patient(&state, patient_id).await?;
    let file = MedicalFileRepo::create(&state.pool, patient_id, &input).await?;
    Ok((StatusCode::CREATED, Json(file)))
}

/// GET /api/v1/patients/{patient_id}/medical-files
pub async fn list_medical_files(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
) -> AppResult<Json<Vec<MedicalFile>>> {
    require_patient(&state, patient_id).await?;
    let files = MedicalFileRepo::list_by_patient(&state.pool, patient_id).await?;
    Ok(Json(files))
}

/// GET /api/v1/patients/{patient_id}/medical-files/{id}
pub async fn get_medical_file(
    State(state): State<AppState>,
    Path((patient_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MedicalFile>> {
    let file = MedicalFileRepo::find_by_id(&state.pool, patient_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MedicalFile",
            id,
        }))?;
    Ok(Json(file))
}

/// PUT /api/v1/patients/{patient_id}/medical-files/{id}
pub async fn update_medical_file(
    State(state): State<AppState>,
    Path((patient_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMedicalFile>,
) -> AppResult<Json<MedicalFile>> {
    let file = MedicalFileRepo::update(&state.pool, patient_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MedicalFile",
            id,
        }))?;
    Ok(Json(file))
}

/// DELETE /api/v1/patients/{patient_id}/medical-files/{id}
pub async fn delete_medical_file(
    State(state): State<AppState>,
    Path((patient_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MedicalFileRepo::delete(&state.pool, patient_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MedicalFile",
            id,
        }))
    }
}

/// 404 unless the parent patient exists.
async fn require_patient(state: &AppState, patient_id: DbId) -> AppResult<()> {
    PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Patient",
            id: patient_id,
        }))?;
    Ok(())
}
