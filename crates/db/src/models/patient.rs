//! Patient and patient medical file models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `patients` table. One patient per actor; the pseudonym
/// is generated at enrollment and never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub actor_id: DbId,
    pub pseudonym: Uuid,
    pub enrolled_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for enrolling a new patient.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatient {
    pub actor_id: DbId,
    /// Defaults to NOW() if omitted.
    pub enrolled_at: Option<Timestamp>,
}

/// DTO for updating an existing patient.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatient {
    pub enrolled_at: Option<Timestamp>,
}

/// A row from the `patient_medical_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MedicalFile {
    pub id: DbId,
    pub patient_id: DbId,
    pub title: String,
    pub notes: Option<String>,
    pub recorded_by: Option<DbId>,
    pub recorded_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a medical file entry. The patient id comes from the
/// request path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMedicalFile {
    #[validate(length(min = 1))]
    pub title: String,
    pub notes: Option<String>,
    pub recorded_by: Option<DbId>,
    /// Defaults to NOW() if omitted.
    pub recorded_at: Option<Timestamp>,
}

/// DTO for updating a medical file entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMedicalFile {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub recorded_by: Option<DbId>,
}
