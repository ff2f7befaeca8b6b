//! Repository for the `patient_medical_files` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::patient::{CreateMedicalFile, MedicalFile, UpdateMedicalFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, patient_id, title, notes, recorded_by, recorded_at, created_at, updated_at";

/// Provides CRUD operations for patient medical files.
pub struct MedicalFileRepo;

impl MedicalFileRepo {
    /// Insert a new medical file entry for a patient.
    ///
    /// If `recorded_at` is `None` in the input, defaults to NOW().
    pub async fn create(
        pool: &PgPool,
        patient_id: DbId,
        input: &CreateMedicalFile,
    ) -> Result<MedicalFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO patient_medical_files (patient_id, title, notes, recorded_by, recorded_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalFile>(&query)
            .bind(patient_id)
            .bind(&input.title)
            .bind(&input.notes)
            .bind(input.recorded_by)
            .bind(input.recorded_at)
            .fetch_one(pool)
            .await
    }

    /// Find a medical file by ID, scoped to its patient.
    pub async fn find_by_id(
        pool: &PgPool,
        patient_id: DbId,
        id: DbId,
    ) -> Result<Option<MedicalFile>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM patient_medical_files WHERE id = $1 AND patient_id = $2");
        sqlx::query_as::<_, MedicalFile>(&query)
            .bind(id)
            .bind(patient_id)
            .fetch_optional(pool)
            .await
    }

    /// List a patient's medical files, most recently recorded first.
    pub async fn list_by_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<MedicalFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM patient_medical_files
             WHERE patient_id = $1
             ORDER BY recorded_at DESC, id"
        );
        sqlx::query_as::<_, MedicalFile>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update a medical file, scoped to its patient. Only non-`None` fields
    /// are applied.
    pub async fn update(
        pool: &PgPool,
        patient_id: DbId,
        id: DbId,
        input: &UpdateMedicalFile,
    ) -> Result<Option<MedicalFile>, sqlx::Error> {
        let query = format!(
            "UPDATE patient_medical_files SET
                title = COALESCE($3, title),
                notes = COALESCE($4, notes),
                recorded_by = COALESCE($5, recorded_by)
             WHERE id = $1 AND patient_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MedicalFile>(&query)
            .bind(id)
            .bind(patient_id)
            .bind(&input.title)
            .bind(&input.notes)
            .bind(input.recorded_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a medical file, scoped to its patient. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, patient_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM patient_medical_files WHERE id = $1 AND patient_id = $2")
                .bind(id)
                .bind(patient_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
