//! Repository for the `patients` table.

use sqlx::PgPool;
use uuid::Uuid;

use bci_core::types::DbId;

use crate::models::patient::{CreatePatient, Patient, UpdatePatient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, actor_id, pseudonym, enrolled_at, created_at, updated_at";

/// Provides CRUD operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Enroll a new patient, generating a fresh pseudonym.
    ///
    /// If `enrolled_at` is `None` in the input, defaults to NOW().
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (actor_id, pseudonym, enrolled_at)
             VALUES ($1, $2, COALESCE($3, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(input.actor_id)
            .bind(Uuid::new_v4())
            .bind(input.enrolled_at)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all patients ordered by enrollment date, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients ORDER BY enrolled_at DESC, id");
        sqlx::query_as::<_, Patient>(&query).fetch_all(pool).await
    }

    /// Update a patient. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePatient,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!(
            "UPDATE patients SET
                enrolled_at = COALESCE($2, enrolled_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .bind(input.enrolled_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a patient by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
