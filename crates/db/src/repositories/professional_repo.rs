//! Repository for the `health_care_professionals` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::professional::{CreateProfessional, Professional, UpdateProfessional};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, actor_id, specialty, license_number, organization, created_at, updated_at";

/// Provides CRUD operations for health care professionals.
pub struct ProfessionalRepo;

impl ProfessionalRepo {
    /// Register a new professional, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProfessional,
    ) -> Result<Professional, sqlx::Error> {
        let query = format!(
            "INSERT INTO health_care_professionals (actor_id, specialty, license_number, organization)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Professional>(&query)
            .bind(input.actor_id)
            .bind(&input.specialty)
            .bind(&input.license_number)
            .bind(&input.organization)
            .fetch_one(pool)
            .await
    }

    /// Find a professional by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Professional>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM health_care_professionals WHERE id = $1");
        sqlx::query_as::<_, Professional>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all professionals ordered by license number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Professional>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM health_care_professionals ORDER BY license_number, id");
        sqlx::query_as::<_, Professional>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a professional. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfessional,
    ) -> Result<Option<Professional>, sqlx::Error> {
        let query = format!(
            "UPDATE health_care_professionals SET
                specialty = COALESCE($2, specialty),
                license_number = COALESCE($3, license_number),
                organization = COALESCE($4, organization)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Professional>(&query)
            .bind(id)
            .bind(&input.specialty)
            .bind(&input.license_number)
            .bind(&input.organization)
            .fetch_optional(pool)
            .await
    }

    /// Delete a professional by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM health_care_professionals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
