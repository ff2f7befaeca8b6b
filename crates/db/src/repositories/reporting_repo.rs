//! Repository for the `reportings` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::reporting::{CreateReporting, Reporting, ReportingListQuery, UpdateReporting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, patient_id, professional_id, title, body, reported_at, created_at, updated_at";

/// Provides CRUD operations for clinical reportings.
pub struct ReportingRepo;

impl ReportingRepo {
    /// File a new report, returning the created row.
    ///
    /// If `reported_at` is `None` in the input, defaults to NOW().
    pub async fn create(pool: &PgPool, input: &CreateReporting) -> Result<Reporting, sqlx::Error> {
        let query = format!(
            "INSERT INTO reportings (patient_id, professional_id, title, body, reported_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporting>(&query)
            .bind(input.patient_id)
            .bind(input.professional_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.reported_at)
            .fetch_one(pool)
            .await
    }

    /// Find a report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reporting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportings WHERE id = $1");
        sqlx::query_as::<_, Reporting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reports, optionally filtered by patient, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReportingListQuery,
    ) -> Result<Vec<Reporting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reportings
             WHERE ($1::bigint IS NULL OR patient_id = $1)
             ORDER BY reported_at DESC, id"
        );
        sqlx::query_as::<_, Reporting>(&query)
            .bind(filter.patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update a report. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReporting,
    ) -> Result<Option<Reporting>, sqlx::Error> {
        let query = format!(
            "UPDATE reportings SET
                professional_id = COALESCE($2, professional_id),
                title = COALESCE($3, title),
                body = COALESCE($4, body)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reporting>(&query)
            .bind(id)
            .bind(input.professional_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a report by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reportings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
