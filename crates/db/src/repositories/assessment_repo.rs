//! Repository for the `assessments` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::assessment::{Assessment, CreateAssessment, UpdateAssessment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, max_score, activity_id, created_at, updated_at";

/// Provides CRUD operations for assessment templates.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Insert a new assessment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssessment,
    ) -> Result<Assessment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assessments (name, description, max_score, activity_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_score)
            .bind(input.activity_id)
            .fetch_one(pool)
            .await
    }

    /// Find an assessment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assessments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments ORDER BY name, id");
        sqlx::query_as::<_, Assessment>(&query).fetch_all(pool).await
    }

    /// Update an assessment. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssessment,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "UPDATE assessments SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                max_score = COALESCE($4, max_score),
                activity_id = COALESCE($5, activity_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_score)
            .bind(input.activity_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assessment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
