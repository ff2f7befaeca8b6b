//! Repository for the `behavior_change_interventions` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::intervention::{
    CreateIntervention, Intervention, InterventionListQuery, UpdateIntervention,
};
use crate::models::status::InterventionStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status_id, created_by, created_at, updated_at";

/// Provides CRUD operations for intervention templates.
pub struct InterventionRepo;

impl InterventionRepo {
    /// Insert a new intervention, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to Draft.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIntervention,
    ) -> Result<Intervention, sqlx::Error> {
        let query = format!(
            "INSERT INTO behavior_change_interventions (name, description, status_id, created_by)
             VALUES ($1, $2, COALESCE($3, $5), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intervention>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.created_by)
            .bind(InterventionStatus::Draft.id())
            .fetch_one(pool)
            .await
    }

    /// Find an intervention by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Intervention>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM behavior_change_interventions WHERE id = $1");
        sqlx::query_as::<_, Intervention>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List interventions, optionally filtered by status, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filter: &InterventionListQuery,
    ) -> Result<Vec<Intervention>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM behavior_change_interventions
             WHERE ($1::smallint IS NULL OR status_id = $1)
             ORDER BY name"
        );
        sqlx::query_as::<_, Intervention>(&query)
            .bind(filter.status_id)
            .fetch_all(pool)
            .await
    }

    /// Update an intervention. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIntervention,
    ) -> Result<Option<Intervention>, sqlx::Error> {
        let query = format!(
            "UPDATE behavior_change_interventions SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status_id = COALESCE($4, status_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intervention>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an intervention by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while instances reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM behavior_change_interventions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
