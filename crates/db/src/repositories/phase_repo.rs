//! Repository for the `bci_phases` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::intervention::{CreatePhase, Phase, UpdatePhase};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, intervention_id, name, description, sequence_index, created_at, updated_at";

/// Provides CRUD operations for intervention phases.
pub struct PhaseRepo;

impl PhaseRepo {
    /// Insert a new phase under an intervention.
    pub async fn create(
        pool: &PgPool,
        intervention_id: DbId,
        input: &CreatePhase,
    ) -> Result<Phase, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_phases (intervention_id, name, description, sequence_index)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Phase>(&query)
            .bind(intervention_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_one(pool)
            .await
    }

    /// Find a phase by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Phase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_phases WHERE id = $1");
        sqlx::query_as::<_, Phase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an intervention's phases in sequence order.
    pub async fn list_by_intervention(
        pool: &PgPool,
        intervention_id: DbId,
    ) -> Result<Vec<Phase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_phases
             WHERE intervention_id = $1
             ORDER BY sequence_index"
        );
        sqlx::query_as::<_, Phase>(&query)
            .bind(intervention_id)
            .fetch_all(pool)
            .await
    }

    /// Update a phase. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhase,
    ) -> Result<Option<Phase>, sqlx::Error> {
        let query = format!(
            "UPDATE bci_phases SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                sequence_index = COALESCE($4, sequence_index)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Phase>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a phase by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_phases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
