//! Repository for the `interactions` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::interaction::{
    CreateInteraction, Interaction, InteractionListQuery, UpdateInteraction,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, patient_id, professional_id, channel, notes, occurred_at, created_at, updated_at";

/// Provides CRUD operations for patient interactions.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Record a new interaction, returning the created row.
    ///
    /// If `occurred_at` is `None` in the input, defaults to NOW().
    pub async fn create(
        pool: &PgPool,
        input: &CreateInteraction,
    ) -> Result<Interaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions (patient_id, professional_id, channel, notes, occurred_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(input.patient_id)
            .bind(input.professional_id)
            .bind(&input.channel)
            .bind(&input.notes)
            .bind(input.occurred_at)
            .fetch_one(pool)
            .await
    }

    /// Find an interaction by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE id = $1");
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List interactions, optionally filtered by patient, most recent
    /// first.
    pub async fn list(
        pool: &PgPool,
        filter: &InteractionListQuery,
    ) -> Result<Vec<Interaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interactions
             WHERE ($1::bigint IS NULL OR patient_id = $1)
             ORDER BY occurred_at DESC, id"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(filter.patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update an interaction. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInteraction,
    ) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!(
            "UPDATE interactions SET
                professional_id = COALESCE($2, professional_id),
                channel = COALESCE($3, channel),
                notes = COALESCE($4, notes),
                occurred_at = COALESCE($5, occurred_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .bind(input.professional_id)
            .bind(&input.channel)
            .bind(&input.notes)
            .bind(input.occurred_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an interaction by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
