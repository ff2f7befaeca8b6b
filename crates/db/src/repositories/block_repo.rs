//! Repository for the `bci_blocks` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::intervention::{Block, CreateBlock, UpdateBlock};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, phase_id, name, description, sequence_index, created_at, updated_at";

/// Provides CRUD operations for phase blocks.
pub struct BlockRepo;

impl BlockRepo {
    /// Insert a new block under a phase.
    pub async fn create(
        pool: &PgPool,
        phase_id: DbId,
        input: &CreateBlock,
    ) -> Result<Block, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_blocks (phase_id, name, description, sequence_index)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(phase_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_one(pool)
            .await
    }

    /// Find a block by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Block>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_blocks WHERE id = $1");
        sqlx::query_as::<_, Block>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a phase's blocks in sequence order.
    pub async fn list_by_phase(pool: &PgPool, phase_id: DbId) -> Result<Vec<Block>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_blocks
             WHERE phase_id = $1
             ORDER BY sequence_index"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(phase_id)
            .fetch_all(pool)
            .await
    }

    /// Update a block. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlock,
    ) -> Result<Option<Block>, sqlx::Error> {
        let query = format!(
            "UPDATE bci_blocks SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                sequence_index = COALESCE($4, sequence_index)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a block by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
