//! Repository for the `bci_modules` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::intervention::{CreateModule, Module, UpdateModule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, phase_id, block_id, name, description, sequence_index, created_at, updated_at";

/// Provides CRUD operations for phase modules.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Insert a new module under a phase, optionally grouped into a block.
    pub async fn create(
        pool: &PgPool,
        phase_id: DbId,
        input: &CreateModule,
    ) -> Result<Module, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_modules (phase_id, block_id, name, description, sequence_index)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(phase_id)
            .bind(input.block_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_one(pool)
            .await
    }

    /// Find a module by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_modules WHERE id = $1");
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a phase's modules in sequence order.
    pub async fn list_by_phase(pool: &PgPool, phase_id: DbId) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_modules
             WHERE phase_id = $1
             ORDER BY sequence_index"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(phase_id)
            .fetch_all(pool)
            .await
    }

    /// Update a module. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModule,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!(
            "UPDATE bci_modules SET
                block_id = COALESCE($2, block_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                sequence_index = COALESCE($5, sequence_index)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(input.block_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.sequence_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a module by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_modules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
