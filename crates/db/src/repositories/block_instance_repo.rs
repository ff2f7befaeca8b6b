//! Repository for the `bci_block_instances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::instance::{BlockInstance, CreateBlockInstance};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, phase_instance_id, block_id, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "bci_block_instances";

/// Provides CRUD and lifecycle operations for block instances.
pub struct BlockInstanceRepo;

impl BlockInstanceRepo {
    /// Instantiate a template block under a phase instance.
    pub async fn create(
        pool: &PgPool,
        phase_instance_id: DbId,
        input: &CreateBlockInstance,
    ) -> Result<BlockInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_block_instances (phase_instance_id, block_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlockInstance>(&query)
            .bind(phase_instance_id)
            .bind(input.block_id)
            .fetch_one(pool)
            .await
    }

    /// Find a block instance by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlockInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_block_instances WHERE id = $1");
        sqlx::query_as::<_, BlockInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the block instances of one phase instance, in creation order.
    pub async fn list_by_phase_instance(
        pool: &PgPool,
        phase_instance_id: DbId,
    ) -> Result<Vec<BlockInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_block_instances
             WHERE phase_instance_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, BlockInstance>(&query)
            .bind(phase_instance_id)
            .fetch_all(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<BlockInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished.
    pub async fn finish(pool: &PgPool, id: DbId) -> Result<Option<BlockInstance>, sqlx::Error> {
        lifecycle::finish(pool, TABLE, COLUMNS, id).await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<BlockInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete a block instance by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_block_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
