//! Repository for the `bci_module_instances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::instance::{CreateModuleInstance, ModuleInstance};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, phase_instance_id, block_instance_id, module_id, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "bci_module_instances";

/// Provides CRUD and lifecycle operations for module instances.
pub struct ModuleInstanceRepo;

impl ModuleInstanceRepo {
    /// Instantiate a template module under a phase instance, optionally
    /// inside one of its block instances.
    pub async fn create(
        pool: &PgPool,
        phase_instance_id: DbId,
        input: &CreateModuleInstance,
    ) -> Result<ModuleInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_module_instances (phase_instance_id, block_instance_id, module_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ModuleInstance>(&query)
            .bind(phase_instance_id)
            .bind(input.block_instance_id)
            .bind(input.module_id)
            .fetch_one(pool)
            .await
    }

    /// Find a module instance by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ModuleInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_module_instances WHERE id = $1");
        sqlx::query_as::<_, ModuleInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the module instances of one phase instance, in creation
    /// order.
    pub async fn list_by_phase_instance(
        pool: &PgPool,
        phase_instance_id: DbId,
    ) -> Result<Vec<ModuleInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_module_instances
             WHERE phase_instance_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ModuleInstance>(&query)
            .bind(phase_instance_id)
            .fetch_all(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<ModuleInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished.
    pub async fn finish(pool: &PgPool, id: DbId) -> Result<Option<ModuleInstance>, sqlx::Error> {
        lifecycle::finish(pool, TABLE, COLUMNS, id).await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<ModuleInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete a module instance by ID, cascading to its activity
    /// instances.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_module_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
