//! Repository for the `bci_phase_instances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::instance::{CreatePhaseInstance, PhaseInstance};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, bci_instance_id, phase_id, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "bci_phase_instances";

/// Provides CRUD and lifecycle operations for phase instances.
pub struct PhaseInstanceRepo;

impl PhaseInstanceRepo {
    /// Instantiate a template phase under an intervention instance.
    pub async fn create(
        pool: &PgPool,
        bci_instance_id: DbId,
        input: &CreatePhaseInstance,
    ) -> Result<PhaseInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_phase_instances (bci_instance_id, phase_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhaseInstance>(&query)
            .bind(bci_instance_id)
            .bind(input.phase_id)
            .fetch_one(pool)
            .await
    }

    /// Find a phase instance by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhaseInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_phase_instances WHERE id = $1");
        sqlx::query_as::<_, PhaseInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the phase instances of one intervention instance, in
    /// creation order.
    pub async fn list_by_bci_instance(
        pool: &PgPool,
        bci_instance_id: DbId,
    ) -> Result<Vec<PhaseInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_phase_instances
             WHERE bci_instance_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, PhaseInstance>(&query)
            .bind(bci_instance_id)
            .fetch_all(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<PhaseInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished.
    pub async fn finish(pool: &PgPool, id: DbId) -> Result<Option<PhaseInstance>, sqlx::Error> {
        lifecycle::finish(pool, TABLE, COLUMNS, id).await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<PhaseInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete a phase instance by ID, cascading to its child instances.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_phase_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
