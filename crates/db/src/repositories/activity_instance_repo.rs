//! Repository for the `bci_activity_instances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::instance::{ActivityInstance, CreateActivityInstance};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, module_instance_id, activity_id, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "bci_activity_instances";

/// Provides CRUD and lifecycle operations for activity instances.
pub struct ActivityInstanceRepo;

impl ActivityInstanceRepo {
    /// Instantiate a template activity under a module instance.
    pub async fn create(
        pool: &PgPool,
        module_instance_id: DbId,
        input: &CreateActivityInstance,
    ) -> Result<ActivityInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_activity_instances (module_instance_id, activity_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityInstance>(&query)
            .bind(module_instance_id)
            .bind(input.activity_id)
            .fetch_one(pool)
            .await
    }

    /// Find an activity instance by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ActivityInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_activity_instances WHERE id = $1");
        sqlx::query_as::<_, ActivityInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the activity instances of one module instance, in creation
    /// order.
    pub async fn list_by_module_instance(
        pool: &PgPool,
        module_instance_id: DbId,
    ) -> Result<Vec<ActivityInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_activity_instances
             WHERE module_instance_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ActivityInstance>(&query)
            .bind(module_instance_id)
            .fetch_all(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<ActivityInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished.
    pub async fn finish(pool: &PgPool, id: DbId) -> Result<Option<ActivityInstance>, sqlx::Error> {
        lifecycle::finish(pool, TABLE, COLUMNS, id).await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<ActivityInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete an activity instance by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_activity_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
