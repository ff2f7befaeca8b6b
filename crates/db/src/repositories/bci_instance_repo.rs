//! Repository for the `bci_instances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::instance::{
    BciInstance, BciInstanceListQuery, CreateBciInstance, UpdateBciInstance,
};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, intervention_id, patient_id, prescribed_by, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "bci_instances";

/// Provides CRUD and lifecycle operations for intervention instances.
pub struct BciInstanceRepo;

impl BciInstanceRepo {
    /// Prescribe an intervention to a patient. The new instance starts
    /// in NotStarted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBciInstance,
    ) -> Result<BciInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO bci_instances (intervention_id, patient_id, prescribed_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BciInstance>(&query)
            .bind(input.intervention_id)
            .bind(input.patient_id)
            .bind(input.prescribed_by)
            .fetch_one(pool)
            .await
    }

    /// Find an intervention instance by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BciInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bci_instances WHERE id = $1");
        sqlx::query_as::<_, BciInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List intervention instances, optionally filtered by patient and
    /// status, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &BciInstanceListQuery,
    ) -> Result<Vec<BciInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bci_instances
             WHERE ($1::bigint IS NULL OR patient_id = $1)
               AND ($2::smallint IS NULL OR status_id = $2)
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, BciInstance>(&query)
            .bind(filter.patient_id)
            .bind(filter.status_id)
            .fetch_all(pool)
            .await
    }

    /// Update an instance's non-lifecycle fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBciInstance,
    ) -> Result<Option<BciInstance>, sqlx::Error> {
        let query = format!(
            "UPDATE bci_instances SET
                prescribed_by = COALESCE($2, prescribed_by)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BciInstance>(&query)
            .bind(id)
            .bind(input.prescribed_by)
            .fetch_optional(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<BciInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished.
    pub async fn finish(pool: &PgPool, id: DbId) -> Result<Option<BciInstance>, sqlx::Error> {
        lifecycle::finish(pool, TABLE, COLUMNS, id).await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<BciInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete an instance by ID, cascading to its child instances.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bci_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
