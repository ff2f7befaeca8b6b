//! Repository for the `composed_of` module/activity link table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::activity::ModuleActivity;

/// Provides link/unlink/list operations for module composition.
pub struct ComposedOfRepo;

impl ComposedOfRepo {
    /// Link an activity into a module at the given position, returning the
    /// joined activity row.
    pub async fn link(
        pool: &PgPool,
        module_id: DbId,
        activity_id: DbId,
        sequence_index: i32,
    ) -> Result<ModuleActivity, sqlx::Error> {
        sqlx::query_as::<_, ModuleActivity>(
            "WITH link AS (
                INSERT INTO composed_of (module_id, activity_id, sequence_index)
                VALUES ($1, $2, $3)
                RETURNING activity_id, sequence_index
             )
             SELECT a.id, a.name, a.description, a.instructions, link.sequence_index
             FROM link
             JOIN bci_activities a ON a.id = link.activity_id",
        )
        .bind(module_id)
        .bind(activity_id)
        .bind(sequence_index)
        .fetch_one(pool)
        .await
    }

    /// List a module's activities in composition order.
    pub async fn list_by_module(
        pool: &PgPool,
        module_id: DbId,
    ) -> Result<Vec<ModuleActivity>, sqlx::Error> {
        sqlx::query_as::<_, ModuleActivity>(
            "SELECT a.id, a.name, a.description, a.instructions, c.sequence_index
             FROM composed_of c
             JOIN bci_activities a ON a.id = c.activity_id
             WHERE c.module_id = $1
             ORDER BY c.sequence_index",
        )
        .bind(module_id)
        .fetch_all(pool)
        .await
    }

    /// Remove an activity from a module. Returns `true` if a link was
    /// removed.
    pub async fn unlink(
        pool: &PgPool,
        module_id: DbId,
        activity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM composed_of WHERE module_id = $1 AND activity_id = $2")
                .bind(module_id)
                .bind(activity_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
