//! Shared compare-and-set transition SQL for instance tables.
//!
//! All `*_instances` tables carry the same lifecycle columns, so the
//! per-table repositories delegate their `start`/`finish`/`abandon`
//! methods here. The `WHERE ... AND status_id = <expected>` guard makes
//! each transition a CAS: a concurrent transition loses and gets `None`
//! back, which the API surfaces as a 409.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use bci_core::types::DbId;

use crate::models::status::InstanceStatus;

/// NotStarted -> InProgress, stamping `entered_at`.
pub(crate) async fn start<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    id: DbId,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let from = InstanceStatus::NotStarted.id();
    let to = InstanceStatus::InProgress.id();
    let query = format!(
        "UPDATE {table} SET
            status_id = {to},
            entered_at = NOW(),
            version = version + 1
         WHERE id = $1 AND status_id = {from}
         RETURNING {columns}"
    );
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// InProgress -> Finished, stamping `exited_at`.
pub(crate) async fn finish<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    id: DbId,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let from = InstanceStatus::InProgress.id();
    let to = InstanceStatus::Finished.id();
    let query = format!(
        "UPDATE {table} SET
            status_id = {to},
            exited_at = NOW(),
            version = version + 1
         WHERE id = $1 AND status_id = {from}
         RETURNING {columns}"
    );
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// NotStarted or InProgress -> Abandoned, stamping `exited_at`. An
/// abandon from NotStarted leaves `entered_at` NULL.
pub(crate) async fn abandon<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    id: DbId,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let not_started = InstanceStatus::NotStarted.id();
    let in_progress = InstanceStatus::InProgress.id();
    let to = InstanceStatus::Abandoned.id();
    let query = format!(
        "UPDATE {table} SET
            status_id = {to},
            exited_at = NOW(),
            version = version + 1
         WHERE id = $1 AND status_id IN ({not_started}, {in_progress})
         RETURNING {columns}"
    );
    sqlx::query_as::<_, T>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}
