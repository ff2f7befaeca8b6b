//! Repositories for the `requires` and `develops` activity/role link
//! tables.
//!
//! The two tables have an identical shape, so both repositories delegate
//! to the same SQL with the table name interpolated.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::role::Role;

async fn link_role(
    pool: &PgPool,
    table: &str,
    activity_id: DbId,
    role_id: DbId,
) -> Result<Role, sqlx::Error> {
    let query = format!(
        "WITH link AS (
            INSERT INTO {table} (activity_id, role_id)
            VALUES ($1, $2)
            RETURNING role_id
         )
         SELECT r.id, r.name, r.description, r.created_at, r.updated_at
         FROM link
         JOIN roles r ON r.id = link.role_id"
    );
    sqlx::query_as::<_, Role>(&query)
        .bind(activity_id)
        .bind(role_id)
        .fetch_one(pool)
        .await
}

async fn list_roles(pool: &PgPool, table: &str, activity_id: DbId) -> Result<Vec<Role>, sqlx::Error> {
    let query = format!(
        "SELECT r.id, r.name, r.description, r.created_at, r.updated_at
         FROM {table} l
         JOIN roles r ON r.id = l.role_id
         WHERE l.activity_id = $1
         ORDER BY r.name"
    );
    sqlx::query_as::<_, Role>(&query)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

async fn unlink_role(
    pool: &PgPool,
    table: &str,
    activity_id: DbId,
    role_id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE activity_id = $1 AND role_id = $2");
    let result = sqlx::query(&query)
        .bind(activity_id)
        .bind(role_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Roles an activity requires from the patient.
pub struct RequiresRepo;

impl RequiresRepo {
    pub async fn link(pool: &PgPool, activity_id: DbId, role_id: DbId) -> Result<Role, sqlx::Error> {
        link_role(pool, "requires", activity_id, role_id).await
    }

    pub async fn list(pool: &PgPool, activity_id: DbId) -> Result<Vec<Role>, sqlx::Error> {
        list_roles(pool, "requires", activity_id).await
    }

    pub async fn unlink(
        pool: &PgPool,
        activity_id: DbId,
        role_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        unlink_role(pool, "requires", activity_id, role_id).await
    }
}

/// Roles an activity develops in the patient.
pub struct DevelopsRepo;

impl DevelopsRepo {
    pub async fn link(pool: &PgPool, activity_id: DbId, role_id: DbId) -> Result<Role, sqlx::Error> {
        link_role(pool, "develops", activity_id, role_id).await
    }

    pub async fn list(pool: &PgPool, activity_id: DbId) -> Result<Vec<Role>, sqlx::Error> {
        list_roles(pool, "develops", activity_id).await
    }

    pub async fn unlink(
        pool: &PgPool,
        activity_id: DbId,
        role_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        unlink_role(pool, "develops", activity_id, role_id).await
    }
}
