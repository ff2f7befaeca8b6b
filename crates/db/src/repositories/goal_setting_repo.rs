//! Repository for the `goal_settings` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::goal_setting::{
    CreateGoalSetting, GoalSetting, GoalSettingListQuery, UpdateGoalSetting,
};
use crate::models::status::GoalStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, patient_id, bci_instance_id, description, target_value, unit, \
                       target_date, status_id, resolved_at, created_at, updated_at";

/// Provides CRUD and workflow operations for goal settings.
pub struct GoalSettingRepo;

impl GoalSettingRepo {
    /// Set a new goal in the Open state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGoalSetting,
    ) -> Result<GoalSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO goal_settings
                (patient_id, bci_instance_id, description, target_value, unit, target_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(input.patient_id)
            .bind(input.bci_instance_id)
            .bind(&input.description)
            .bind(input.target_value)
            .bind(&input.unit)
            .bind(input.target_date)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GoalSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goal_settings WHERE id = $1");
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List goals, optionally filtered by patient and status, newest
    /// first.
    pub async fn list(
        pool: &PgPool,
        filter: &GoalSettingListQuery,
    ) -> Result<Vec<GoalSetting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goal_settings
             WHERE ($1::bigint IS NULL OR patient_id = $1)
               AND ($2::smallint IS NULL OR status_id = $2)
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(filter.patient_id)
            .bind(filter.status_id)
            .fetch_all(pool)
            .await
    }

    /// Update a goal's non-status fields. Only non-`None` fields are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGoalSetting,
    ) -> Result<Option<GoalSetting>, sqlx::Error> {
        let query = format!(
            "UPDATE goal_settings SET
                description = COALESCE($2, description),
                target_value = COALESCE($3, target_value),
                unit = COALESCE($4, unit),
                target_date = COALESCE($5, target_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.target_value)
            .bind(&input.unit)
            .bind(input.target_date)
            .fetch_optional(pool)
            .await
    }

    /// Open -> Achieved, stamping `resolved_at`. CAS on Open.
    pub async fn achieve(pool: &PgPool, id: DbId) -> Result<Option<GoalSetting>, sqlx::Error> {
        let to = GoalStatus::Achieved.id();
        let from = GoalStatus::Open.id();
        let query = format!(
            "UPDATE goal_settings SET status_id = {to}, resolved_at = NOW()
             WHERE id = $1 AND status_id = {from}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Open -> Abandoned, stamping `resolved_at`. CAS on Open.
    pub async fn abandon(pool: &PgPool, id: DbId) -> Result<Option<GoalSetting>, sqlx::Error> {
        let to = GoalStatus::Abandoned.id();
        let from = GoalStatus::Open.id();
        let query = format!(
            "UPDATE goal_settings SET status_id = {to}, resolved_at = NOW()
             WHERE id = $1 AND status_id = {from}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GoalSetting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goal_settings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
