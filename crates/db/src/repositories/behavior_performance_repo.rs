//! Repository for the `behavior_performances` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::behavior_performance::{
    BehaviorPerformance, BehaviorPerformanceListQuery, CreateBehaviorPerformance,
    UpdateBehaviorPerformance,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, patient_id, activity_instance_id, metric, value, unit, \
                       measured_at, created_at, updated_at";

/// Provides CRUD operations for behavior performance measurements.
pub struct BehaviorPerformanceRepo;

impl BehaviorPerformanceRepo {
    /// Record a new measurement, returning the created row.
    ///
    /// If `measured_at` is `None` in the input, defaults to NOW().
    pub async fn create(
        pool: &PgPool,
        input: &CreateBehaviorPerformance,
    ) -> Result<BehaviorPerformance, sqlx::Error> {
        let query = format!(
            "INSERT INTO behavior_performances
                (patient_id, activity_instance_id, metric, value, unit, measured_at)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BehaviorPerformance>(&query)
            .bind(input.patient_id)
            .bind(input.activity_instance_id)
            .bind(&input.metric)
            .bind(input.value)
            .bind(&input.unit)
            .bind(input.measured_at)
            .fetch_one(pool)
            .await
    }

    /// Find a measurement by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BehaviorPerformance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM behavior_performances WHERE id = $1");
        sqlx::query_as::<_, BehaviorPerformance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List measurements, optionally filtered by patient and a
    /// `[from, to)` window on `measured_at`, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &BehaviorPerformanceListQuery,
    ) -> Result<Vec<BehaviorPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM behavior_performances
             WHERE ($1::bigint IS NULL OR patient_id = $1)
               AND ($2::timestamptz IS NULL OR measured_at >= $2)
               AND ($3::timestamptz IS NULL OR measured_at < $3)
             ORDER BY measured_at DESC, id"
        );
        sqlx::query_as::<_, BehaviorPerformance>(&query)
            .bind(filter.patient_id)
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(pool)
            .await
    }

    /// List the measurements attached to one activity instance, oldest
    /// first.
    pub async fn list_by_activity_instance(
        pool: &PgPool,
        activity_instance_id: DbId,
    ) -> Result<Vec<BehaviorPerformance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM behavior_performances
             WHERE activity_instance_id = $1
             ORDER BY measured_at, id"
        );
        sqlx::query_as::<_, BehaviorPerformance>(&query)
            .bind(activity_instance_id)
            .fetch_all(pool)
            .await
    }

    /// Correct a measurement. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBehaviorPerformance,
    ) -> Result<Option<BehaviorPerformance>, sqlx::Error> {
        let query = format!(
            "UPDATE behavior_performances SET
                metric = COALESCE($2, metric),
                value = COALESCE($3, value),
                unit = COALESCE($4, unit),
                measured_at = COALESCE($5, measured_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BehaviorPerformance>(&query)
            .bind(id)
            .bind(&input.metric)
            .bind(input.value)
            .bind(&input.unit)
            .bind(input.measured_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a measurement by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM behavior_performances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
