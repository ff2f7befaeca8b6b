//! Repository for the `assessment_instances` table.

use sqlx::PgPool;

use bci_core::lifecycle::{FINISHED, IN_PROGRESS};
use bci_core::types::DbId;

use crate::models::assessment::{
    AssessmentInstance, AssessmentInstanceListQuery, CreateAssessmentInstance,
};
use crate::repositories::lifecycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, assessment_id, patient_id, activity_instance_id, score, status_id, \
                       entered_at, exited_at, version, created_at, updated_at";

const TABLE: &str = "assessment_instances";

/// Provides CRUD and lifecycle operations for assessment runs.
pub struct AssessmentInstanceRepo;

impl AssessmentInstanceRepo {
    /// Schedule an assessment run for a patient, optionally tied to the
    /// activity instance that prompted it.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssessmentInstance,
    ) -> Result<AssessmentInstance, sqlx::Error> {
        let query = format!(
            "INSERT INTO assessment_instances (assessment_id, patient_id, activity_instance_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssessmentInstance>(&query)
            .bind(input.assessment_id)
            .bind(input.patient_id)
            .bind(input.activity_instance_id)
            .fetch_one(pool)
            .await
    }

    /// Find an assessment run by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssessmentInstance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessment_instances WHERE id = $1");
        sqlx::query_as::<_, AssessmentInstance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assessment runs, optionally filtered by patient and status,
    /// newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &AssessmentInstanceListQuery,
    ) -> Result<Vec<AssessmentInstance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assessment_instances
             WHERE ($1::bigint IS NULL OR patient_id = $1)
               AND ($2::smallint IS NULL OR status_id = $2)
             ORDER BY created_at DESC, id"
        );
        sqlx::query_as::<_, AssessmentInstance>(&query)
            .bind(filter.patient_id)
            .bind(filter.status_id)
            .fetch_all(pool)
            .await
    }

    /// NotStarted -> InProgress. `None` means the CAS guard failed.
    pub async fn start(pool: &PgPool, id: DbId) -> Result<Option<AssessmentInstance>, sqlx::Error> {
        lifecycle::start(pool, TABLE, COLUMNS, id).await
    }

    /// InProgress -> Finished, recording the score in the same statement.
    /// A `None` score leaves any previously stored value in place.
    pub async fn finish(
        pool: &PgPool,
        id: DbId,
        score: Option<f64>,
    ) -> Result<Option<AssessmentInstance>, sqlx::Error> {
        let query = format!(
            "UPDATE assessment_instances SET
                score = COALESCE($2, score),
                status_id = {FINISHED},
                exited_at = NOW(),
                version = version + 1
             WHERE id = $1 AND status_id = {IN_PROGRESS}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssessmentInstance>(&query)
            .bind(id)
            .bind(score)
            .fetch_optional(pool)
            .await
    }

    /// NotStarted or InProgress -> Abandoned.
    pub async fn abandon(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssessmentInstance>, sqlx::Error> {
        lifecycle::abandon(pool, TABLE, COLUMNS, id).await
    }

    /// Delete an assessment run by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assessment_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
