//! Repository for the `referrals` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::referral::{CreateReferral, Referral, ReferralListQuery, UpdateReferral};
use crate::models::status::ReferralStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, patient_id, referred_by, referred_to, reason, status_id, \
                       referred_at, resolved_at, created_at, updated_at";

/// Provides CRUD and workflow operations for referrals.
pub struct ReferralRepo;

impl ReferralRepo {
    /// Create a new referral in the Pending state.
    pub async fn create(pool: &PgPool, input: &CreateReferral) -> Result<Referral, sqlx::Error> {
        let query = format!(
            "INSERT INTO referrals (patient_id, referred_by, referred_to, reason)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(input.patient_id)
            .bind(input.referred_by)
            .bind(input.referred_to)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a referral by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Referral>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM referrals WHERE id = $1");
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List referrals, optionally filtered by patient and status, most
    /// recently referred first.
    pub async fn list(
        pool: &PgPool,
        filter: &ReferralListQuery,
    ) -> Result<Vec<Referral>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM referrals
             WHERE ($1::bigint IS NULL OR patient_id = $1)
               AND ($2::smallint IS NULL OR status_id = $2)
             ORDER BY referred_at DESC, id"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(filter.patient_id)
            .bind(filter.status_id)
            .fetch_all(pool)
            .await
    }

    /// Update a referral's non-status fields. Only non-`None` fields are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReferral,
    ) -> Result<Option<Referral>, sqlx::Error> {
        let query = format!(
            "UPDATE referrals SET
                referred_to = COALESCE($2, referred_to),
                reason = COALESCE($3, reason)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .bind(input.referred_to)
            .bind(&input.reason)
            .fetch_optional(pool)
            .await
    }

    /// Pending -> Accepted. CAS on the expected current status; `None`
    /// means the referral was not in Pending.
    pub async fn accept(pool: &PgPool, id: DbId) -> Result<Option<Referral>, sqlx::Error> {
        let to = ReferralStatus::Accepted.id();
        let from = ReferralStatus::Pending.id();
        let query = format!(
            "UPDATE referrals SET status_id = {to}
             WHERE id = $1 AND status_id = {from}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Pending -> Declined, stamping `resolved_at`.
    pub async fn decline(pool: &PgPool, id: DbId) -> Result<Option<Referral>, sqlx::Error> {
        let to = ReferralStatus::Declined.id();
        let from = ReferralStatus::Pending.id();
        let query = format!(
            "UPDATE referrals SET status_id = {to}, resolved_at = NOW()
             WHERE id = $1 AND status_id = {from}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Accepted -> Completed, stamping `resolved_at`.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<Option<Referral>, sqlx::Error> {
        let to = ReferralStatus::Completed.id();
        let from = ReferralStatus::Accepted.id();
        let query = format!(
            "UPDATE referrals SET status_id = {to}, resolved_at = NOW()
             WHERE id = $1 AND status_id = {from}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a referral by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM referrals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
