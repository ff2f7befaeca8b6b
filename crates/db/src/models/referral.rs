//! Referral model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `referrals` table. Status transitions follow the
/// referral state machine; terminal transitions stamp `resolved_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Referral {
    pub id: DbId,
    pub patient_id: DbId,
    pub referred_by: Option<DbId>,
    pub referred_to: Option<DbId>,
    pub reason: String,
    pub status_id: StatusId,
    pub referred_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a referral. Starts in Pending.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReferral {
    pub patient_id: DbId,
    pub referred_by: Option<DbId>,
    pub referred_to: Option<DbId>,
    #[validate(length(min = 1))]
    pub reason: String,
}

/// DTO for updating a referral's non-status fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReferral {
    pub referred_to: Option<DbId>,
    pub reason: Option<String>,
}

/// Query parameters for filtered referral listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferralListQuery {
    pub patient_id: Option<DbId>,
    pub status_id: Option<StatusId>,
}
