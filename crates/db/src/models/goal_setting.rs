//! Goal setting model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `goal_settings` table. Goals start Open; achieving or
/// abandoning one stamps `resolved_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoalSetting {
    pub id: DbId,
    pub patient_id: DbId,
    pub bci_instance_id: Option<DbId>,
    pub description: String,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub status_id: StatusId,
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for setting a goal.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGoalSetting {
    pub patient_id: DbId,
    pub bci_instance_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub description: String,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<NaiveDate>,
}

/// DTO for updating a goal's non-status fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoalSetting {
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<NaiveDate>,
}

/// Query parameters for filtered goal listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalSettingListQuery {
    pub patient_id: Option<DbId>,
    pub status_id: Option<StatusId>,
}
