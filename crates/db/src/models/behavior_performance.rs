//! Behavior performance measurement model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `behavior_performances` table: a single measured value
/// of a behavioral metric for a patient.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BehaviorPerformance {
    pub id: DbId,
    pub patient_id: DbId,
    pub activity_instance_id: Option<DbId>,
    pub metric: String,
    pub value: f64,
    pub unit: Option<String>,
    pub measured_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a performance measurement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBehaviorPerformance {
    pub patient_id: DbId,
    pub activity_instance_id: Option<DbId>,
    /// e.g. "steps", "minutes_active", "sessions_completed".
    #[validate(length(min = 1))]
    pub metric: String,
    pub value: f64,
    pub unit: Option<String>,
    /// Defaults to NOW() if omitted.
    pub measured_at: Option<Timestamp>,
}

/// DTO for correcting a measurement. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBehaviorPerformance {
    pub metric: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub measured_at: Option<Timestamp>,
}

/// Query parameters for filtered performance listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorPerformanceListQuery {
    pub patient_id: Option<DbId>,
    /// Inclusive lower bound on `measured_at`.
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on `measured_at`.
    pub to: Option<Timestamp>,
}
