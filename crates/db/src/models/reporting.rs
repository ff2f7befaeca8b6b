//! Reporting (clinical note/report) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `reportings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reporting {
    pub id: DbId,
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    pub title: String,
    pub body: Option<String>,
    pub reported_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a report.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReporting {
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub title: String,
    pub body: Option<String>,
    /// Defaults to NOW() if omitted.
    pub reported_at: Option<Timestamp>,
}

/// DTO for updating a report. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReporting {
    pub professional_id: Option<DbId>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Query parameters for filtered reporting listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingListQuery {
    pub patient_id: Option<DbId>,
}
