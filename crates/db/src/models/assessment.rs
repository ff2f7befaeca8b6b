//! Assessment template and assessment run models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `assessments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub max_score: Option<f64>,
    pub activity_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new assessment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssessment {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub max_score: Option<f64>,
    pub activity_id: Option<DbId>,
}

/// DTO for updating an assessment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssessment {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_score: Option<f64>,
    pub activity_id: Option<DbId>,
}

/// A row from the `assessment_instances` table: one run of an assessment
/// by a patient, with the score recorded on finish.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssessmentInstance {
    pub id: DbId,
    pub assessment_id: DbId,
    pub patient_id: DbId,
    pub activity_instance_id: Option<DbId>,
    pub score: Option<f64>,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an assessment run.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssessmentInstance {
    pub assessment_id: DbId,
    pub patient_id: DbId,
    pub activity_instance_id: Option<DbId>,
}

/// Body for the finish transition: the score achieved, if any.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinishAssessment {
    pub score: Option<f64>,
}

/// Query parameters for filtered assessment-instance listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentInstanceListQuery {
    pub patient_id: Option<DbId>,
    pub status_id: Option<StatusId>,
}
