//! Health care professional model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `health_care_professionals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professional {
    pub id: DbId,
    pub actor_id: DbId,
    pub specialty: Option<String>,
    pub license_number: String,
    pub organization: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new professional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfessional {
    pub actor_id: DbId,
    pub specialty: Option<String>,
    #[validate(length(min = 1))]
    pub license_number: String,
    pub organization: Option<String>,
}

/// DTO for updating an existing professional. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfessional {
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub organization: Option<String>,
}
