//! Activity models and the link DTOs for module composition and role
//! requirements.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `bci_activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivity {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

/// DTO for updating an existing activity. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActivity {
    pub name: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

/// An activity joined through `composed_of`, as listed under a module.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleActivity {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub sequence_index: i32,
}

/// DTO for linking an activity into a module.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkActivity {
    pub activity_id: DbId,
    pub sequence_index: i32,
}

/// DTO for linking a role to an activity (requires/develops).
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRole {
    pub role_id: DbId,
}
