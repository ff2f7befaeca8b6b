//! Patient/professional interaction model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `interactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interaction {
    pub id: DbId,
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    pub channel: String,
    pub notes: Option<String>,
    pub occurred_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an interaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInteraction {
    pub patient_id: DbId,
    pub professional_id: Option<DbId>,
    /// e.g. "phone", "in_person", "app_message".
    #[validate(length(min = 1))]
    pub channel: String,
    pub notes: Option<String>,
    /// Defaults to NOW() if omitted.
    pub occurred_at: Option<Timestamp>,
}

/// DTO for updating an interaction. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInteraction {
    pub professional_id: Option<DbId>,
    pub channel: Option<String>,
    pub notes: Option<String>,
    pub occurred_at: Option<Timestamp>,
}

/// Query parameters for filtered interaction listing.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionListQuery {
    pub patient_id: Option<DbId>,
}
