//! Intervention template hierarchy models: intervention, phase, block,
//! module.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `behavior_change_interventions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Intervention {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status_id: StatusId,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new intervention.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIntervention {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to 1 (Draft) if omitted.
    pub status_id: Option<StatusId>,
    pub created_by: Option<DbId>,
}

/// DTO for updating an existing intervention. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIntervention {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status_id: Option<StatusId>,
}

/// Query parameters for filtered intervention listing.
#[derive(Debug, Clone, Deserialize)]
pub struct InterventionListQuery {
    pub status_id: Option<StatusId>,
}

/// A row from the `bci_phases` table, ordered inside its intervention by
/// `sequence_index`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Phase {
    pub id: DbId,
    pub intervention_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a phase. The intervention id comes from the request
/// path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePhase {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
}

/// DTO for updating a phase. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhase {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sequence_index: Option<i32>,
}

/// A row from the `bci_blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Block {
    pub id: DbId,
    pub phase_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a block under a phase.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlock {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
}

/// DTO for updating a block. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlock {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sequence_index: Option<i32>,
}

/// A row from the `bci_modules` table. A module belongs to a phase and may
/// optionally be grouped into a block of that phase.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub phase_id: DbId,
    pub block_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a module under a phase.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModule {
    pub block_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub sequence_index: i32,
}

/// DTO for updating a module. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateModule {
    pub block_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sequence_index: Option<i32>,
}
