//! Runtime instance models for the intervention hierarchy.
//!
//! Every instance row carries the same lifecycle columns: `status_id`
//! (instance_statuses, default NotStarted), `entered_at`/`exited_at`
//! stamps, and a `version` counter bumped by each state transition.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bci_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A row from the `bci_instances` table: one prescription of an
/// intervention to a patient.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BciInstance {
    pub id: DbId,
    pub intervention_id: DbId,
    pub patient_id: DbId,
    pub prescribed_by: Option<DbId>,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for prescribing an intervention to a patient.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBciInstance {
    pub intervention_id: DbId,
    pub patient_id: DbId,
    pub prescribed_by: Option<DbId>,
}

/// DTO for updating an intervention instance's non-lifecycle fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBciInstance {
    pub prescribed_by: Option<DbId>,
}

/// Query parameters for filtered intervention-instance listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BciInstanceListQuery {
    pub patient_id: Option<DbId>,
    pub status_id: Option<StatusId>,
}

/// A row from the `bci_phase_instances` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhaseInstance {
    pub id: DbId,
    pub bci_instance_id: DbId,
    pub phase_id: DbId,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a phase instance. The parent instance id comes from
/// the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhaseInstance {
    pub phase_id: DbId,
}

/// A row from the `bci_block_instances` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlockInstance {
    pub id: DbId,
    pub phase_instance_id: DbId,
    pub block_id: DbId,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a block instance under a phase instance.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlockInstance {
    pub block_id: DbId,
}

/// A row from the `bci_module_instances` table. A module instance belongs
/// to a phase instance and may sit inside a block instance of the same
/// phase instance.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleInstance {
    pub id: DbId,
    pub phase_instance_id: DbId,
    pub block_instance_id: Option<DbId>,
    pub module_id: DbId,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a module instance under a phase instance.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleInstance {
    pub block_instance_id: Option<DbId>,
    pub module_id: DbId,
}

/// A row from the `bci_activity_instances` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityInstance {
    pub id: DbId,
    pub module_instance_id: DbId,
    pub activity_id: DbId,
    pub status_id: StatusId,
    pub entered_at: Option<Timestamp>,
    pub exited_at: Option<Timestamp>,
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an activity instance under a module instance.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityInstance {
    pub activity_id: DbId,
}
