//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod actor;
pub mod assessment;
pub mod behavior_performance;
pub mod content;
pub mod event;
pub mod goal_setting;
pub mod instance;
pub mod interaction;
pub mod intervention;
pub mod patient;
pub mod professional;
pub mod referral;
pub mod reporting;
pub mod role;
pub mod status;
