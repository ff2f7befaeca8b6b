//! HTTP handlers, one module per resource family.

pub mod activity;
pub mod activity_instance;
pub mod actor;
pub mod assessment;
pub mod assessment_instance;
pub mod bci_instance;
pub mod behavior_performance;
pub mod block;
pub mod block_instance;
pub mod content;
pub mod event;
pub mod goal_setting;
pub mod interaction;
pub mod intervention;
pub mod module;
pub mod module_instance;
pub mod patient;
pub mod phase;
pub mod phase_instance;
pub mod professional;
pub mod referral;
pub mod reporting;
pub mod role;

use validator::Validate;

use bci_core::error::CoreError;
use bci_core::lifecycle;

use crate::error::AppError;

/// Run `validator` checks on a create DTO, mapping failures to 400.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// Build the 409 returned when a lifecycle CAS transition finds the row
/// in an unexpected state.
///
/// `from` is the status observed before the UPDATE. If the transition
/// would have been legal from that status, the CAS lost a race against a
/// concurrent transition.
pub(crate) fn lifecycle_conflict(from: i16, to: i16) -> AppError {
    let message = match lifecycle::validate_transition(from, to) {
        Err(msg) => msg,
        Ok(()) => format!(
            "Concurrent transition from {} ({from})",
            lifecycle::status_name(from)
        ),
    };
    AppError::Core(CoreError::Conflict(message))
}
