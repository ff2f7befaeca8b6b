//! Instance lifecycle state machine.
//!
//! Every runtime instance table (intervention, phase, block, module,
//! activity, assessment) shares the same four-state lifecycle seeded in
//! `instance_statuses`. The machine operates on raw status ids so this
//! module stays free of database types.

/// Instance status ids matching `instance_statuses` seed data (1-based).
pub const NOT_STARTED: i16 = 1;
pub const IN_PROGRESS: i16 = 2;
pub const FINISHED: i16 = 3;
pub const ABANDONED: i16 = 4;

/// Returns the set of valid target status ids reachable from `from_status`.
///
/// Finished and Abandoned are terminal and return an empty slice.
pub fn valid_transitions(from_status: i16) -> &'static [i16] {
    match from_status {
        // NotStarted -> InProgress, Abandoned
        NOT_STARTED => &[IN_PROGRESS, ABANDONED],
        // InProgress -> Finished, Abandoned
        IN_PROGRESS => &[FINISHED, ABANDONED],
        // Terminal states
        FINISHED | ABANDONED => &[],
        // Unknown status: no transitions allowed
        _ => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: i16, to: i16) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a state transition, returning an error message for invalid ones.
pub fn validate_transition(from: i16, to: i16) -> Result<(), String> {
    if can_transition(from, to) {
        Ok(())
    } else {
        let from_name = status_name(from);
        let to_name = status_name(to);
        Err(format!(
            "Invalid transition: {from_name} ({from}) -> {to_name} ({to})"
        ))
    }
}

/// Whether a status is terminal (no outgoing transitions).
pub fn is_terminal(status: i16) -> bool {
    valid_transitions(status).is_empty() && status_name(status) != "Unknown"
}

/// Human-readable name for a status id (for error messages).
pub fn status_name(id: i16) -> &'static str {
    match id {
        NOT_STARTED => "NotStarted",
        IN_PROGRESS => "InProgress",
        FINISHED => "Finished",
        ABANDONED => "Abandoned",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Valid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn not_started_to_in_progress() {
        assert!(can_transition(NOT_STARTED, IN_PROGRESS));
    }

    #[test]
    fn not_started_to_abandoned() {
        assert!(can_transition(NOT_STARTED, ABANDONED));
    }

    #[test]
    fn in_progress_to_finished() {
        assert!(can_transition(IN_PROGRESS, FINISHED));
    }

    #[test]
    fn in_progress_to_abandoned() {
        assert!(can_transition(IN_PROGRESS, ABANDONED));
    }

    // -----------------------------------------------------------------------
    // Terminal states have no outgoing transitions
    // -----------------------------------------------------------------------

    #[test]
    fn finished_has_no_transitions() {
        assert!(valid_transitions(FINISHED).is_empty());
    }

    #[test]
    fn abandoned_has_no_transitions() {
        assert!(valid_transitions(ABANDONED).is_empty());
    }

    #[test]
    fn terminal_flags() {
        assert!(is_terminal(FINISHED));
        assert!(is_terminal(ABANDONED));
        assert!(!is_terminal(NOT_STARTED));
        assert!(!is_terminal(IN_PROGRESS));
        assert!(!is_terminal(99));
    }

    // -----------------------------------------------------------------------
    // Invalid transitions
    // -----------------------------------------------------------------------

    #[test]
    fn not_started_to_finished_invalid() {
        assert!(!can_transition(NOT_STARTED, FINISHED));
    }

    #[test]
    fn finished_to_in_progress_invalid() {
        assert!(!can_transition(FINISHED, IN_PROGRESS));
    }

    #[test]
    fn abandoned_to_in_progress_invalid() {
        assert!(!can_transition(ABANDONED, IN_PROGRESS));
    }

    #[test]
    fn in_progress_to_not_started_invalid() {
        assert!(!can_transition(IN_PROGRESS, NOT_STARTED));
    }

    // -----------------------------------------------------------------------
    // validate_transition returns descriptive error
    // -----------------------------------------------------------------------

    #[test]
    fn validate_transition_ok() {
        assert!(validate_transition(NOT_STARTED, IN_PROGRESS).is_ok());
    }

    #[test]
    fn validate_transition_err() {
        let err = validate_transition(FINISHED, IN_PROGRESS).unwrap_err();
        assert!(err.contains("Finished"));
        assert!(err.contains("InProgress"));
    }

    #[test]
    fn unknown_status_has_no_transitions() {
        assert!(valid_transitions(99).is_empty());
    }
}
