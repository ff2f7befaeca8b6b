//! Referral and goal-setting state machines.
//!
//! Both machines operate on raw status ids matching the seed order of
//! `referral_statuses` and `goal_statuses`.

/// Referral workflow state machine.
pub mod referral {
    /// Referral status ids matching `referral_statuses` seed data (1-based).
    pub const PENDING: i16 = 1;
    pub const ACCEPTED: i16 = 2;
    pub const DECLINED: i16 = 3;
    pub const COMPLETED: i16 = 4;

    /// Returns the set of valid target status ids reachable from `from_status`.
    pub fn valid_transitions(from_status: i16) -> &'static [i16] {
        match from_status {
            // Pending -> Accepted, Declined
            PENDING => &[ACCEPTED, DECLINED],
            // Accepted -> Completed
            ACCEPTED => &[COMPLETED],
            // Terminal states
            DECLINED | COMPLETED => &[],
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
            Err(format!(
                "Invalid referral transition: {} ({from}) -> {} ({to})",
                status_name(from),
                status_name(to)
            ))
        }
    }

    /// Whether a status stamps `resolved_at` when entered.
    pub fn stamps_resolved_at(status: i16) -> bool {
        matches!(status, DECLINED | COMPLETED)
    }

    /// Human-readable name for a status id.
    pub fn status_name(id: i16) -> &'static str {
        match id {
            PENDING => "Pending",
            ACCEPTED => "Accepted",
            DECLINED => "Declined",
            COMPLETED => "Completed",
            _ => "Unknown",
        }
    }
}

/// Goal-setting state machine.
pub mod goal {
    /// Goal status ids matching `goal_statuses` seed data (1-based).
    pub const OPEN: i16 = 1;
    pub const ACHIEVED: i16 = 2;
    pub const ABANDONED: i16 = 3;

    /// Returns the set of valid target status ids reachable from `from_status`.
    pub fn valid_transitions(from_status: i16) -> &'static [i16] {
        match from_status {
            // Open -> Achieved, Abandoned
            OPEN => &[ACHIEVED, ABANDONED],
            // Terminal states
            ACHIEVED | ABANDONED => &[],
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
            Err(format!(
                "Invalid goal transition: {} ({from}) -> {} ({to})",
                status_name(from),
                status_name(to)
            ))
        }
    }

    /// Human-readable name for a status id.
    pub fn status_name(id: i16) -> &'static str {
        match id {
            OPEN => "Open",
            ACHIEVED => "Achieved",
            ABANDONED => "Abandoned",
            _ => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Referral machine
    // -----------------------------------------------------------------------

    #[test]
    fn referral_pending_to_accepted() {
        assert!(referral::can_transition(referral::PENDING, referral::ACCEPTED));
    }

    #[test]
    fn referral_pending_to_declined() {
        assert!(referral::can_transition(referral::PENDING, referral::DECLINED));
    }

    #[test]
    fn referral_accepted_to_completed() {
        assert!(referral::can_transition(referral::ACCEPTED, referral::COMPLETED));
    }

    #[test]
    fn referral_pending_to_completed_invalid() {
        assert!(!referral::can_transition(referral::PENDING, referral::COMPLETED));
    }

    #[test]
    fn referral_declined_is_terminal() {
        assert!(referral::valid_transitions(referral::DECLINED).is_empty());
    }

    #[test]
    fn referral_completed_is_terminal() {
        assert!(referral::valid_transitions(referral::COMPLETED).is_empty());
    }

    #[test]
    fn referral_terminal_states_stamp_resolved_at() {
        assert!(referral::stamps_resolved_at(referral::DECLINED));
        assert!(referral::stamps_resolved_at(referral::COMPLETED));
        assert!(!referral::stamps_resolved_at(referral::ACCEPTED));
        assert!(!referral::stamps_resolved_at(referral::PENDING));
    }

    #[test]
    fn referral_validate_transition_err_names_both_states() {
        let err = referral::validate_transition(referral::DECLINED, referral::ACCEPTED)
            .unwrap_err();
        assert!(err.contains("Declined"));
        assert!(err.contains("Accepted"));
    }

    // -----------------------------------------------------------------------
    // Goal machine
    // -----------------------------------------------------------------------

    #[test]
    fn goal_open_to_achieved() {
        assert!(goal::can_transition(goal::OPEN, goal::ACHIEVED));
    }

    #[test]
    fn goal_open_to_abandoned() {
        assert!(goal::can_transition(goal::OPEN, goal::ABANDONED));
    }

    #[test]
    fn goal_achieved_is_terminal() {
        assert!(goal::valid_transitions(goal::ACHIEVED).is_empty());
    }

    #[test]
    fn goal_abandoned_is_terminal() {
        assert!(goal::valid_transitions(goal::ABANDONED).is_empty());
    }

    #[test]
    fn goal_achieved_to_open_invalid() {
        assert!(!goal::can_transition(goal::ACHIEVED, goal::OPEN));
    }

    #[test]
    fn goal_validate_transition_err() {
        let err = goal::validate_transition(goal::ABANDONED, goal::ACHIEVED).unwrap_err();
        assert!(err.contains("Abandoned"));
        assert!(err.contains("Achieved"));
    }
}
