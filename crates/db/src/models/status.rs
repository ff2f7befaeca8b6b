//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Behavior change intervention (template) lifecycle status.
    InterventionStatus {
        Draft = 1,
        Active = 2,
        Retired = 3,
    }
}

define_status_enum! {
    /// Runtime instance lifecycle status, shared by every `*_instances` table.
    InstanceStatus {
        NotStarted = 1,
        InProgress = 2,
        Finished = 3,
        Abandoned = 4,
    }
}

define_status_enum! {
    /// Referral workflow status.
    ReferralStatus {
        Pending = 1,
        Accepted = 2,
        Declined = 3,
        Completed = 4,
    }
}

define_status_enum! {
    /// Goal-setting workflow status.
    GoalStatus {
        Open = 1,
        Achieved = 2,
        Abandoned = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bci_core::{care, lifecycle};

    #[test]
    fn intervention_status_ids_match_seed_data() {
        assert_eq!(InterventionStatus::Draft.id(), 1);
        assert_eq!(InterventionStatus::Active.id(), 2);
        assert_eq!(InterventionStatus::Retired.id(), 3);
    }

    #[test]
    fn instance_status_ids_match_state_machine_constants() {
        assert_eq!(InstanceStatus::NotStarted.id(), lifecycle::NOT_STARTED);
        assert_eq!(InstanceStatus::InProgress.id(), lifecycle::IN_PROGRESS);
        assert_eq!(InstanceStatus::Finished.id(), lifecycle::FINISHED);
        assert_eq!(InstanceStatus::Abandoned.id(), lifecycle::ABANDONED);
    }

    #[test]
    fn referral_status_ids_match_state_machine_constants() {
        assert_eq!(ReferralStatus::Pending.id(), care::referral::PENDING);
        assert_eq!(ReferralStatus::Accepted.id(), care::referral::ACCEPTED);
        assert_eq!(ReferralStatus::Declined.id(), care::referral::DECLINED);
        assert_eq!(ReferralStatus::Completed.id(), care::referral::COMPLETED);
    }

    #[test]
    fn goal_status_ids_match_state_machine_constants() {
        assert_eq!(GoalStatus::Open.id(), care::goal::OPEN);
        assert_eq!(GoalStatus::Achieved.id(), care::goal::ACHIEVED);
        assert_eq!(GoalStatus::Abandoned.id(), care::goal::ABANDONED);
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = InstanceStatus::InProgress.into();
        assert_eq!(id, 2);
    }
}
