//! Typed catalog of publishable domain events.
//!
//! Every [`EventName`] variant renders to exactly one seeded row in the
//! `event_types` table, so a publisher cannot emit a name the event log
//! does not know about. The catalog and the migration seeds are kept in
//! lockstep by the integration tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which runtime instance table an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Bci,
    Phase,
    Block,
    Module,
    Activity,
    Assessment,
}

impl InstanceKind {
    /// The `source_entity_type` value recorded in the event log.
    pub fn entity(self) -> &'static str {
        match self {
            InstanceKind::Bci => "bci_instance",
            InstanceKind::Phase => "phase_instance",
            InstanceKind::Block => "block_instance",
            InstanceKind::Module => "module_instance",
            InstanceKind::Activity => "activity_instance",
            InstanceKind::Assessment => "assessment_instance",
        }
    }

    const ALL: [InstanceKind; 6] = [
        InstanceKind::Bci,
        InstanceKind::Phase,
        InstanceKind::Block,
        InstanceKind::Module,
        InstanceKind::Activity,
        InstanceKind::Assessment,
    ];
}

/// A publishable event, one variant per seeded `event_types.name`.
///
/// Lifecycle events are parameterized over the instance kind; care
/// coordination events are standalone. Serializes as the dotted name
/// string (e.g. `"phase_instance.finished"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventName {
    Started(InstanceKind),
    Finished(InstanceKind),
    Abandoned(InstanceKind),
    ReferralAccepted,
    ReferralDeclined,
    ReferralCompleted,
    GoalAchieved,
    GoalAbandoned,
}

impl EventName {
    /// The `event_types.name` this event persists under.
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::Started(kind) => match kind {
                InstanceKind::Bci => "bci_instance.started",
                InstanceKind::Phase => "phase_instance.started",
                InstanceKind::Block => "block_instance.started",
                InstanceKind::Module => "module_instance.started",
                InstanceKind::Activity => "activity_instance.started",
                InstanceKind::Assessment => "assessment_instance.started",
            },
            EventName::Finished(kind) => match kind {
                InstanceKind::Bci => "bci_instance.finished",
                InstanceKind::Phase => "phase_instance.finished",
                InstanceKind::Block => "block_instance.finished",
                InstanceKind::Module => "module_instance.finished",
                InstanceKind::Activity => "activity_instance.finished",
                InstanceKind::Assessment => "assessment_instance.finished",
            },
            EventName::Abandoned(kind) => match kind {
                InstanceKind::Bci => "bci_instance.abandoned",
                InstanceKind::Phase => "phase_instance.abandoned",
                InstanceKind::Block => "block_instance.abandoned",
                InstanceKind::Module => "module_instance.abandoned",
                InstanceKind::Activity => "activity_instance.abandoned",
                InstanceKind::Assessment => "assessment_instance.abandoned",
            },
            EventName::ReferralAccepted => "referral.accepted",
            EventName::ReferralDeclined => "referral.declined",
            EventName::ReferralCompleted => "referral.completed",
            EventName::GoalAchieved => "goal.achieved",
            EventName::GoalAbandoned => "goal.abandoned",
        }
    }

    /// The entity kind this event is about, recorded as
    /// `source_entity_type` in the event log.
    pub fn entity(self) -> &'static str {
        match self {
            EventName::Started(kind) | EventName::Finished(kind) | EventName::Abandoned(kind) => {
                kind.entity()
            }
            EventName::ReferralAccepted
            | EventName::ReferralDeclined
            | EventName::ReferralCompleted => "referral",
            EventName::GoalAchieved | EventName::GoalAbandoned => "goal_setting",
        }
    }

    /// Every catalog entry, in seed order. Lets tests verify the catalog
    /// against the `event_types` table.
    pub fn all() -> Vec<EventName> {
        let mut names = Vec::with_capacity(23);
        for kind in InstanceKind::ALL {
            names.push(EventName::Started(kind));
            names.push(EventName::Finished(kind));
            names.push(EventName::Abandoned(kind));
        }
        names.extend([
            EventName::ReferralAccepted,
            EventName::ReferralDeclined,
            EventName::ReferralCompleted,
            EventName::GoalAchieved,
            EventName::GoalAbandoned,
        ]);
        names
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a name string with no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventName(pub String);

impl fmt::Display for UnknownEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event name: {}", self.0)
    }
}

impl std::error::Error for UnknownEventName {}

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::all()
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_owned()))
    }
}

impl From<EventName> for String {
    fn from(name: EventName) -> Self {
        name.as_str().to_owned()
    }
}

impl TryFrom<String> for EventName {
    type Error = UnknownEventName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_instance_kinds_and_care_events() {
        let names = EventName::all();
        assert_eq!(names.len(), 23);
        assert!(names.contains(&EventName::Started(InstanceKind::Assessment)));
        assert!(names.contains(&EventName::GoalAbandoned));
    }

    #[test]
    fn every_name_round_trips_through_from_str() {
        for name in EventName::all() {
            let parsed: EventName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut strings: Vec<&str> = EventName::all().iter().map(|n| n.as_str()).collect();
        strings.sort();
        strings.dedup();
        assert_eq!(strings.len(), 23);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "bci_instance.startted".parse::<EventName>().unwrap_err();
        assert_eq!(err, UnknownEventName("bci_instance.startted".into()));
    }

    #[test]
    fn entity_is_derived_from_the_name() {
        assert_eq!(EventName::Finished(InstanceKind::Phase).entity(), "phase_instance");
        assert_eq!(EventName::ReferralDeclined.entity(), "referral");
        assert_eq!(EventName::GoalAchieved.entity(), "goal_setting");
    }

    #[test]
    fn serializes_as_the_dotted_name() {
        let json = serde_json::to_string(&EventName::Started(InstanceKind::Bci)).unwrap();
        assert_eq!(json, "\"bci_instance.started\"");

        let back: EventName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EventName::Started(InstanceKind::Bci));
    }
}
