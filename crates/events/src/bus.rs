//! In-process event bus.
//!
//! Mutating handlers publish a [`DomainEvent`] after each successful
//! state change; the persistence service subscribes and writes every
//! event to the log. Publishing never blocks the request path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use bci_core::types::DbId;

use crate::name::EventName;

/// Envelope published on the bus for one state change.
///
/// The event name carries the entity kind, so the envelope only needs
/// the row id of the subject; `entity()` on the name yields the
/// `source_entity_type` stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Catalog entry identifying what happened.
    pub name: EventName,

    /// Row id of the entity the event is about.
    pub source_id: Option<DbId>,

    /// Actor that triggered the change, when known.
    pub actor_id: Option<DbId>,

    /// Event-specific JSON payload.
    pub payload: serde_json::Value,

    /// When the change happened (UTC).
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            source_id: None,
            actor_id: None,
            payload: serde_json::Value::Object(Default::default()),
            occurred_at: Utc::now(),
        }
    }

    /// Record which row the event is about.
    pub fn with_source(mut self, id: DbId) -> Self {
        self.source_id = Some(id);
        self
    }

    /// Record who triggered the change.
    pub fn with_actor(mut self, actor_id: DbId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// The `source_entity_type` value for the event log, derived from
    /// the event name.
    pub fn entity(&self) -> &'static str {
        self.name.entity()
    }
}

/// Broadcast channel buffer. A full buffer drops the oldest messages;
/// slow subscribers observe `RecvError::Lagged`.
const CHANNEL_CAPACITY: usize = 1024;

/// Fan-out hub for [`DomainEvent`]s, shared as `Arc<EventBus>`.
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver an event to every current subscriber.
    ///
    /// With zero subscribers the event is dropped; the persistence
    /// service holds a subscription for the life of the process, so in
    /// normal operation every event reaches the log.
    pub fn publish(&self, event: DomainEvent) {
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(receivers, "event published");
            }
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!(name = %event.name, "event dropped, no subscribers");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(CHANNEL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::InstanceKind;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(
            DomainEvent::new(EventName::GoalAchieved)
                .with_source(42)
                .with_actor(7)
                .with_payload(serde_json::json!({"patient_id": 3})),
        );

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, EventName::GoalAchieved);
        assert_eq!(event.entity(), "goal_setting");
        assert_eq!(event.source_id, Some(42));
        assert_eq!(event.actor_id, Some(7));
        assert_eq!(event.payload["patient_id"], 3);
    }

    #[tokio::test]
    async fn every_subscriber_gets_its_own_copy() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(DomainEvent::new(EventName::Started(InstanceKind::Bci)).with_source(1));

        assert_eq!(rx1.recv().await.unwrap().source_id, Some(1));
        assert_eq!(rx2.recv().await.unwrap().source_id, Some(1));
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = EventBus::default();
        bus.publish(DomainEvent::new(EventName::ReferralAccepted));
    }

    #[tokio::test]
    async fn slow_subscriber_lags_instead_of_blocking_publishers() {
        let bus = EventBus::new(2);
        let mut rx = bus.subscribe();

        for id in 0..5 {
            bus.publish(DomainEvent::new(EventName::Started(InstanceKind::Activity)).with_source(id));
        }

        // The two oldest surviving messages are ids 3 and 4.
        match rx.recv().await {
            Err(broadcast::error::RecvError::Lagged(skipped)) => assert_eq!(skipped, 3),
            other => panic!("expected Lagged, got {other:?}"),
        }
        assert_eq!(rx.recv().await.unwrap().source_id, Some(3));
    }

    #[test]
    fn envelope_serializes_name_as_string() {
        let event = DomainEvent::new(EventName::Finished(InstanceKind::Assessment)).with_source(9);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "assessment_instance.finished");
        assert_eq!(json["source_id"], 9);
    }
}
