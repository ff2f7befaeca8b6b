//! Domain event infrastructure.
//!
//! - [`EventName`] — typed catalog of publishable events, one variant
//!   per seeded `event_types` row.
//! - [`DomainEvent`] — the envelope published for one state change.
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`EventPersistence`] — background service that durably writes
//!   every published event to the `events` table.

pub mod bus;
pub mod name;
pub mod persistence;

pub use bus::{DomainEvent, EventBus};
pub use name::{EventName, InstanceKind};
pub use persistence::EventPersistence;
