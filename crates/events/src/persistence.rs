//! Background writer that turns bus traffic into `events` rows.
//!
//! [`EventPersistence`] drains a bus subscription until the sender is
//! dropped, writing each [`DomainEvent`] through [`EventRepo`]. Failed
//! writes are logged and skipped so one bad event cannot stall the loop.

use tokio::sync::broadcast;

use bci_db::repositories::EventRepo;
use bci_db::DbPool;

use crate::bus::DomainEvent;

/// Long-lived task persisting published events to the database.
pub struct EventPersistence;

impl EventPersistence {
    /// Drain the subscription until the bus is dropped.
    ///
    /// A lagged receiver loses the oldest messages but keeps running;
    /// the skip count is logged so the gap in the event log is
    /// explainable.
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<DomainEvent>) {
        let mut written: u64 = 0;
        loop {
            let event = match receiver.recv().await {
                Ok(event) => event,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event persistence fell behind, events lost");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };

            match Self::persist(&pool, &event).await {
                Ok(()) => written += 1,
                Err(e) => {
                    tracing::error!(name = %event.name, error = %e, "failed to persist event");
                }
            }
        }
        tracing::info!(written, "event bus closed, persistence shutting down");
    }

    /// Write one event, resolving its catalog name to the
    /// `event_types` row it was seeded under.
    ///
    /// [`EventName`](crate::name::EventName) guarantees the name is in
    /// the catalog; a failed lookup therefore means the database seeds
    /// are out of step with this build and is reported as an error.
    async fn persist(pool: &DbPool, event: &DomainEvent) -> Result<(), sqlx::Error> {
        let event_type = EventRepo::find_type_by_name(pool, event.name.as_str())
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        EventRepo::insert(
            pool,
            event_type.id,
            Some(event.entity()),
            event.source_id,
            event.actor_id,
            &event.payload,
        )
        .await?;
        Ok(())
    }
}
