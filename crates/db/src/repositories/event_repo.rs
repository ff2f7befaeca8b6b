//! Repository for the `event_types` and `events` tables.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::event::{Event, EventType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_type_id, source_entity_type, source_entity_id, actor_id, \
                       payload, created_at, updated_at";

const TYPE_COLUMNS: &str = "id, name, category, description, is_critical, created_at, updated_at";

/// Provides append and read operations over the domain event log.
pub struct EventRepo;

impl EventRepo {
    /// Resolve an event type by its unique name.
    pub async fn find_type_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM event_types WHERE name = $1");
        sqlx::query_as::<_, EventType>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every registered event type, sorted by name.
    pub async fn list_types(pool: &PgPool) -> Result<Vec<EventType>, sqlx::Error> {
        let query = format!("SELECT {TYPE_COLUMNS} FROM event_types ORDER BY name");
        sqlx::query_as::<_, EventType>(&query).fetch_all(pool).await
    }

    /// Append an event to the log.
    pub async fn insert(
        pool: &PgPool,
        event_type_id: DbId,
        source_entity_type: Option<&str>,
        source_entity_id: Option<DbId>,
        actor_id: Option<DbId>,
        payload: &serde_json::Value,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (event_type_id, source_entity_type, source_entity_id, actor_id, payload)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_type_id)
            .bind(source_entity_type)
            .bind(source_entity_id)
            .bind(actor_id)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Page through the log, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
