//! Repository for the `contents` table.

use sqlx::PgPool;

use bci_core::types::DbId;

use crate::models::content::{Content, ContentListQuery, CreateContent, UpdateContent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, url, format, activity_id, created_at, updated_at";

/// Provides CRUD operations for educational contents.
pub struct ContentRepo;

impl ContentRepo {
    /// Insert a new content item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContent) -> Result<Content, sqlx::Error> {
        let query = format!(
            "INSERT INTO contents (title, description, url, format, activity_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.format)
            .bind(input.activity_id)
            .fetch_one(pool)
            .await
    }

    /// Find a content item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contents, optionally filtered by activity, ordered by title.
    pub async fn list(
        pool: &PgPool,
        filter: &ContentListQuery,
    ) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contents
             WHERE ($1::bigint IS NULL OR activity_id = $1)
             ORDER BY title, id"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(filter.activity_id)
            .fetch_all(pool)
            .await
    }

    /// Update a content item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContent,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                url = COALESCE($4, url),
                format = COALESCE($5, format),
                activity_id = COALESCE($6, activity_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.format)
            .bind(input.activity_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
