//! Educational content model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use bci_core::types::{DbId, Timestamp};

/// A row from the `contents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Content {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub format: Option<String>,
    pub activity_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContent {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub format: Option<String>,
    pub activity_id: Option<DbId>,
}

/// DTO for updating a content item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub format: Option<String>,
    pub activity_id: Option<DbId>,
}

/// Query parameters for filtered content listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentListQuery {
    pub activity_id: Option<DbId>,
}
