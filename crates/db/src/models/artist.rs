//! Artist entity model and DTOs.

use chrono::NaiveDate;
use hallyu_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An artist (group or soloist) row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: EntityId,
    pub name: String,
    pub korean_name: Option<String>,
    pub debut_date: Option<NaiveDate>,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub korean_name: Option<String>,
    pub debut_date: Option<NaiveDate>,
    pub company: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing artist. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub korean_name: Option<String>,
    pub debut_date: Option<NaiveDate>,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
