//! Track entity model and DTOs.

use hallyu_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A track row from the `tracks` table.
///
/// `artist_id` is denormalized: it always matches the owning album's artist.
/// The service layer rejects inserts that would break this.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: EntityId,
    pub album_id: EntityId,
    pub artist_id: EntityId,
    pub title: String,
    pub korean_title: Option<String>,
    /// Duration in seconds.
    pub duration: Option<i32>,
    pub track_number: i32,
    /// Whether this is a promotional/lead single within its album.
    pub is_title: bool,
    pub music_video_url: Option<String>,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub album_id: EntityId,
    pub artist_id: EntityId,
    pub title: String,
    pub korean_title: Option<String>,
    pub duration: Option<i32>,
    pub track_number: i32,
    pub is_title: bool,
    pub music_video_url: Option<String>,
}

/// DTO for updating an existing track. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub korean_title: Option<String>,
    pub duration: Option<i32>,
    pub track_number: Option<i32>,
    pub is_title: Option<bool>,
    pub music_video_url: Option<String>,
}
