//! Album entity model, release-format enum, and DTOs.

use chrono::NaiveDate;
use hallyu_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Release format of an album, mirrored by the Postgres `album_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "album_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlbumType {
    #[sqlx(rename = "SINGLE")]
    Single,
    #[sqlx(rename = "MINI_ALBUM")]
    MiniAlbum,
    #[sqlx(rename = "FULL_ALBUM")]
    FullAlbum,
    #[sqlx(rename = "REPACKAGE")]
    Repackage,
    #[sqlx(rename = "SPECIAL")]
    Special,
    #[sqlx(rename = "JAPANESE")]
    Japanese,
    #[sqlx(rename = "DIGITAL_SINGLE")]
    DigitalSingle,
}

/// An album row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: EntityId,
    pub artist_id: EntityId,
    pub title: String,
    pub korean_title: Option<String>,
    pub release_date: NaiveDate,
    pub album_type: AlbumType,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new album.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub artist_id: EntityId,
    pub title: String,
    pub korean_title: Option<String>,
    pub release_date: NaiveDate,
    pub album_type: AlbumType,
    pub cover_url: Option<String>,
}

/// DTO for updating an existing album. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlbum {
    pub title: Option<String>,
    pub korean_title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub album_type: Option<AlbumType>,
    pub cover_url: Option<String>,
}
