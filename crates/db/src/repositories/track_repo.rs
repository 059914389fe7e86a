//! Repository for the `tracks` table.

use hallyu_core::types::EntityId;
use sqlx::PgPool;

use crate::models::track::{CreateTrack, Track, UpdateTrack};
use crate::repositories::like_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, album_id, artist_id, title, korean_title, duration, track_number, \
                       is_title, music_video_url";

/// Provides CRUD, search, and count operations for tracks.
///
/// Track listings are always ordered by ascending track number; the
/// `uq_tracks_album_track_number` constraint keeps numbers unique per album.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (album_id, artist_id, title, korean_title, duration, track_number, is_title, music_video_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(input.album_id)
            .bind(input.artist_id)
            .bind(&input.title)
            .bind(&input.korean_title)
            .bind(input.duration)
            .bind(input.track_number)
            .bind(input.is_title)
            .bind(&input.music_video_url)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks of an album, ordered by ascending track number.
    pub async fn list_by_album(
        pool: &PgPool,
        album_id: EntityId,
    ) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks
             WHERE album_id = $1
             ORDER BY track_number ASC"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Update a track. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                title = COALESCE($2, title),
                korean_title = COALESCE($3, korean_title),
                duration = COALESCE($4, duration),
                track_number = COALESCE($5, track_number),
                is_title = COALESCE($6, is_title),
                music_video_url = COALESCE($7, music_video_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.korean_title)
            .bind(input.duration)
            .bind(input.track_number)
            .bind(input.is_title)
            .bind(&input.music_video_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over `title` and `korean_title`.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Track>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM tracks
             WHERE title ILIKE $1 OR korean_title ILIKE $1
             ORDER BY title ASC"
        );
        sqlx::query_as::<_, Track>(&sql)
            .bind(like_pattern(query))
            .fetch_all(pool)
            .await
    }

    /// Total number of tracks.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
            .fetch_one(pool)
            .await
    }
}
