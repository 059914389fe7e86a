//! Repository for the `albums` table.

use hallyu_core::pagination::{clamp_skip, clamp_take};
use hallyu_core::types::EntityId;
use sqlx::PgPool;

use crate::models::album::{Album, CreateAlbum, UpdateAlbum};
use crate::repositories::like_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, artist_id, title, korean_title, release_date, album_type, cover_url, created_at";

/// Provides CRUD, search, and count operations for albums.
///
/// Album listings default to descending release date (newest first).
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert a new album, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (artist_id, title, korean_title, release_date, album_type, cover_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(input.artist_id)
            .bind(&input.title)
            .bind(&input.korean_title)
            .bind(input.release_date)
            .bind(input.album_type)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find an album by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List albums ordered by descending release date, with clamped
    /// skip/take. Also serves recent-releases (skip omitted, small take).
    pub async fn list(
        pool: &PgPool,
        skip: Option<i64>,
        take: Option<i64>,
    ) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums
             ORDER BY release_date DESC
             OFFSET $1 LIMIT $2"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(clamp_skip(skip))
            .bind(clamp_take(take))
            .fetch_all(pool)
            .await
    }

    /// List all albums of an artist, ordered by descending release date.
    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: EntityId,
    ) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums
             WHERE artist_id = $1
             ORDER BY release_date DESC"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Update an album. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET
                title = COALESCE($2, title),
                korean_title = COALESCE($3, korean_title),
                release_date = COALESCE($4, release_date),
                album_type = COALESCE($5, album_type),
                cover_url = COALESCE($6, cover_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.korean_title)
            .bind(input.release_date)
            .bind(input.album_type)
            .bind(&input.cover_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an album by id. Returns `true` if a row was removed.
    /// Dependent tracks and favorites are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over `title` and `korean_title`.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Album>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM albums
             WHERE title ILIKE $1 OR korean_title ILIKE $1
             ORDER BY release_date DESC"
        );
        sqlx::query_as::<_, Album>(&sql)
            .bind(like_pattern(query))
            .fetch_all(pool)
            .await
    }

    /// Total number of albums.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM albums")
            .fetch_one(pool)
            .await
    }
}
