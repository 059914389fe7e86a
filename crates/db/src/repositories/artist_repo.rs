//! Repository for the `artists` table.

use hallyu_core::pagination::{clamp_skip, clamp_take};
use hallyu_core::types::EntityId;
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};
use crate::repositories::like_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, korean_name, debut_date, company, image_url, is_active, created_at, updated_at";

/// Provides CRUD, search, and count operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, korean_name, debut_date, company, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.korean_name)
            .bind(input.debut_date)
            .bind(&input.company)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List artists ordered by name ascending, with clamped skip/take.
    pub async fn list(
        pool: &PgPool,
        skip: Option<i64>,
        take: Option<i64>,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists
             ORDER BY name ASC
             OFFSET $1 LIMIT $2"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(clamp_skip(skip))
            .bind(clamp_take(take))
            .fetch_all(pool)
            .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed, `id` and `created_at` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                korean_name = COALESCE($3, korean_name),
                debut_date = COALESCE($4, debut_date),
                company = COALESCE($5, company),
                image_url = COALESCE($6, image_url),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.korean_name)
            .bind(input.debut_date)
            .bind(&input.company)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist by id. Returns `true` if a row was removed.
    ///
    /// Dependent members, albums, tracks, and favorites are removed by
    /// `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over `name` and `korean_name`.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Artist>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM artists
             WHERE name ILIKE $1 OR korean_name ILIKE $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Artist>(&sql)
            .bind(like_pattern(query))
            .fetch_all(pool)
            .await
    }

    /// Total number of artists.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await
    }
}
