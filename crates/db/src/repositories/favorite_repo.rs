//! Repository for the `favorites` table.

use hallyu_core::types::EntityId;
use sqlx::PgPool;

use crate::models::favorite::{CreateFavorite, Favorite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, artist_id, album_id, track_id, created_at";

/// Provides create/list/delete and count operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a new favorite, returning the created row. The tagged target
    /// supplies exactly one non-null referent column.
    pub async fn create(pool: &PgPool, input: &CreateFavorite) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, artist_id, album_id, track_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(input.user_id)
            .bind(input.target.artist_id())
            .bind(input.target.album_id())
            .bind(input.target.track_id())
            .fetch_one(pool)
            .await
    }

    /// List all favorites of a user, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: EntityId,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a favorite by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of favorites.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
            .fetch_one(pool)
            .await
    }
}
