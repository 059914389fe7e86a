//! Repository for the `members` table.

use hallyu_core::types::EntityId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, artist_id, name, korean_name, stage_name, birth_date, position, image_url, is_active";

/// Provides CRUD and count operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (artist_id, name, korean_name, stage_name, birth_date, position, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(input.artist_id)
            .bind(&input.name)
            .bind(&input.korean_name)
            .bind(&input.stage_name)
            .bind(input.birth_date)
            .bind(&input.position)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a member by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all members of an artist, ordered by ascending birth date
    /// (members without a birth date sort last).
    pub async fn list_by_artist(
        pool: &PgPool,
        artist_id: EntityId,
    ) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members
             WHERE artist_id = $1
             ORDER BY birth_date ASC NULLS LAST"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Update a member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                name = COALESCE($2, name),
                korean_name = COALESCE($3, korean_name),
                stage_name = COALESCE($4, stage_name),
                birth_date = COALESCE($5, birth_date),
                position = COALESCE($6, position),
                image_url = COALESCE($7, image_url),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.korean_name)
            .bind(&input.stage_name)
            .bind(input.birth_date)
            .bind(&input.position)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of members.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(pool)
            .await
    }
}
