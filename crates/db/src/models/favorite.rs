//! Favorite entity model and DTO.

use hallyu_core::favorite::FavoriteTarget;
use hallyu_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A favorite row from the `favorites` table.
///
/// Exactly one of `artist_id` / `album_id` / `track_id` is set (enforced by
/// the service layer's [`FavoriteTarget`] and backstopped by a CHECK
/// constraint).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: EntityId,
    pub user_id: EntityId,
    pub artist_id: Option<EntityId>,
    pub album_id: Option<EntityId>,
    pub track_id: Option<EntityId>,
    pub created_at: Timestamp,
}

/// DTO for creating a new favorite. Carrying the tagged variant instead of
/// three optional ids keeps the exactly-one-of guarantee through to the
/// insert.
#[derive(Debug, Clone)]
pub struct CreateFavorite {
    pub user_id: EntityId,
    pub target: FavoriteTarget,
}
