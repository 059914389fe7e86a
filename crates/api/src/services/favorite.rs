//! Favorite operations.

use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::favorite::FavoriteTarget;
use hallyu_core::types::EntityId;
use hallyu_db::models::favorite::{CreateFavorite, Favorite};
use hallyu_db::repositories::{AlbumRepo, ArtistRepo, FavoriteRepo, TrackRepo, UserRepo};
use hallyu_db::DbPool;

use crate::error::classify_db_error;

/// Record a favorite for `user_id`. The tagged `target` guarantees exactly
/// one referent; both the user and the referent must exist.
pub async fn add_favorite(
    pool: &DbPool,
    user_id: EntityId,
    target: FavoriteTarget,
) -> CoreResult<Favorite> {
    if UserRepo::find_by_id(pool, user_id)
        .await
        .map_err(classify_db_error)?
        .is_none()
    {
        return Err(CoreError::NotFound {
            entity: "User",
            id: user_id,
        });
    }

    let referent_exists = match target {
        FavoriteTarget::Artist(id) => ArtistRepo::find_by_id(pool, id)
            .await
            .map_err(classify_db_error)?
            .is_some(),
        FavoriteTarget::Album(id) => AlbumRepo::find_by_id(pool, id)
            .await
            .map_err(classify_db_error)?
            .is_some(),
        FavoriteTarget::Track(id) => TrackRepo::find_by_id(pool, id)
            .await
            .map_err(classify_db_error)?
            .is_some(),
    };
    if !referent_exists {
        return Err(CoreError::Integrity(
            "favorite references an entity that does not exist".into(),
        ));
    }

    let data = CreateFavorite { user_id, target };
    FavoriteRepo::create(pool, &data)
        .await
        .map_err(classify_db_error)
}

/// All favorites of a user, newest first.
pub async fn favorites_by_user(pool: &DbPool, user_id: EntityId) -> CoreResult<Vec<Favorite>> {
    FavoriteRepo::list_by_user(pool, user_id)
        .await
        .map_err(classify_db_error)
}

/// Returns `false` when the id does not exist.
pub async fn remove_favorite(pool: &DbPool, id: EntityId) -> CoreResult<bool> {
    FavoriteRepo::delete(pool, id).await.map_err(classify_db_error)
}
