//! Catalog-wide entity counts.

use hallyu_core::error::CoreResult;
use hallyu_db::repositories::{
    AlbumRepo, ArtistRepo, FavoriteRepo, MemberRepo, TrackRepo, UserRepo,
};
use hallyu_db::DbPool;

use crate::error::classify_db_error;

/// Counts of every entity kind. Each count is computed independently; the
/// six reads are not a consistent snapshot of one instant.
#[derive(Debug, Clone, Copy)]
pub struct CatalogCounts {
    pub artists: i64,
    pub albums: i64,
    pub tracks: i64,
    pub members: i64,
    pub users: i64,
    pub favorites: i64,
}

pub async fn statistics(pool: &DbPool) -> CoreResult<CatalogCounts> {
    let (artists, albums, tracks, members, users, favorites) = tokio::try_join!(
        ArtistRepo::count(pool),
        AlbumRepo::count(pool),
        TrackRepo::count(pool),
        MemberRepo::count(pool),
        UserRepo::count(pool),
        FavoriteRepo::count(pool),
    )
    .map_err(classify_db_error)?;

    Ok(CatalogCounts {
        artists,
        albums,
        tracks,
        members,
        users,
        favorites,
    })
}
