//! Album operations.

use hallyu_core::dates::{parse_date, parse_opt_date};
use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;
use hallyu_db::models::album::{Album, CreateAlbum, UpdateAlbum};
use hallyu_db::repositories::{AlbumRepo, ArtistRepo};
use hallyu_db::DbPool;

use crate::error::classify_db_error;
use crate::graphql::inputs::{CreateAlbumInput, UpdateAlbumInput};
use crate::services::{parse_ref, require, require_if_present};

/// Default number of albums returned by recent-releases.
const DEFAULT_RECENT_RELEASES: i64 = 10;

pub async fn create_album(pool: &DbPool, input: CreateAlbumInput) -> CoreResult<Album> {
    require("title", &input.title)?;

    let artist_id = parse_ref("artistId", &input.artist_id)?;
    let artist = ArtistRepo::find_by_id(pool, artist_id)
        .await
        .map_err(classify_db_error)?;
    if artist.is_none() {
        return Err(CoreError::Integrity(format!(
            "referenced artist {artist_id} does not exist"
        )));
    }

    let data = CreateAlbum {
        artist_id,
        title: input.title.trim().to_string(),
        korean_title: input.korean_title,
        release_date: parse_date("releaseDate", &input.release_date)?,
        album_type: input.album_type.into(),
        cover_url: input.cover_url,
    };
    AlbumRepo::create(pool, &data).await.map_err(classify_db_error)
}

pub async fn get_album(pool: &DbPool, id: EntityId) -> CoreResult<Album> {
    AlbumRepo::find_by_id(pool, id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Album", id })
}

/// Albums ordered by descending release date, paginated.
pub async fn list_albums(
    pool: &DbPool,
    skip: Option<i64>,
    take: Option<i64>,
) -> CoreResult<Vec<Album>> {
    AlbumRepo::list(pool, skip, take)
        .await
        .map_err(classify_db_error)
}

/// All albums of an artist, newest first.
pub async fn albums_by_artist(pool: &DbPool, artist_id: EntityId) -> CoreResult<Vec<Album>> {
    AlbumRepo::list_by_artist(pool, artist_id)
        .await
        .map_err(classify_db_error)
}

/// The most recently released albums across the whole catalog.
pub async fn recent_releases(pool: &DbPool, take: Option<i64>) -> CoreResult<Vec<Album>> {
    let take = take.unwrap_or(DEFAULT_RECENT_RELEASES);
    AlbumRepo::list(pool, None, Some(take))
        .await
        .map_err(classify_db_error)
}

pub async fn update_album(
    pool: &DbPool,
    id: EntityId,
    input: UpdateAlbumInput,
) -> CoreResult<Album> {
    require_if_present("title", input.title.as_deref())?;
    let data = UpdateAlbum {
        title: input.title.map(|t| t.trim().to_string()),
        korean_title: input.korean_title,
        release_date: parse_opt_date("releaseDate", input.release_date.as_deref())?,
        album_type: input.album_type.map(Into::into),
        cover_url: input.cover_url,
    };
    AlbumRepo::update(pool, id, &data)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Album", id })
}

/// Returns `false` when the id does not exist. Deleting an album cascades to
/// its tracks and favorites referencing them.
pub async fn delete_album(pool: &DbPool, id: EntityId) -> CoreResult<bool> {
    AlbumRepo::delete(pool, id).await.map_err(classify_db_error)
}

pub async fn search_albums(pool: &DbPool, query: &str) -> CoreResult<Vec<Album>> {
    AlbumRepo::search(pool, query)
        .await
        .map_err(classify_db_error)
}
