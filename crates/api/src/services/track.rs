//! Track operations.

use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;
use hallyu_db::models::track::{CreateTrack, Track, UpdateTrack};
use hallyu_db::repositories::{AlbumRepo, TrackRepo};
use hallyu_db::DbPool;

use crate::error::classify_db_error;
use crate::graphql::inputs::{CreateTrackInput, UpdateTrackInput};
use crate::services::{parse_ref, require, require_if_present};

fn validate_track_number(track_number: i32) -> CoreResult<()> {
    if track_number < 1 {
        return Err(CoreError::Validation(
            "trackNumber must be 1 or greater".into(),
        ));
    }
    Ok(())
}

fn validate_duration(duration: Option<i32>) -> CoreResult<()> {
    if matches!(duration, Some(d) if d < 0) {
        return Err(CoreError::Validation(
            "duration must not be negative".into(),
        ));
    }
    Ok(())
}

pub async fn create_track(pool: &DbPool, input: CreateTrackInput) -> CoreResult<Track> {
    require("title", &input.title)?;
    validate_track_number(input.track_number)?;
    validate_duration(input.duration)?;

    let album_id = parse_ref("albumId", &input.album_id)?;
    let artist_id = parse_ref("artistId", &input.artist_id)?;

    // The album check doubles as the artist consistency check: a track's
    // denormalized artist_id must match the album's artist.
    let album = AlbumRepo::find_by_id(pool, album_id)
        .await
        .map_err(classify_db_error)?
        .ok_or_else(|| {
            CoreError::Integrity(format!("referenced album {album_id} does not exist"))
        })?;
    if album.artist_id != artist_id {
        return Err(CoreError::Validation(
            "artistId must match the album's artist".into(),
        ));
    }

    let data = CreateTrack {
        album_id,
        artist_id,
        title: input.title.trim().to_string(),
        korean_title: input.korean_title,
        duration: input.duration,
        track_number: input.track_number,
        is_title: input.is_title.unwrap_or(false),
        music_video_url: input.music_video_url,
    };
    TrackRepo::create(pool, &data).await.map_err(classify_db_error)
}

pub async fn get_track(pool: &DbPool, id: EntityId) -> CoreResult<Track> {
    TrackRepo::find_by_id(pool, id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Track", id })
}

/// Tracks of an album, ordered by ascending track number.
pub async fn tracks_by_album(pool: &DbPool, album_id: EntityId) -> CoreResult<Vec<Track>> {
    TrackRepo::list_by_album(pool, album_id)
        .await
        .map_err(classify_db_error)
}

pub async fn update_track(
    pool: &DbPool,
    id: EntityId,
    input: UpdateTrackInput,
) -> CoreResult<Track> {
    require_if_present("title", input.title.as_deref())?;
    if let Some(track_number) = input.track_number {
        validate_track_number(track_number)?;
    }
    validate_duration(input.duration)?;

    let data = UpdateTrack {
        title: input.title.map(|t| t.trim().to_string()),
        korean_title: input.korean_title,
        duration: input.duration,
        track_number: input.track_number,
        is_title: input.is_title,
        music_video_url: input.music_video_url,
    };
    TrackRepo::update(pool, id, &data)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound { entity: "Track", id })
}

/// Returns `false` when the id does not exist.
pub async fn delete_track(pool: &DbPool, id: EntityId) -> CoreResult<bool> {
    TrackRepo::delete(pool, id).await.map_err(classify_db_error)
}

pub async fn search_tracks(pool: &DbPool, query: &str) -> CoreResult<Vec<Track>> {
    TrackRepo::search(pool, query)
        .await
        .map_err(classify_db_error)
}
