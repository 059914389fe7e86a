//! Mutation input shapes -- a closed set, one per mutation.
//!
//! Date fields are strings on the wire; the service layer coerces them to
//! native dates and rejects malformed values.

use async_graphql::{InputObject, ID};

use super::types::AlbumType;

#[derive(Debug, InputObject)]
pub struct CreateArtistInput {
    pub name: String,
    pub korean_name: Option<String>,
    pub debut_date: Option<String>,
    pub company: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdateArtistInput {
    pub name: Option<String>,
    pub korean_name: Option<String>,
    pub debut_date: Option<String>,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, InputObject)]
pub struct CreateAlbumInput {
    pub artist_id: ID,
    pub title: String,
    pub korean_title: Option<String>,
    pub release_date: String,
    #[graphql(name = "type")]
    pub album_type: AlbumType,
    pub cover_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdateAlbumInput {
    pub title: Option<String>,
    pub korean_title: Option<String>,
    pub release_date: Option<String>,
    #[graphql(name = "type")]
    pub album_type: Option<AlbumType>,
    pub cover_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct CreateTrackInput {
    pub album_id: ID,
    pub artist_id: ID,
    pub title: String,
    pub korean_title: Option<String>,
    /// Duration in seconds.
    pub duration: Option<i32>,
    pub track_number: i32,
    pub is_title: Option<bool>,
    pub music_video_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdateTrackInput {
    pub title: Option<String>,
    pub korean_title: Option<String>,
    pub duration: Option<i32>,
    pub track_number: Option<i32>,
    pub is_title: Option<bool>,
    pub music_video_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct CreateMemberInput {
    pub artist_id: ID,
    pub name: String,
    pub korean_name: Option<String>,
    pub stage_name: String,
    pub birth_date: Option<String>,
    pub position: Option<Vec<String>>,
    pub image_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdateMemberInput {
    pub name: Option<String>,
    pub korean_name: Option<String>,
    pub stage_name: Option<String>,
    pub birth_date: Option<String>,
    pub position: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, InputObject)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Three optional references for wire compatibility; the mutation converts
/// them into the exactly-one-of [`FavoriteTarget`] before anything persists.
///
/// [`FavoriteTarget`]: hallyu_core::favorite::FavoriteTarget
#[derive(Debug, InputObject)]
pub struct AddFavoriteInput {
    pub artist_id: Option<ID>,
    pub album_id: Option<ID>,
    pub track_id: Option<ID>,
}
