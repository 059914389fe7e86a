//! GraphQL object types.
//!
//! Thin views over the db models: ids become `ID` strings, native dates
//! become ISO strings, and relations resolve lazily through the service
//! layer (one query per parent -- the documented trade-off of this API).

use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject, ID};
use chrono::NaiveDate;
use hallyu_core::types::Timestamp;
use hallyu_db::{models, DbPool};

use super::parse_id;
use crate::error::graphql_error;
use crate::services;

fn date_str(date: NaiveDate) -> String {
    date.to_string()
}

fn timestamp_str(ts: Timestamp) -> String {
    ts.to_rfc3339()
}

/// Release format of an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(remote = "models::album::AlbumType")]
pub enum AlbumType {
    Single,
    MiniAlbum,
    FullAlbum,
    Repackage,
    Special,
    Japanese,
    DigitalSingle,
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Artist {
    pub id: ID,
    pub name: String,
    pub korean_name: Option<String>,
    pub debut_date: Option<String>,
    pub company: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<models::artist::Artist> for Artist {
    fn from(artist: models::artist::Artist) -> Self {
        Self {
            id: ID::from(artist.id.to_string()),
            name: artist.name,
            korean_name: artist.korean_name,
            debut_date: artist.debut_date.map(date_str),
            company: artist.company,
            image_url: artist.image_url,
            is_active: artist.is_active,
            created_at: timestamp_str(artist.created_at),
            updated_at: timestamp_str(artist.updated_at),
        }
    }
}

#[ComplexObject]
impl Artist {
    /// Members of this artist, ordered by ascending birth date.
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<Member>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.id)?;
        let members = services::member::members_by_artist(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(members.into_iter().map(Member::from).collect())
    }

    /// Albums of this artist, newest first.
    async fn albums(&self, ctx: &Context<'_>) -> Result<Vec<Album>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.id)?;
        let albums = services::album::albums_by_artist(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(albums.into_iter().map(Album::from).collect())
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Member {
    pub id: ID,
    pub artist_id: ID,
    pub name: String,
    pub korean_name: Option<String>,
    pub stage_name: String,
    pub birth_date: Option<String>,
    pub position: Vec<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl From<models::member::Member> for Member {
    fn from(member: models::member::Member) -> Self {
        Self {
            id: ID::from(member.id.to_string()),
            artist_id: ID::from(member.artist_id.to_string()),
            name: member.name,
            korean_name: member.korean_name,
            stage_name: member.stage_name,
            birth_date: member.birth_date.map(date_str),
            position: member.position,
            image_url: member.image_url,
            is_active: member.is_active,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Album {
    pub id: ID,
    pub artist_id: ID,
    pub title: String,
    pub korean_title: Option<String>,
    pub release_date: String,
    #[graphql(name = "type")]
    pub album_type: AlbumType,
    pub cover_url: Option<String>,
    pub created_at: String,
}

impl From<models::album::Album> for Album {
    fn from(album: models::album::Album) -> Self {
        Self {
            id: ID::from(album.id.to_string()),
            artist_id: ID::from(album.artist_id.to_string()),
            title: album.title,
            korean_title: album.korean_title,
            release_date: date_str(album.release_date),
            album_type: album.album_type.into(),
            cover_url: album.cover_url,
            created_at: timestamp_str(album.created_at),
        }
    }
}

#[ComplexObject]
impl Album {
    /// The artist this album belongs to.
    async fn artist(&self, ctx: &Context<'_>) -> Result<Artist> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.artist_id)?;
        let artist = services::artist::get_artist(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(artist.into())
    }

    /// Tracks of this album, ordered by ascending track number.
    async fn tracks(&self, ctx: &Context<'_>) -> Result<Vec<Track>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.id)?;
        let tracks = services::track::tracks_by_album(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Track {
    pub id: ID,
    pub album_id: ID,
    pub artist_id: ID,
    pub title: String,
    pub korean_title: Option<String>,
    /// Duration in seconds.
    pub duration: Option<i32>,
    pub track_number: i32,
    pub is_title: bool,
    pub music_video_url: Option<String>,
}

impl From<models::track::Track> for Track {
    fn from(track: models::track::Track) -> Self {
        Self {
            id: ID::from(track.id.to_string()),
            album_id: ID::from(track.album_id.to_string()),
            artist_id: ID::from(track.artist_id.to_string()),
            title: track.title,
            korean_title: track.korean_title,
            duration: track.duration,
            track_number: track.track_number,
            is_title: track.is_title,
            music_video_url: track.music_video_url,
        }
    }
}

#[ComplexObject]
impl Track {
    /// The album this track belongs to.
    async fn album(&self, ctx: &Context<'_>) -> Result<Album> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.album_id)?;
        let album = services::album::get_album(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(album.into())
    }

    /// The artist this track belongs to.
    async fn artist(&self, ctx: &Context<'_>) -> Result<Artist> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.artist_id)?;
        let artist = services::artist::get_artist(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(artist.into())
    }
}

/// Public user view. The password hash never leaves the db model.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<models::user::User> for User {
    fn from(user: models::user::User) -> Self {
        Self {
            id: ID::from(user.id.to_string()),
            username: user.username,
            email: user.email,
            profile_image_url: user.profile_image_url,
            created_at: timestamp_str(user.created_at),
            updated_at: timestamp_str(user.updated_at),
        }
    }
}

#[ComplexObject]
impl User {
    /// Favorites of this user, newest first.
    async fn favorites(&self, ctx: &Context<'_>) -> Result<Vec<Favorite>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.id)?;
        let favorites = services::favorite::favorites_by_user(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(favorites.into_iter().map(Favorite::from).collect())
    }
}

/// A favorite points at exactly one of artist/album/track; the other two
/// object fields resolve to null.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Favorite {
    pub id: ID,
    pub user_id: ID,
    pub artist_id: Option<ID>,
    pub album_id: Option<ID>,
    pub track_id: Option<ID>,
    pub created_at: String,
}

impl From<models::favorite::Favorite> for Favorite {
    fn from(favorite: models::favorite::Favorite) -> Self {
        Self {
            id: ID::from(favorite.id.to_string()),
            user_id: ID::from(favorite.user_id.to_string()),
            artist_id: favorite.artist_id.map(|id| ID::from(id.to_string())),
            album_id: favorite.album_id.map(|id| ID::from(id.to_string())),
            track_id: favorite.track_id.map(|id| ID::from(id.to_string())),
            created_at: timestamp_str(favorite.created_at),
        }
    }
}

#[ComplexObject]
impl Favorite {
    /// The user who recorded this favorite.
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let pool = ctx.data_unchecked::<DbPool>();
        let id = parse_id(&self.user_id)?;
        let user = services::user::get_user(pool, id)
            .await
            .map_err(graphql_error)?;
        Ok(user.into())
    }

    async fn artist(&self, ctx: &Context<'_>) -> Result<Option<Artist>> {
        let Some(artist_id) = &self.artist_id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<DbPool>();
        let artist = services::artist::get_artist(pool, parse_id(artist_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(Some(artist.into()))
    }

    async fn album(&self, ctx: &Context<'_>) -> Result<Option<Album>> {
        let Some(album_id) = &self.album_id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<DbPool>();
        let album = services::album::get_album(pool, parse_id(album_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(Some(album.into()))
    }

    async fn track(&self, ctx: &Context<'_>) -> Result<Option<Track>> {
        let Some(track_id) = &self.track_id else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<DbPool>();
        let track = services::track::get_track(pool, parse_id(track_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(Some(track.into()))
    }
}

/// Counts of each entity kind, computed independently.
#[derive(Debug, Clone, Copy, SimpleObject)]
pub struct Statistics {
    pub artists: i64,
    pub albums: i64,
    pub tracks: i64,
    pub members: i64,
    pub users: i64,
    pub favorites: i64,
}

impl From<services::statistics::CatalogCounts> for Statistics {
    fn from(counts: services::statistics::CatalogCounts) -> Self {
        Self {
            artists: counts.artists,
            albums: counts.albums,
            tracks: counts.tracks,
            members: counts.members,
            users: counts.users,
            favorites: counts.favorites,
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}
