//! Query root: one resolver per operation, each mapping to one service call.

use async_graphql::{Context, Object, Result, ID};
use hallyu_db::DbPool;

use super::types::{Album, Artist, Member, Statistics, Track, User};
use super::{parse_id, require_auth};
use crate::error::graphql_error;
use crate::services;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All artists, ordered by name, paginated with skip/take.
    async fn artists(
        &self,
        ctx: &Context<'_>,
        skip: Option<i64>,
        take: Option<i64>,
    ) -> Result<Vec<Artist>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let artists = services::artist::list_artists(pool, skip, take)
            .await
            .map_err(graphql_error)?;
        Ok(artists.into_iter().map(Artist::from).collect())
    }

    async fn artist(&self, ctx: &Context<'_>, id: ID) -> Result<Artist> {
        let pool = ctx.data_unchecked::<DbPool>();
        let artist = services::artist::get_artist(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)?;
        Ok(artist.into())
    }

    /// All albums, newest first, paginated with skip/take.
    async fn albums(
        &self,
        ctx: &Context<'_>,
        skip: Option<i64>,
        take: Option<i64>,
    ) -> Result<Vec<Album>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let albums = services::album::list_albums(pool, skip, take)
            .await
            .map_err(graphql_error)?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    async fn album(&self, ctx: &Context<'_>, id: ID) -> Result<Album> {
        let pool = ctx.data_unchecked::<DbPool>();
        let album = services::album::get_album(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)?;
        Ok(album.into())
    }

    async fn albums_by_artist(&self, ctx: &Context<'_>, artist_id: ID) -> Result<Vec<Album>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let albums = services::album::albums_by_artist(pool, parse_id(&artist_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    async fn track(&self, ctx: &Context<'_>, id: ID) -> Result<Track> {
        let pool = ctx.data_unchecked::<DbPool>();
        let track = services::track::get_track(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)?;
        Ok(track.into())
    }

    /// Tracks of an album, ordered by ascending track number.
    async fn tracks_by_album(&self, ctx: &Context<'_>, album_id: ID) -> Result<Vec<Track>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let tracks = services::track::tracks_by_album(pool, parse_id(&album_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    async fn member(&self, ctx: &Context<'_>, id: ID) -> Result<Member> {
        let pool = ctx.data_unchecked::<DbPool>();
        let member = services::member::get_member(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)?;
        Ok(member.into())
    }

    /// Members of an artist, ordered by ascending birth date.
    async fn members_by_artist(&self, ctx: &Context<'_>, artist_id: ID) -> Result<Vec<Member>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let members = services::member::members_by_artist(pool, parse_id(&artist_id)?)
            .await
            .map_err(graphql_error)?;
        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let pool = ctx.data_unchecked::<DbPool>();
        let user = services::user::get_user(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)?;
        Ok(user.into())
    }

    /// The authenticated user. Requires a valid Bearer token.
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let user_id = require_auth(ctx)?;
        let pool = ctx.data_unchecked::<DbPool>();
        let user = services::user::get_user(pool, user_id)
            .await
            .map_err(graphql_error)?;
        Ok(user.into())
    }

    async fn search_artists(&self, ctx: &Context<'_>, query: String) -> Result<Vec<Artist>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let artists = services::artist::search_artists(pool, &query)
            .await
            .map_err(graphql_error)?;
        Ok(artists.into_iter().map(Artist::from).collect())
    }

    async fn search_albums(&self, ctx: &Context<'_>, query: String) -> Result<Vec<Album>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let albums = services::album::search_albums(pool, &query)
            .await
            .map_err(graphql_error)?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    async fn search_tracks(&self, ctx: &Context<'_>, query: String) -> Result<Vec<Track>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let tracks = services::track::search_tracks(pool, &query)
            .await
            .map_err(graphql_error)?;
        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// The most recently released albums (default 10).
    async fn recent_releases(&self, ctx: &Context<'_>, take: Option<i64>) -> Result<Vec<Album>> {
        let pool = ctx.data_unchecked::<DbPool>();
        let albums = services::album::recent_releases(pool, take)
            .await
            .map_err(graphql_error)?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    async fn statistics(&self, ctx: &Context<'_>) -> Result<Statistics> {
        let pool = ctx.data_unchecked::<DbPool>();
        let counts = services::statistics::statistics(pool)
            .await
            .map_err(graphql_error)?;
        Ok(counts.into())
    }
}
