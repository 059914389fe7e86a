//! Mutation root: one resolver per operation, each mapping to one service
//! call.

use async_graphql::{Context, Object, Result, ID};
use hallyu_core::favorite::FavoriteTarget;
use hallyu_db::DbPool;

use super::inputs::{
    AddFavoriteInput, CreateAlbumInput, CreateArtistInput, CreateMemberInput, CreateTrackInput,
    UpdateAlbumInput, UpdateArtistInput, UpdateMemberInput, UpdateTrackInput, UpdateUserInput,
};
use super::types::{Album, Artist, AuthPayload, Favorite, Member, Track, User};
use super::{parse_id, require_auth};
use crate::auth::jwt::JwtConfig;
use crate::error::graphql_error;
use crate::services;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // --- Artists ---

    async fn create_artist(&self, ctx: &Context<'_>, input: CreateArtistInput) -> Result<Artist> {
        let pool = ctx.data_unchecked::<DbPool>();
        let artist = services::artist::create_artist(pool, input)
            .await
            .map_err(graphql_error)?;
        Ok(artist.into())
    }

    async fn update_artist(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateArtistInput,
    ) -> Result<Artist> {
        let pool = ctx.data_unchecked::<DbPool>();
        let artist = services::artist::update_artist(pool, parse_id(&id)?, input)
            .await
            .map_err(graphql_error)?;
        Ok(artist.into())
    }

    /// Deletes an artist and, by cascade, its members, albums, and tracks.
    /// Returns `false` when the id does not exist.
    async fn delete_artist(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let pool = ctx.data_unchecked::<DbPool>();
        services::artist::delete_artist(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)
    }

    // --- Albums ---

    async fn create_album(&self, ctx: &Context<'_>, input: CreateAlbumInput) -> Result<Album> {
        let pool = ctx.data_unchecked::<DbPool>();
        let album = services::album::create_album(pool, input)
            .await
            .map_err(graphql_error)?;
        Ok(album.into())
    }

    async fn update_album(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateAlbumInput,
    ) -> Result<Album> {
        let pool = ctx.data_unchecked::<DbPool>();
        let album = services::album::update_album(pool, parse_id(&id)?, input)
            .await
            .map_err(graphql_error)?;
        Ok(album.into())
    }

    /// Returns `false` when the id does not exist.
    async fn delete_album(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let pool = ctx.data_unchecked::<DbPool>();
        services::album::delete_album(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)
    }

    // --- Tracks ---

    async fn create_track(&self, ctx: &Context<'_>, input: CreateTrackInput) -> Result<Track> {
        let pool = ctx.data_unchecked::<DbPool>();
        let track = services::track::create_track(pool, input)
            .await
            .map_err(graphql_error)?;
        Ok(track.into())
    }

    async fn update_track(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTrackInput,
    ) -> Result<Track> {
        let pool = ctx.data_unchecked::<DbPool>();
        let track = services::track::update_track(pool, parse_id(&id)?, input)
            .await
            .map_err(graphql_error)?;
        Ok(track.into())
    }

    /// Returns `false` when the id does not exist.
    async fn delete_track(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let pool = ctx.data_unchecked::<DbPool>();
        services::track::delete_track(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)
    }

    // --- Members ---

    async fn create_member(&self, ctx: &Context<'_>, input: CreateMemberInput) -> Result<Member> {
        let pool = ctx.data_unchecked::<DbPool>();
        let member = services::member::create_member(pool, input)
            .await
            .map_err(graphql_error)?;
        Ok(member.into())
    }

    async fn update_member(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateMemberInput,
    ) -> Result<Member> {
        let pool = ctx.data_unchecked::<DbPool>();
        let member = services::member::update_member(pool, parse_id(&id)?, input)
            .await
            .map_err(graphql_error)?;
        Ok(member.into())
    }

    /// Returns `false` when the id does not exist.
    async fn delete_member(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let pool = ctx.data_unchecked::<DbPool>();
        services::member::delete_member(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)
    }

    // --- Users ---

    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
        profile_image_url: Option<String>,
    ) -> Result<User> {
        let pool = ctx.data_unchecked::<DbPool>();
        let user = services::user::create_user(pool, username, email, password, profile_image_url)
            .await
            .map_err(graphql_error)?;
        Ok(user.into())
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<User> {
        let pool = ctx.data_unchecked::<DbPool>();
        let user = services::user::update_user(pool, parse_id(&id)?, input)
            .await
            .map_err(graphql_error)?;
        Ok(user.into())
    }

    /// Authenticate by email and password.
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthPayload> {
        let pool = ctx.data_unchecked::<DbPool>();
        let jwt = ctx.data_unchecked::<JwtConfig>();
        let (token, user) = services::user::login(pool, jwt, &email, &password)
            .await
            .map_err(graphql_error)?;
        Ok(AuthPayload {
            token,
            user: user.into(),
        })
    }

    // --- Favorites ---

    /// Record a favorite for the authenticated user. Exactly one of the
    /// input's three reference fields must be set.
    async fn add_favorite(&self, ctx: &Context<'_>, input: AddFavoriteInput) -> Result<Favorite> {
        let user_id = require_auth(ctx)?;
        let pool = ctx.data_unchecked::<DbPool>();

        let artist_id = input.artist_id.as_ref().map(parse_id).transpose()?;
        let album_id = input.album_id.as_ref().map(parse_id).transpose()?;
        let track_id = input.track_id.as_ref().map(parse_id).transpose()?;
        let target =
            FavoriteTarget::from_refs(artist_id, album_id, track_id).map_err(graphql_error)?;

        let favorite = services::favorite::add_favorite(pool, user_id, target)
            .await
            .map_err(graphql_error)?;
        Ok(favorite.into())
    }

    /// Returns `false` when the id does not exist.
    async fn remove_favorite(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let pool = ctx.data_unchecked::<DbPool>();
        services::favorite::remove_favorite(pool, parse_id(&id)?)
            .await
            .map_err(graphql_error)
    }
}
