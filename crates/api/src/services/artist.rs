//! Artist operations.

use hallyu_core::dates::parse_opt_date;
use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;
use hallyu_db::models::artist::{Artist, CreateArtist, UpdateArtist};
use hallyu_db::repositories::ArtistRepo;
use hallyu_db::DbPool;

use crate::error::classify_db_error;
use crate::graphql::inputs::{CreateArtistInput, UpdateArtistInput};
use crate::services::{require, require_if_present};

pub async fn create_artist(pool: &DbPool, input: CreateArtistInput) -> CoreResult<Artist> {
    require("name", &input.name)?;
    let data = CreateArtist {
        name: input.name.trim().to_string(),
        korean_name: input.korean_name,
        debut_date: parse_opt_date("debutDate", input.debut_date.as_deref())?,
        company: input.company,
        image_url: input.image_url,
    };
    ArtistRepo::create(pool, &data).await.map_err(classify_db_error)
}

pub async fn get_artist(pool: &DbPool, id: EntityId) -> CoreResult<Artist> {
    ArtistRepo::find_by_id(pool, id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Artist",
            id,
        })
}

pub async fn list_artists(
    pool: &DbPool,
    skip: Option<i64>,
    take: Option<i64>,
) -> CoreResult<Vec<Artist>> {
    ArtistRepo::list(pool, skip, take)
        .await
        .map_err(classify_db_error)
}

pub async fn update_artist(
    pool: &DbPool,
    id: EntityId,
    input: UpdateArtistInput,
) -> CoreResult<Artist> {
    require_if_present("name", input.name.as_deref())?;
    let data = UpdateArtist {
        name: input.name.map(|n| n.trim().to_string()),
        korean_name: input.korean_name,
        debut_date: parse_opt_date("debutDate", input.debut_date.as_deref())?,
        company: input.company,
        image_url: input.image_url,
        is_active: input.is_active,
    };
    ArtistRepo::update(pool, id, &data)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Artist",
            id,
        })
}

/// Returns `false` when the id does not exist. Deleting an artist cascades
/// to its members, albums, tracks, and favorites referencing them.
pub async fn delete_artist(pool: &DbPool, id: EntityId) -> CoreResult<bool> {
    ArtistRepo::delete(pool, id).await.map_err(classify_db_error)
}

pub async fn search_artists(pool: &DbPool, query: &str) -> CoreResult<Vec<Artist>> {
    ArtistRepo::search(pool, query)
        .await
        .map_err(classify_db_error)
}
