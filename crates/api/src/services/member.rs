//! Member operations.

use hallyu_core::dates::parse_opt_date;
use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;
use hallyu_db::models::member::{CreateMember, Member, UpdateMember};
use hallyu_db::repositories::{ArtistRepo, MemberRepo};
use hallyu_db::DbPool;

use crate::error::classify_db_error;
use crate::graphql::inputs::{CreateMemberInput, UpdateMemberInput};
use crate::services::{parse_ref, require, require_if_present};

pub async fn create_member(pool: &DbPool, input: CreateMemberInput) -> CoreResult<Member> {
    require("name", &input.name)?;
    require("stageName", &input.stage_name)?;

    let artist_id = parse_ref("artistId", &input.artist_id)?;
    let artist = ArtistRepo::find_by_id(pool, artist_id)
        .await
        .map_err(classify_db_error)?;
    if artist.is_none() {
        return Err(CoreError::Integrity(format!(
            "referenced artist {artist_id} does not exist"
        )));
    }

    let data = CreateMember {
        artist_id,
        name: input.name.trim().to_string(),
        korean_name: input.korean_name,
        stage_name: input.stage_name.trim().to_string(),
        birth_date: parse_opt_date("birthDate", input.birth_date.as_deref())?,
        position: input.position.unwrap_or_default(),
        image_url: input.image_url,
    };
    MemberRepo::create(pool, &data).await.map_err(classify_db_error)
}

pub async fn get_member(pool: &DbPool, id: EntityId) -> CoreResult<Member> {
    MemberRepo::find_by_id(pool, id)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Member",
            id,
        })
}

/// Members of an artist, ordered by ascending birth date.
pub async fn members_by_artist(pool: &DbPool, artist_id: EntityId) -> CoreResult<Vec<Member>> {
    MemberRepo::list_by_artist(pool, artist_id)
        .await
        .map_err(classify_db_error)
}

pub async fn update_member(
    pool: &DbPool,
    id: EntityId,
    input: UpdateMemberInput,
) -> CoreResult<Member> {
    require_if_present("name", input.name.as_deref())?;
    require_if_present("stageName", input.stage_name.as_deref())?;
    let data = UpdateMember {
        name: input.name.map(|n| n.trim().to_string()),
        korean_name: input.korean_name,
        stage_name: input.stage_name.map(|n| n.trim().to_string()),
        birth_date: parse_opt_date("birthDate", input.birth_date.as_deref())?,
        position: input.position,
        image_url: input.image_url,
        is_active: input.is_active,
    };
    MemberRepo::update(pool, id, &data)
        .await
        .map_err(classify_db_error)?
        .ok_or(CoreError::NotFound {
            entity: "Member",
            id,
        })
}

/// Returns `false` when the id does not exist.
pub async fn delete_member(pool: &DbPool, id: EntityId) -> CoreResult<bool> {
    MemberRepo::delete(pool, id).await.map_err(classify_db_error)
}
