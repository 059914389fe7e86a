//! Member entity model and DTOs.

use chrono::NaiveDate;
use hallyu_core::types::EntityId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A group member row from the `members` table.
///
/// `position` is an ordered list of role labels (e.g. `"Main Dancer"`,
/// `"Lead Rapper"`); the array order is preserved as given at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: EntityId,
    pub artist_id: EntityId,
    pub name: String,
    pub korean_name: Option<String>,
    pub stage_name: String,
    pub birth_date: Option<NaiveDate>,
    pub position: Vec<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// DTO for creating a new member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub artist_id: EntityId,
    pub name: String,
    pub korean_name: Option<String>,
    pub stage_name: String,
    pub birth_date: Option<NaiveDate>,
    pub position: Vec<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub korean_name: Option<String>,
    pub stage_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
