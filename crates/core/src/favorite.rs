//! Tagged representation of a favorite's referent.
//!
//! The wire schema keeps three optional id fields for client compatibility;
//! the service layer converts them into this variant so that exactly one
//! referent is guaranteed past the API boundary.

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

/// The single entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Artist(EntityId),
    Album(EntityId),
    Track(EntityId),
}

impl FavoriteTarget {
    /// Build a target from the three optional wire fields.
    ///
    /// Exactly one of the ids must be set.
    pub fn from_refs(
        artist_id: Option<EntityId>,
        album_id: Option<EntityId>,
        track_id: Option<EntityId>,
    ) -> CoreResult<Self> {
        match (artist_id, album_id, track_id) {
            (Some(id), None, None) => Ok(Self::Artist(id)),
            (None, Some(id), None) => Ok(Self::Album(id)),
            (None, None, Some(id)) => Ok(Self::Track(id)),
            (None, None, None) => Err(CoreError::Validation(
                "a favorite must reference an artist, album, or track".into(),
            )),
            _ => Err(CoreError::Validation(
                "a favorite must reference exactly one of artist, album, or track".into(),
            )),
        }
    }

    pub fn artist_id(&self) -> Option<EntityId> {
        match self {
            Self::Artist(id) => Some(*id),
            _ => None,
        }
    }

    pub fn album_id(&self) -> Option<EntityId> {
        match self {
            Self::Album(id) => Some(*id),
            _ => None,
        }
    }

    pub fn track_id(&self) -> Option<EntityId> {
        match self {
            Self::Track(id) => Some(*id),
            _ => None,
        }
    }
}
