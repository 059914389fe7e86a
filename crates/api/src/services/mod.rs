//! Service layer: validation, ISO date coercion, and referential checks in
//! front of the repositories. One module per entity group.
//!
//! Nested GraphQL field resolvers call back into these list operations keyed
//! by the parent id; the resulting one-query-per-parent pattern is a
//! documented limitation of the API design, not something the services try
//! to batch away.

pub mod album;
pub mod artist;
pub mod favorite;
pub mod member;
pub mod statistics;
pub mod track;
pub mod user;

use hallyu_core::error::{CoreError, CoreResult};
use hallyu_core::types::EntityId;

/// Coerce a wire `ID` referencing another entity into an [`EntityId`].
pub(crate) fn parse_ref(field: &str, id: &async_graphql::ID) -> CoreResult<EntityId> {
    uuid::Uuid::parse_str(id.as_str())
        .map_err(|_| CoreError::Validation(format!("{field} is not a valid id")))
}

/// Reject empty or whitespace-only values for a required text field.
pub(crate) fn require(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Like [`require`], but only when the optional field is present (update
/// inputs may omit a field, never blank it).
pub(crate) fn require_if_present(field: &str, value: Option<&str>) -> CoreResult<()> {
    match value {
        Some(v) => require(field, v),
        None => Ok(()),
    }
}
