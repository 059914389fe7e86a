//! GraphQL schema assembly and shared resolver helpers.

pub mod inputs;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, Schema, ID};
use hallyu_core::error::CoreError;
use hallyu_core::types::EntityId;
use hallyu_db::DbPool;
use uuid::Uuid;

use crate::auth::jwt::JwtConfig;
use crate::auth::AuthSession;
use crate::error::graphql_error;
use mutation::MutationRoot;
use query::QueryRoot;

/// The fully wired schema type.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the pool and JWT config injected as context data.
/// Per-request data (the caller's [`AuthSession`]) is attached by the HTTP
/// handler.
pub fn build_schema(pool: DbPool, jwt: JwtConfig) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .data(jwt)
        .finish()
}

/// Parse a wire `ID` into an [`EntityId`], surfacing a validation error for
/// malformed values.
pub(crate) fn parse_id(id: &ID) -> async_graphql::Result<EntityId> {
    Uuid::parse_str(id.as_str()).map_err(|_| {
        graphql_error(CoreError::Validation(format!(
            "malformed id {:?}",
            id.as_str()
        )))
    })
}

/// The acting user's id, or an UNAUTHORIZED error when the request carries
/// no valid Bearer token.
pub(crate) fn require_auth(ctx: &Context<'_>) -> async_graphql::Result<EntityId> {
    ctx.data_opt::<AuthSession>()
        .map(|session| session.user_id)
        .ok_or_else(|| graphql_error(CoreError::Unauthorized("authentication required".into())))
}
