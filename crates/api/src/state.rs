use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::CatalogSchema;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hallyu_db::DbPool,
    /// Server configuration (read by the GraphQL handler for token
    /// validation and by the middleware stack).
    pub config: Arc<ServerConfig>,
    /// The executable GraphQL schema.
    pub schema: CatalogSchema,
}
