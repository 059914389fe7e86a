//! GraphQL endpoint: POST executes operations, GET serves GraphiQL.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::auth::session_from_headers;
use crate::state::AppState;

/// POST /graphql
///
/// Executes the request against the schema. When a valid Bearer token is
/// present, the caller's [`AuthSession`] is attached as request data so
/// resolvers like `me` and `addFavorite` can identify the user.
///
/// [`AuthSession`]: crate::auth::AuthSession
async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(session) = session_from_headers(&headers, &state.config.jwt) {
        request = request.data(session);
    }
    state.schema.execute(request).await.into()
}

/// GET /graphql -- interactive GraphiQL IDE.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Mount the GraphQL routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}
