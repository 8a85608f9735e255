//! GraphQL API module
//!
//! Schema-driven GraphQL over the item store, served at `/query` with a
//! playground at `/`. Every `/query` exchange passes through the
//! request/response logging middleware.

mod schema;
mod types;

pub use schema::*;
pub use types::*;

use crate::AppState;
use crate::middleware::log_exchange;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
};
use itemhub_core::ItemStore;
use std::sync::Arc;

/// GraphQL schema type
pub type ItemSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Path the playground sends queries to
pub const QUERY_PATH: &str = "/query";

/// Create a new GraphQL schema over `store`
pub fn create_schema(store: Arc<ItemStore>) -> ItemSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Create the GraphQL router
pub fn router(state: AppState) -> Router {
    let schema = create_schema(state.store);

    Router::new()
        .route("/", get(graphql_playground))
        .route(
            QUERY_PATH,
            get(graphql_handler)
                .post(graphql_handler)
                .route_layer(middleware::from_fn(log_exchange)),
        )
        .with_state(schema)
}

/// GraphQL query handler
pub async fn graphql_handler(
    State(schema): State<ItemSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL playground handler
pub async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new(QUERY_PATH),
    ))
}
