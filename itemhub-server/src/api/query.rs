//! Pseudo-GraphQL endpoint
//!
//! `/query` accepts `{"query": ..., "variables": {...}}` with any method and
//! hands it to the literal dispatcher. Domain failures are returned with 200
//! inside the `errors` array; only an undecodable body or an infrastructure
//! failure changes the status code.

use crate::AppState;
use crate::api::ApiError;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    routing::any,
};
use itemhub_core::{QueryRequest, QueryResponse};

/// Create the pseudo-GraphQL router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/query", any(resolve_query))
        .with_state(state)
}

/// Resolve a query envelope
pub async fn resolve_query(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let body = body.map_err(|e| {
        tracing::warn!("Failed to read query body: {}", e);
        ApiError::UnreadableBody
    })?;

    let request: QueryRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected query body: {}", e);
        ApiError::InvalidJson
    })?;

    // The introspection source may touch the filesystem
    let AppState { store, dispatcher } = state;
    let response = tokio::task::spawn_blocking(move || dispatcher.dispatch(&store, &request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(response))
}
