//! REST item endpoints
//!
//! - GET  /items       - All items as an object keyed by id
//! - POST /items       - Create an item (client id ignored)
//! - GET  /items/{id}  - Item by id
//! - PUT  /items/{id}  - Replace name and value of an item
//!
//! Any other method answers 405.

use crate::AppState;
use crate::api::ApiError;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::get,
};
use itemhub_core::{Error, Item, ItemFields, ItemId};
use std::collections::BTreeMap;

/// Create the REST router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(list_items)
                .post(create_item)
                .fallback(method_not_allowed),
        )
        .route(
            "/items/{id}",
            get(get_item).put(update_item).fallback(method_not_allowed),
        )
        .with_state(state)
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Json<BTreeMap<ItemId, Item>> {
    Json(state.store.snapshot())
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let fields = decode_fields(&body)?;
    let item = state.store.create(fields);
    tracing::info!(id = item.id, "created item");
    Ok(Json(item))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.store.get(id)?))
}

/// PUT /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    let fields = decode_fields(&body)?;
    let item = state.store.update(id, fields)?;
    tracing::info!(id, "updated item");
    Ok(Json(item))
}

/// Fallback for unsupported methods on item routes
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn parse_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse().map_err(|_| Error::InvalidId.into())
}

/// Decode the body regardless of content type
fn decode_fields(body: &[u8]) -> Result<ItemFields, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected item body: {}", e);
        Error::InvalidData.into()
    })
}
