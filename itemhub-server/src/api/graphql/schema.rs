//! Query and mutation roots

use crate::api::graphql::types::*;
use async_graphql::{Context, ID, Object, Result as GQLResult};
use itemhub_core::{Error, ItemStore};
use std::sync::Arc;

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All items, ordered by id
    async fn items(&self, ctx: &Context<'_>) -> GQLResult<Vec<ItemObject>> {
        let store = ctx.data::<Arc<ItemStore>>()?;
        Ok(store.list().into_iter().map(ItemObject::from).collect())
    }

    /// Item by id, or null when absent
    async fn item(&self, ctx: &Context<'_>, id: ID) -> GQLResult<Option<ItemObject>> {
        let store = ctx.data::<Arc<ItemStore>>()?;
        let id = parse_item_id(&id)?;

        match store.get(id) {
            Ok(item) => Ok(Some(item.into())),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Root mutation type for GraphQL
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an item
    async fn create_item(&self, ctx: &Context<'_>, input: NewItem) -> GQLResult<ItemObject> {
        let store = ctx.data::<Arc<ItemStore>>()?;
        let item = store.create(input.into());
        tracing::info!(id = item.id, "created item");
        Ok(item.into())
    }

    /// Replace name and value of an existing item
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: NewItem,
    ) -> GQLResult<ItemObject> {
        let store = ctx.data::<Arc<ItemStore>>()?;
        let id = parse_item_id(&id)?;
        let item = store.update(id, input.into())?;
        tracing::info!(id, "updated item");
        Ok(item.into())
    }
}
