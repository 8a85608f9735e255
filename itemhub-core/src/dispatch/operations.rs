//! Built-in item operations of the dispatch table

use super::envelope::Variables;
use crate::item::{ItemFields, ItemId};
use crate::store::ItemStore;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// List every item
pub const GET_ITEMS: &str = "query{GetItems}";

/// Fetch one item by the `id` variable
pub const GET_ITEM: &str = "query{GetItem(id:$id)}";

/// Create an item from the `name` and `value` variables
///
/// The signature keeps the space in `value $value`. Normalized queries
/// never contain whitespace, so this entry is unreachable through
/// [`Dispatcher::dispatch`](super::Dispatcher::dispatch).
pub const CREATE_ITEM: &str = "mutation{CreateItem(name:$name,value $value)}";

/// Replace name and value of the item with the `id` variable
pub const UPDATE_ITEM: &str = "mutation{UpdateItem(id:$id,name:$name,value:$value)}";

pub(crate) fn get_items(store: &ItemStore, _variables: &Variables) -> Result<Value> {
    let items = store.list();
    // An empty listing goes out as null rather than []
    if items.is_empty() {
        return field("GetItems", Value::Null);
    }
    field("GetItems", items)
}

pub(crate) fn get_item(store: &ItemStore, variables: &Variables) -> Result<Value> {
    let id = item_id(variables).ok_or(Error::InvalidId)?;
    field("GetItem", store.get(id)?)
}

pub(crate) fn create_item(store: &ItemStore, variables: &Variables) -> Result<Value> {
    let fields = item_fields(variables).ok_or(Error::InvalidArguments("CreateItem"))?;
    field("CreateItem", store.create(fields))
}

pub(crate) fn update_item(store: &ItemStore, variables: &Variables) -> Result<Value> {
    let (id, fields) = item_id(variables)
        .zip(item_fields(variables))
        .ok_or(Error::InvalidArguments("UpdateItem"))?;
    field("UpdateItem", store.update(id, fields)?)
}

/// Numeric `id` variable
///
/// Fractional values truncate and out-of-range values saturate, so a
/// negative id simply never matches an item.
fn item_id(variables: &Variables) -> Option<ItemId> {
    let value = variables.get("id")?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|n| n as ItemId))
}

fn item_fields(variables: &Variables) -> Option<ItemFields> {
    let name = variables.get("name")?.as_str()?;
    let value = variables.get("value")?.as_str()?;
    Some(ItemFields::new(name, value))
}

/// Wrap `value` as `{name: value}`
fn field(name: &str, value: impl Serialize) -> Result<Value> {
    let mut data = Variables::new();
    data.insert(name.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: Value) -> Variables {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_get_items_empty_is_null() {
        let store = ItemStore::new();
        let data = get_items(&store, &Variables::new()).unwrap();
        assert_eq!(data, json!({"GetItems": null}));
    }

    #[test]
    fn test_get_items_lists_all() {
        let store = ItemStore::new();
        store.create(ItemFields::new("a", "1"));
        store.create(ItemFields::new("b", "2"));

        let data = get_items(&store, &Variables::new()).unwrap();
        assert_eq!(
            data,
            json!({"GetItems": [
                {"id": 1, "name": "a", "value": "1"},
                {"id": 2, "name": "b", "value": "2"},
            ]})
        );
    }

    #[test]
    fn test_item_id_coercion() {
        assert_eq!(item_id(&vars(json!({"id": 3}))), Some(3));
        assert_eq!(item_id(&vars(json!({"id": 3.9}))), Some(3));
        assert_eq!(item_id(&vars(json!({"id": -2}))), Some(-2));
        assert_eq!(item_id(&vars(json!({"id": "3"}))), None);
        assert_eq!(item_id(&vars(json!({"id": null}))), None);
        assert_eq!(item_id(&Variables::new()), None);
    }

    #[test]
    fn test_get_item_errors() {
        let store = ItemStore::new();
        assert!(matches!(
            get_item(&store, &vars(json!({"id": "x"}))),
            Err(Error::InvalidId)
        ));
        assert!(matches!(
            get_item(&store, &vars(json!({"id": 1}))),
            Err(Error::NotFound(1))
        ));
    }

    #[test]
    fn test_create_item_requires_strings() {
        let store = ItemStore::new();
        let result = create_item(&store, &vars(json!({"name": "a", "value": 1})));
        assert!(matches!(result, Err(Error::InvalidArguments("CreateItem"))));
        assert!(store.is_empty());

        let data = create_item(&store, &vars(json!({"name": "a", "value": "1"}))).unwrap();
        assert_eq!(data, json!({"CreateItem": {"id": 1, "name": "a", "value": "1"}}));
    }

    #[test]
    fn test_update_item_argument_checks() {
        let store = ItemStore::new();
        store.create(ItemFields::new("a", "1"));

        let missing_id = update_item(&store, &vars(json!({"name": "b", "value": "2"})));
        assert!(matches!(missing_id, Err(Error::InvalidArguments("UpdateItem"))));

        let unknown = update_item(&store, &vars(json!({"id": 9, "name": "b", "value": "2"})));
        assert!(matches!(unknown, Err(Error::NotFound(9))));

        let data = update_item(&store, &vars(json!({"id": 1, "name": "b", "value": "2"}))).unwrap();
        assert_eq!(data, json!({"UpdateItem": {"id": 1, "name": "b", "value": "2"}}));
    }
}
