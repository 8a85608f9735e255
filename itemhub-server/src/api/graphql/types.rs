//! GraphQL type definitions

use async_graphql::{ID, InputObject, SimpleObject};
use itemhub_core::{Error, Item, ItemFields, ItemId};

/// GraphQL item type
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Item")]
pub struct ItemObject {
    /// Item ID
    pub id: ID,
    /// Item name
    pub name: String,
    /// Item value
    pub value: String,
}

impl From<Item> for ItemObject {
    fn from(item: Item) -> Self {
        Self {
            id: ID::from(item.id.to_string()),
            name: item.name,
            value: item.value,
        }
    }
}

/// Input for creating or replacing an item
#[derive(Debug, Clone, InputObject)]
pub struct NewItem {
    /// Item name
    pub name: String,
    /// Item value
    pub value: String,
}

impl From<NewItem> for ItemFields {
    fn from(input: NewItem) -> Self {
        ItemFields::new(input.name, input.value)
    }
}

/// Parse a GraphQL ID into a store identifier
pub fn parse_item_id(id: &ID) -> Result<ItemId, Error> {
    id.parse().map_err(|_| Error::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_object_from_item() {
        let object = ItemObject::from(Item {
            id: 42,
            name: "a".into(),
            value: "1".into(),
        });
        assert_eq!(object.id, ID::from("42"));
        assert_eq!(object.name, "a");
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id(&ID::from("7")).unwrap(), 7);
        assert!(matches!(
            parse_item_id(&ID::from("seven")),
            Err(Error::InvalidId)
        ));
    }
}
