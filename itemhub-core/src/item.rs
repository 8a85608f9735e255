//! Item record and its client-supplied fields

use serde::{Deserialize, Serialize};

/// Identifier assigned to an item by the store
///
/// Signed so that any integer a client sends can be looked up; the store
/// only ever allocates values starting at 1.
pub type ItemId = i64;

/// The single record type held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation
    pub id: ItemId,
    /// Item name
    pub name: String,
    /// Item value
    pub value: String,
}

/// Mutable fields of an item as sent by clients
///
/// Any `id` in the payload is ignored and missing fields decode as empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemFields {
    /// Item name
    #[serde(default)]
    pub name: String,
    /// Item value
    #[serde(default)]
    pub value: String,
}

impl ItemFields {
    /// Build fields from a name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
