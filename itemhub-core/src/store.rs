//! In-memory item store
//!
//! A single `parking_lot::Mutex` guards both the item map and the identifier
//! counter, so every operation is one critical section:
//! - concurrent creates receive distinct, strictly increasing identifiers
//! - reads never observe a half-applied update
//! - the guard is dropped on every exit path, including `NotFound` returns

use crate::item::{Item, ItemFields, ItemId};
use crate::{Error, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// First identifier handed out by a fresh store
const FIRST_ID: ItemId = 1;

#[derive(Debug)]
struct StoreInner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// Thread-safe owner of all items and of identifier allocation
#[derive(Debug)]
pub struct ItemStore {
    inner: Mutex<StoreInner>,
}

impl ItemStore {
    /// Create an empty store whose first item gets identifier 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                items: BTreeMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// All items in ascending identifier order
    pub fn list(&self) -> Vec<Item> {
        let inner = self.inner.lock();
        inner.items.values().cloned().collect()
    }

    /// A consistent copy of the whole identifier → item mapping
    pub fn snapshot(&self) -> BTreeMap<ItemId, Item> {
        self.inner.lock().items.clone()
    }

    /// Look up a single item
    pub fn get(&self, id: ItemId) -> Result<Item> {
        let inner = self.inner.lock();
        inner.items.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    /// Store a new item under the next identifier
    pub fn create(&self, fields: ItemFields) -> Item {
        let mut inner = self.inner.lock();

        let id = inner.next_id;
        inner.next_id += 1;

        let item = Item {
            id,
            name: fields.name,
            value: fields.value,
        };
        inner.items.insert(id, item.clone());

        tracing::debug!(id, "item created");
        item
    }

    /// Replace name and value of an existing item
    ///
    /// Unknown identifiers leave the store untouched; nothing is upserted.
    pub fn update(&self, id: ItemId, fields: ItemFields) -> Result<Item> {
        let mut inner = self.inner.lock();

        let item = inner.items.get_mut(&id).ok_or(Error::NotFound(id))?;
        item.name = fields.name;
        item.value = fields.value;

        tracing::debug!(id, "item updated");
        Ok(item.clone())
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
