//! The authoritative in-memory collection of items.
//!
//! The store is the only owner of the collection. Callers go through the
//! operations below; the server wraps a single store in a lock so every
//! operation is applied atomically with respect to other requests.

use tracing::debug;

use super::error::ItemError;
use super::id::{IdAllocator, IdPolicy};
use super::seed::seed_items;
use super::types::{CreateItemOptions, Item, UpdateItemOptions};

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    ids: IdAllocator,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::seeded(IdPolicy::default())
    }
}

impl ItemStore {
    /// Store holding the three seed records.
    #[must_use]
    pub fn seeded(policy: IdPolicy) -> Self {
        Self::with_items(policy, seed_items())
    }

    /// Store with no records.
    #[must_use]
    pub fn empty(policy: IdPolicy) -> Self {
        Self::with_items(policy, Vec::new())
    }

    #[must_use]
    pub fn with_items(policy: IdPolicy, items: Vec<Item>) -> Self {
        let ids = IdAllocator::new(policy, &items);
        Self { items, ids }
    }

    #[must_use]
    pub fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn find_by_id(&self, id: &str) -> Result<Item, ItemError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ItemError::not_found(id))
    }

    /// Assign an id and add the item at the end of the collection.
    pub fn append(&mut self, options: CreateItemOptions) -> Item {
        let id = self.ids.allocate(self.items.len());
        let item = Item {
            id,
            name: options.name,
            description: options.description,
        };
        debug!(item_id = %item.id, policy = %self.ids.policy(), "Appending item");
        self.items.push(item.clone());
        item
    }

    /// Replace the record with `id` by its merge with `options`, keeping its position.
    pub fn replace_at(&mut self, id: &str, options: &UpdateItemOptions) -> Result<Item, ItemError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ItemError::not_found(id))?;
        let updated = options.apply_to(slot);
        *slot = updated.clone();
        debug!(item_id = %id, "Replaced item");
        Ok(updated)
    }

    /// Remove the first record with `id`.
    pub fn remove_by_id(&mut self, id: &str) -> Result<Item, ItemError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ItemError::not_found(id))?;
        let removed = self.items.remove(index);
        debug!(item_id = %id, "Removed item");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
