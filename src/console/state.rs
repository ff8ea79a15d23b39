//! Client-side state for the items console.
//!
//! Create and update refetch the full list on success. Delete is optimistic:
//! the item disappears locally first and the previous list is restored
//! exactly if the server does not confirm.

use tracing::{error, info};

use super::api::ItemsApi;
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
}

/// Form contents for a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleState {
    items: Vec<Item>,
    phase: LoadPhase,
    submitting: bool,
    pub new_item: ItemDraft,
    editing: Option<Item>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleState {
    /// Fresh state: nothing fetched yet, so the list is loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Loading,
            submitting: false,
            new_item: ItemDraft::default(),
            editing: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn editing(&self) -> Option<&Item> {
        self.editing.as_ref()
    }

    /// Fetch the full list. On failure the previous list is kept.
    pub async fn load(&mut self, api: &dyn ItemsApi) {
        self.phase = LoadPhase::Loading;
        match api.list_items().await {
            Ok(items) => self.items = items,
            Err(e) => error!("Failed to fetch items: {e}"),
        }
        self.phase = LoadPhase::Loaded;
    }

    /// Submit the new-item form. Returns whether the server accepted it.
    pub async fn create(&mut self, api: &dyn ItemsApi) -> bool {
        if !self.new_item.is_complete() || self.submitting {
            return false;
        }
        self.submitting = true;
        let created = match api
            .create_item(&self.new_item.name, &self.new_item.description)
            .await
        {
            Ok(item) => {
                info!(item_id = %item.id, "Created item");
                self.new_item.clear();
                self.load(api).await;
                true
            }
            Err(e) => {
                error!("Failed to create item: {e}");
                false
            }
        };
        self.submitting = false;
        created
    }

    /// Remove an item locally, then ask the server. Restores the list on failure.
    pub async fn delete(&mut self, api: &dyn ItemsApi, id: &str) -> bool {
        let original_items = self.items.clone();
        self.items.retain(|item| item.id != id);
        match api.delete_item(id).await {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to delete item: {e}");
                self.items = original_items;
                false
            }
        }
    }

    /// Open the edit view on a copy of the item with `id`. Returns false if it is not listed.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        self.editing = self.items.iter().find(|item| item.id == id).cloned();
        self.editing.is_some()
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        if let Some(item) = self.editing.as_mut() {
            item.name = name.into();
        }
    }

    pub fn set_edit_description(&mut self, description: impl Into<String>) {
        if let Some(item) = self.editing.as_mut() {
            item.description = description.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the edit view. On failure the view stays open with the edits intact.
    pub async fn update(&mut self, api: &dyn ItemsApi) -> bool {
        if self.submitting {
            return false;
        }
        let Some(editing) = self.editing.clone() else {
            return false;
        };
        self.submitting = true;
        let updated = match api
            .update_item(&editing.id, &editing.name, &editing.description)
            .await
        {
            Ok(item) => {
                info!(item_id = %item.id, "Updated item");
                self.editing = None;
                self.load(api).await;
                true
            }
            Err(e) => {
                error!("Failed to update item: {e}");
                false
            }
        };
        self.submitting = false;
        updated
    }
}
