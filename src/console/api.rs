use async_trait::async_trait;

use super::error::ConsoleError;
use crate::item::{Item, MessageBody};

/// The four calls the console makes against the items API.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ConsoleError>;

    async fn create_item(&self, name: &str, description: &str) -> Result<Item, ConsoleError>;

    /// Sends both fields; the server merges them into the existing record.
    async fn update_item(
        &self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<Item, ConsoleError>;

    async fn delete_item(&self, id: &str) -> Result<MessageBody, ConsoleError>;
}
