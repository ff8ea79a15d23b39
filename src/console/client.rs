use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::api::ItemsApi;
use super::error::ConsoleError;
use crate::item::{CreateItemRequest, Item, MessageBody, UpdateItemRequest};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// HTTP client for the items API.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItemsClient {
    /// Creates a client for the API rooted at `base_url`, e.g. `http://127.0.0.1:3000`
    /// or `http://localhost:9002/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConsoleError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConsoleError::InvalidBaseUrl(base_url));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{id}", self.base_url)
    }
}

/// Decode a success body, or turn a non-2xx response into [`ConsoleError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ConsoleError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let message = response
        .json::<MessageBody>()
        .await
        .map_or_else(|_| unknown_error(status), |body| body.message);
    Err(ConsoleError::Api {
        status: status.as_u16(),
        message,
    })
}

fn unknown_error(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl ItemsApi for ItemsClient {
    #[instrument(skip(self))]
    async fn list_items(&self) -> Result<Vec<Item>, ConsoleError> {
        debug!("Fetching items");
        let response = self.http.get(self.items_url()).send().await?;
        decode(response).await
    }

    #[instrument(skip(self, description))]
    async fn create_item(&self, name: &str, description: &str) -> Result<Item, ConsoleError> {
        let body = CreateItemRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        };
        let response = self.http.post(self.items_url()).json(&body).send().await?;
        decode(response).await
    }

    #[instrument(skip(self, name, description))]
    async fn update_item(
        &self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<Item, ConsoleError> {
        let body = UpdateItemRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
        };
        let response = self.http.put(self.item_url(id)).json(&body).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: &str) -> Result<MessageBody, ConsoleError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        decode(response).await
    }
}
