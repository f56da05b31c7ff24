//! HTTP transport implementation.
//!
//! JSON over `reqwest`; in the browser this goes through `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::{ApiResult, ItemsApi};
use crate::config::SyncConfig;
use crate::domain::{Item, ItemId, ItemPayload};
use crate::error::{ApiError, ConfigError};

/// HTTP-based client of the remote item collection.
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    config: SyncConfig,
    client: Client,
}

impl HttpItemsApi {
    /// Creates a transport for a validated configuration.
    pub fn new(config: SyncConfig) -> Result<Self, ConfigError> {
        Self::with_client(config, Client::new())
    }

    /// Creates a transport reusing an existing `reqwest` client.
    pub fn with_client(config: SyncConfig, client: Client) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let url = self.config.collection_url();
        tracing::debug!(%url, "GET collection");
        let response = Self::send(self.client.get(&url)).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, payload: &ItemPayload) -> ApiResult<()> {
        let url = self.config.collection_url();
        tracing::debug!(%url, name = %payload.name, "POST item");
        Self::send(self.client.post(&url).json(payload)).await?;
        Ok(())
    }

    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> ApiResult<()> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, name = %payload.name, "PUT item");
        Self::send(self.client.put(&url).json(payload)).await?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, "DELETE item");
        Self::send(self.client.delete(&url)).await?;
        Ok(())
    }
}
