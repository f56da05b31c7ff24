//! Configuration for the remote item collection.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::ItemId;
use crate::error::ConfigError;

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Collection path segment served by the backend.
pub const DEFAULT_COLLECTION: &str = "items";

/// Where the remote collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Scheme, host and optional prefix, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Path segment of the collection resource.
    pub collection: String,
}

impl SyncConfig {
    /// Creates a configuration for the given base endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Sets the collection path segment.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Parses a JSON configuration document; missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if self.collection.trim_matches('/').is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        Ok(())
    }

    /// `GET`/`POST` target, e.g. `http://localhost:8000/items`.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    /// `PUT`/`DELETE` target with the identifier percent-encoded.
    pub fn item_url(&self, id: &ItemId) -> String {
        let segment = id.to_string();
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(&segment, NON_ALPHANUMERIC)
        )
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
