//! Remote Collection Layer
//!
//! The synchronizer only sees the collection through [`ItemsApi`];
//! [`HttpItemsApi`] talks to the real backend. `MockItemsApi` keeps an
//! in-memory collection for tests (`mock` feature).

mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

use async_trait::async_trait;

use crate::domain::{Item, ItemId, ItemPayload};
use crate::error::ApiError;

pub use http::HttpItemsApi;
#[cfg(any(test, feature = "mock"))]
pub use mock::{ApiCall, MockItemsApi};

/// Common result type for transport calls
pub type ApiResult<T> = Result<T, ApiError>;

/// The four requests of the collection contract
///
/// Futures are `Send` on native targets; in the browser the fetch futures
/// are not, so the bound is dropped there.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ItemsApi {
    /// `GET /items`, in server order
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /items`
    async fn create(&self, payload: &ItemPayload) -> ApiResult<()>;

    /// `PUT /items/{id}`
    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> ApiResult<()>;

    /// `DELETE /items/{id}`
    async fn delete(&self, id: &ItemId) -> ApiResult<()>;
}
