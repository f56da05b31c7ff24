//! In-memory collection for tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ApiResult, ItemsApi};
use crate::domain::{Item, ItemId, ItemPayload};
use crate::error::{ApiError, Operation};

/// A request the mock received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(ItemPayload),
    Update(ItemId, ItemPayload),
    Delete(ItemId),
}

#[derive(Debug, Default)]
struct MockState {
    items: Vec<Item>,
    next_id: i64,
    calls: Vec<ApiCall>,
    fail_load: Option<ApiError>,
    fail_save: Option<ApiError>,
    fail_delete: Option<ApiError>,
}

/// A mock collection behaving like the real backend.
///
/// Clones share the same collection, so a test can keep a handle after
/// moving one into a synchronizer.
#[derive(Debug, Clone, Default)]
pub struct MockItemsApi {
    state: Arc<Mutex<MockState>>,
}

impl MockItemsApi {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection pre-populated with items.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|item| match item.id {
                ItemId::Number(n) => Some(n),
                ItemId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            state: Arc::new(Mutex::new(MockState {
                items,
                next_id,
                ..Default::default()
            })),
        }
    }

    /// Makes every request of `op` fail with `error` until cleared.
    pub fn fail(&self, op: Operation, error: ApiError) {
        let mut state = self.state.lock();
        match op {
            Operation::Load => state.fail_load = Some(error),
            Operation::Save => state.fail_save = Some(error),
            Operation::Delete => state.fail_delete = Some(error),
        }
    }

    /// Clears all injected failures.
    pub fn recover(&self) {
        let mut state = self.state.lock();
        state.fail_load = None;
        state.fail_save = None;
        state.fail_delete = None;
    }

    /// Replaces the server-side collection without going through the API.
    pub fn set_items(&self, items: Vec<Item>) {
        self.state.lock().items = items;
    }

    /// Current server-side collection.
    pub fn items(&self) -> Vec<Item> {
        self.state.lock().items.clone()
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().calls.clone()
    }

    /// Number of `list` calls received so far.
    pub fn list_calls(&self) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| **call == ApiCall::List)
            .count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ItemsApi for MockItemsApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::List);
        match &state.fail_load {
            Some(error) => Err(error.clone()),
            None => Ok(state.items.clone()),
        }
    }

    async fn create(&self, payload: &ItemPayload) -> ApiResult<()> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::Create(payload.clone()));
        if let Some(error) = &state.fail_save {
            return Err(error.clone());
        }
        state.next_id += 1;
        let item = Item {
            id: ItemId::Number(state.next_id),
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
        };
        state.items.push(item);
        Ok(())
    }

    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> ApiResult<()> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::Update(id.clone(), payload.clone()));
        if let Some(error) = &state.fail_save {
            return Err(error.clone());
        }
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or(ApiError::Status(404))?;
        item.name = payload.name.clone();
        item.description = payload.description.clone();
        item.price = payload.price;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::Delete(id.clone()));
        if let Some(error) = &state.fail_delete {
            return Err(error.clone());
        }
        let before = state.items.len();
        state.items.retain(|item| item.id != *id);
        if state.items.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}
