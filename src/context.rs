//! Application Context
//!
//! Shared synchronizer handle provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use item_sync::{ConfigError, HttpItemsApi, LoadOutcome, Saved};

use crate::models::{DraftField, Item, ItemId, ItemSync, SyncConfig};
use crate::store::{store_apply_snapshot, AppStore};

/// App-wide handle to the synchronizer
///
/// Every state change the synchronizer makes is mirrored into the store, so
/// components read the store and call these methods to act.
#[derive(Clone, Copy)]
pub struct AppContext {
    sync: StoredValue<Arc<ItemSync>>,
}

impl AppContext {
    pub fn new(config: SyncConfig, store: AppStore) -> Result<Self, ConfigError> {
        let api = HttpItemsApi::new(config)?;
        let sync = Arc::new(ItemSync::new(api));
        sync.subscribe(move |snapshot| store_apply_snapshot(&store, snapshot));
        store_apply_snapshot(&store, &sync.snapshot());
        Ok(Self {
            sync: StoredValue::new(sync),
        })
    }

    fn sync(&self) -> Arc<ItemSync> {
        self.sync.get_value()
    }

    /// Reload the whole collection
    pub fn reload(&self) {
        let sync = self.sync();
        spawn_local(async move {
            match sync.load().await {
                Ok(LoadOutcome::Applied { count }) => tracing::debug!(count, "[APP] Loaded items"),
                Ok(LoadOutcome::Superseded) => tracing::debug!("[APP] Load superseded"),
                Err(e) => tracing::debug!(error = %e, "[APP] Load failed"),
            }
        });
    }

    /// Create or update from the current draft
    pub fn submit(&self) {
        let sync = self.sync();
        spawn_local(async move {
            match sync.submit().await {
                Ok(Saved::Created) => tracing::debug!("[APP] Item created"),
                Ok(Saved::Updated(id)) => tracing::debug!(%id, "[APP] Item updated"),
                Err(e) => tracing::debug!(error = %e, "[APP] Submit failed"),
            }
        });
    }

    pub fn delete(&self, id: ItemId) {
        let sync = self.sync();
        spawn_local(async move {
            if let Err(e) = sync.delete(&id).await {
                tracing::debug!(%id, error = %e, "[APP] Delete failed");
            }
        });
    }

    pub fn begin_edit(&self, item: &Item) {
        self.sync.with_value(|sync| sync.begin_edit(item));
    }

    pub fn cancel_edit(&self) {
        self.sync.with_value(|sync| sync.cancel_edit());
    }

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.sync.with_value(|sync| sync.edit_draft(field, value));
    }
}
