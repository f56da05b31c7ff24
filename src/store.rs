//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only mirror: only synchronizer snapshots write to it.

use leptos::prelude::*;
use reactive_stores::Store;
use item_sync::SyncSnapshot;

use crate::models::{EditingTarget, FormDraft, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items from the latest applied load, in server order
    pub items: Vec<Item>,
    /// A load is in flight
    pub loading: bool,
    /// Message of the last failed operation
    pub error_message: Option<String>,
    /// Current form input
    pub draft: FormDraft,
    /// Create mode or the item being edited
    pub editing_target: EditingTarget,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a synchronizer snapshot into the store
pub fn store_apply_snapshot(store: &AppStore, snapshot: &SyncSnapshot) {
    *store.items().write() = snapshot.items.clone();
    *store.loading().write() = snapshot.loading;
    *store.error_message().write() = snapshot.error_message.clone();
    *store.draft().write() = snapshot.draft.clone();
    *store.editing_target().write() = snapshot.editing_target.clone();
}
